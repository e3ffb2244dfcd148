//! End-to-end rounds driven through `PresenterHandle`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use moviequiz_core::config::QuizConfig;
use moviequiz_core::display::Display;
use moviequiz_core::fetcher::{DataFetcher, TransportError};
use moviequiz_core::storage::StoredValue;
use moviequiz_presenter::QuizPresenter;
use moviequiz_questions::{RemoteSource, StaticSource};
use moviequiz_statistics::StatisticStore;
use moviequiz_test_support::{
    DisplayCall, FixedClock, InMemoryStore, MockRng, RecordingDisplay, StubFetcher,
};

const LIST_URL: &str = "https://movies.example/top250";
const POSTER_URL: &str = "https://img.example/heat._V0_UX600_.jpg";
const MOVIE_LIST: &str = r#"{"errorMessage":"","items":[
    {"title":"Heat","rating":"8.3","image":"https://img.example/heat._V1_.jpg"}
]}"#;

fn statistics(storage: Arc<InMemoryStore>) -> StatisticStore {
    let clock = FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());
    StatisticStore::new(storage, Arc::new(clock))
}

/// Lets every ready task run. Time is paused, so this only advances the
/// clock once nothing else can make progress.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

/// Waits out the answer highlight.
async fn wait_feedback(config: &QuizConfig) {
    tokio::time::sleep(config.feedback_delay + Duration::from_millis(1)).await;
}

#[tokio::test(start_paused = true)]
async fn test_full_round_with_bundled_questions() {
    // Arrange
    let config = QuizConfig::default();
    let storage = Arc::new(InMemoryStore::new());
    let display = Arc::new(RecordingDisplay::new());
    let as_display: Arc<dyn Display> = display.clone();
    let handle = QuizPresenter::spawn(
        Box::new(StaticSource::bundled(Box::new(MockRng))),
        statistics(storage.clone()),
        &as_display,
        &config,
    );
    settle().await;

    // Act
    for _ in 0..10 {
        assert!(handle.answer_yes());
        settle().await;
        wait_feedback(&config).await;
    }

    // Assert
    let steps = display.steps();
    assert_eq!(steps.len(), 10);
    let mut posters: Vec<_> = steps.iter().map(|s| s.image.clone()).collect();
    posters.dedup();
    assert_eq!(posters.len(), 10);

    let highlights: Vec<bool> = display
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            DisplayCall::Highlight(correct) => Some(correct),
            _ => None,
        })
        .collect();
    assert_eq!(highlights.iter().filter(|c| **c).count(), 6);

    let results = display.results();
    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].text,
        "Your result: 6/10\n\
         Quizzes played: 1\n\
         Record: 6/10 (15.01.26 10:00)\n\
         Average accuracy: 60.00%"
    );
    assert_eq!(storage.raw("gamesCount"), Some(StoredValue::Int(1)));

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_second_round_accumulates_statistics() {
    // Arrange
    let config = QuizConfig::default();
    let storage = Arc::new(InMemoryStore::new());
    let display = Arc::new(RecordingDisplay::new());
    let as_display: Arc<dyn Display> = display.clone();
    let handle = QuizPresenter::spawn(
        Box::new(StaticSource::bundled(Box::new(MockRng))),
        statistics(storage.clone()),
        &as_display,
        &config,
    );
    settle().await;
    for _ in 0..10 {
        handle.answer_yes();
        settle().await;
        wait_feedback(&config).await;
    }

    // Act
    handle.restart();
    settle().await;
    for _ in 0..10 {
        handle.answer_no();
        settle().await;
        wait_feedback(&config).await;
    }

    // Assert
    let counters: Vec<String> = display
        .steps()
        .into_iter()
        .map(|s| s.question_number)
        .collect();
    assert_eq!(counters.len(), 20);
    assert_eq!(counters[10], "1/10");
    assert_eq!(counters[19], "10/10");

    let results = display.results();
    assert_eq!(results.len(), 2);
    assert!(results[1].text.starts_with("Your result: 4/10\n"));
    assert!(results[1].text.contains("Quizzes played: 2\n"));
    assert!(results[1].text.contains("Record: 6/10"));
    assert!(results[1].text.ends_with("Average accuracy: 50.00%"));
    assert_eq!(storage.raw("lifetimeTotalAnswers"), Some(StoredValue::Int(20)));

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_remote_round_uses_fetched_posters() {
    // Arrange
    let config = QuizConfig {
        movies_url: LIST_URL.to_owned(),
        ..QuizConfig::default()
    };
    let fetcher = Arc::new(
        StubFetcher::new()
            .with_body(LIST_URL, MOVIE_LIST)
            .with_body(POSTER_URL, vec![1, 2, 3]),
    );
    let display = Arc::new(RecordingDisplay::new());
    let as_display: Arc<dyn Display> = display.clone();
    let handle = QuizPresenter::spawn(
        Box::new(RemoteSource::new(
            fetcher.clone(),
            config.movies_url.clone(),
            Box::new(MockRng),
        )),
        statistics(Arc::new(InMemoryStore::new())),
        &as_display,
        &config,
    );

    // Act
    settle().await;
    handle.answer_yes();
    settle().await;

    // Assert
    let steps = display.steps();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].question, "Is this movie rated higher than 7.5?");
    assert_eq!(
        display.calls().last(),
        Some(&DisplayCall::Highlight(true))
    );
    assert_eq!(fetcher.requested_urls(), vec![LIST_URL, POSTER_URL]);

    handle.shutdown().await.unwrap();
}

/// Fails the first `failures` requests with a transport error, then serves
/// the movie list and poster.
struct RecoveringFetcher {
    failures: usize,
    calls: AtomicUsize,
}

#[async_trait]
impl DataFetcher for RecoveringFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(TransportError::Transport("offline".into()));
        }
        match url {
            LIST_URL => Ok(MOVIE_LIST.as_bytes().to_vec()),
            POSTER_URL => Ok(vec![9]),
            _ => Err(TransportError::Status(404)),
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_network_failure_then_retry_recovers() {
    // Arrange
    let config = QuizConfig {
        movies_url: LIST_URL.to_owned(),
        ..QuizConfig::default()
    };
    let fetcher = Arc::new(RecoveringFetcher {
        failures: 1,
        calls: AtomicUsize::new(0),
    });
    let display = Arc::new(RecordingDisplay::new());
    let as_display: Arc<dyn Display> = display.clone();
    let handle = QuizPresenter::spawn(
        Box::new(RemoteSource::new(fetcher, LIST_URL, Box::new(MockRng))),
        statistics(Arc::new(InMemoryStore::new())),
        &as_display,
        &config,
    );
    settle().await;

    let errors = display.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Unable to load data");
    assert!(display.steps().is_empty());

    // Act
    handle.restart();
    settle().await;

    // Assert
    let steps = display.steps();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].question_number, "1/10");

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_picture_failure_is_reported_with_picture_message() {
    // Arrange
    let config = QuizConfig::default();
    let fetcher = StubFetcher::new()
        .with_body(LIST_URL, MOVIE_LIST)
        .with_error(POSTER_URL, TransportError::Status(500));
    let display = Arc::new(RecordingDisplay::new());
    let as_display: Arc<dyn Display> = display.clone();

    // Act
    let handle = QuizPresenter::spawn(
        Box::new(RemoteSource::new(Arc::new(fetcher), LIST_URL, Box::new(MockRng))),
        statistics(Arc::new(InMemoryStore::new())),
        &as_display,
        &config,
    );
    settle().await;

    // Assert
    let errors = display.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Failed to load the picture");

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_dropping_display_does_not_stop_presenter() {
    // Arrange
    let config = QuizConfig::default();
    let display: Arc<dyn Display> = Arc::new(RecordingDisplay::new());
    let handle = QuizPresenter::spawn(
        Box::new(StaticSource::bundled(Box::new(MockRng))),
        statistics(Arc::new(InMemoryStore::new())),
        &display,
        &config,
    );
    settle().await;

    // Act
    drop(display);
    let sent = handle.answer_yes();
    wait_feedback(&config).await;

    // Assert
    assert!(sent);
    handle.shutdown().await.unwrap();
}
