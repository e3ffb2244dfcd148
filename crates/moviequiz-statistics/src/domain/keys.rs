//! Persisted key names.

/// Keys of the six persisted statistics fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticKey {
    /// Number of completed rounds.
    GamesCount,
    /// Correct answers in the best round.
    BestGameCorrect,
    /// Questions in the best round.
    BestGameTotal,
    /// When the best round was played.
    BestGameDate,
    /// Correct answers across all rounds.
    LifetimeCorrectAnswers,
    /// Questions across all rounds.
    LifetimeTotalAnswers,
}

impl StatisticKey {
    /// Returns the storage key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GamesCount => "gamesCount",
            Self::BestGameCorrect => "bestGameCorrect",
            Self::BestGameTotal => "bestGameTotal",
            Self::BestGameDate => "bestGameDate",
            Self::LifetimeCorrectAnswers => "lifetimeCorrectAnswers",
            Self::LifetimeTotalAnswers => "lifetimeTotalAnswers",
        }
    }
}
