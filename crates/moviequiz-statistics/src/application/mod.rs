//! Statistics services and storage backends.

pub mod json_file_store;
pub mod statistic_store;
