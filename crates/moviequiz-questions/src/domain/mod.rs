//! Domain types for the question sources.

pub mod movie;
pub mod question;
