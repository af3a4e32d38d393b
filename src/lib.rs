//! gymtrack - Personal strength-training tracker
//!
//! Percentage-based five-day split with a phased deadlift rebuild,
//! one user, one SQLite file.

pub mod db;
pub mod loads;
pub mod program;
pub mod split;
pub mod tui;
pub mod web;

pub use db::Database;
