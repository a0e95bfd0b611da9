//! Shared output and configuration types for fragstat.
//!
//! These are the structures the engine hands to its consumers. They carry no
//! parsing logic, only the serialized shape of the results.

mod config;
pub mod formatting;
mod report;

pub use config::{AppConfig, OutputFormat};
pub use report::{FlatSummary, MatchBreakdown, MatchReport, RankingEntry};

/// Synthetic kill source used by the server for environmental deaths.
/// Never a player.
pub const WORLD_TOKEN: &str = "<world>";
