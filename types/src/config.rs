use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which projection the command line prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Flattened summary of all matches
    #[default]
    Basic,
    /// Per-match breakdown
    Multi,
    /// Global kill ranking
    Ranking,
    /// Every projection, one after the other
    All,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 4] = ["basic", "multi", "ranking", "all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Multi => "multi",
            Self::Ranking => "ranking",
            Self::All => "all",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "multi" => Ok(Self::Multi),
            "ranking" => Ok(Self::Ranking),
            "all" => Ok(Self::All),
            other => Err(format!(
                "unknown output format '{}' (available: {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// User configuration, stored as TOML in the platform config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base directory for relative log paths. Empty means the working directory.
    pub log_directory: String,
    /// Format used when none is given on the command line.
    pub default_format: OutputFormat,
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_directory: String::new(),
            default_format: OutputFormat::Basic,
            pretty_json: true,
        }
    }
}
