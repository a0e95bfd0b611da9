//! Console formatting for the kill ranking.
//!
//! JSON projections are produced by serde; only the human-readable ranking
//! needs hand formatting.

use crate::RankingEntry;

pub const RANKING_HEADER: &str = "Player Rankings:";
pub const RANKING_RULE: &str = "================";

/// Format one ranking line. `rank` is 1-based.
///
/// # Examples
/// ```
/// use fragstat_types::RankingEntry;
/// use fragstat_types::formatting::format_ranking_line;
/// let entry = RankingEntry { name: "Zeh".to_string(), total_kills: 12 };
/// assert_eq!(format_ranking_line(1, &entry), "1. Zeh - 12 kills");
/// ```
pub fn format_ranking_line(rank: usize, entry: &RankingEntry) -> String {
    format!("{}. {} - {} kills", rank, entry.name, entry.total_kills)
}

/// Format a full ranking with its header, one entry per line.
pub fn format_ranking(entries: &[RankingEntry]) -> String {
    let mut out = String::with_capacity(32 + entries.len() * 24);
    out.push_str(RANKING_HEADER);
    out.push('\n');
    out.push_str(RANKING_RULE);
    out.push('\n');
    for (idx, entry) in entries.iter().enumerate() {
        out.push_str(&format_ranking_line(idx + 1, entry));
        out.push('\n');
    }
    out
}
