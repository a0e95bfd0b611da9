use fragstat_types::MatchBreakdown;

use crate::session::Match;

/// The completed-match store as-is, one report per match in finalize order.
pub fn match_breakdown(matches: &[Match]) -> MatchBreakdown {
    MatchBreakdown(matches.iter().map(Match::to_report).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_preserves_order_and_totals() {
        let mut first = Match::new("match_1");
        first.credit_kill("Zeh");
        first.record_death("MOD_SHOTGUN");
        let second = Match::new("match_2");

        let breakdown = match_breakdown(&[first, second]);
        let ids: Vec<_> = breakdown.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["match_1", "match_2"]);
        assert_eq!(breakdown.get("match_1").unwrap().kills_by_means["MOD_SHOTGUN"], 1);
        assert_eq!(breakdown.get("match_2").unwrap().total_kills, 0);
    }
}
