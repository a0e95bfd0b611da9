use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// All players seen across every completed match, with kills summed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatSummary {
    pub players: Vec<String>,
    pub kills: BTreeMap<String, u32>,
}

/// Statistics of one completed match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Serialized as the key of the enclosing breakdown map, not as a field.
    #[serde(skip)]
    pub id: String,
    pub total_kills: u32,
    pub players: Vec<String>,
    pub kills: BTreeMap<String, u32>,
    pub kills_by_means: BTreeMap<String, u32>,
}

impl MatchReport {
    /// Sum of the per-cause tallies. Equal to `total_kills` for any match
    /// produced by the engine.
    pub fn cause_total(&self) -> u32 {
        self.kills_by_means.values().sum()
    }
}

/// Completed matches in the order they were finalized.
///
/// Serializes as a JSON object keyed by match id, keeping that order
/// (`match_2` before `match_10`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchBreakdown(pub Vec<MatchReport>);

impl MatchBreakdown {
    pub fn get(&self, id: &str) -> Option<&MatchReport> {
        self.0.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchReport> {
        self.0.iter()
    }
}

impl Serialize for MatchBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for report in &self.0 {
            map.serialize_entry(&report.id, report)?;
        }
        map.end()
    }
}

/// One line of the global kill ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub total_kills: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, total: u32) -> MatchReport {
        MatchReport {
            id: id.to_string(),
            total_kills: total,
            ..Default::default()
        }
    }

    #[test]
    fn test_breakdown_keeps_finalize_order() {
        let breakdown = MatchBreakdown(vec![
            report("match_2", 1),
            report("match_10", 0),
            report("match_1", 3),
        ]);

        let json = serde_json::to_string(&breakdown).unwrap();
        let pos_2 = json.find("\"match_2\"").unwrap();
        let pos_10 = json.find("\"match_10\"").unwrap();
        let pos_1 = json.find("\"match_1\"").unwrap();
        assert!(pos_2 < pos_10);
        assert!(pos_10 < pos_1);
    }

    #[test]
    fn test_match_report_field_names() {
        let mut m = report("match_1", 2);
        m.players = vec!["Zeh".to_string()];
        m.kills.insert("Zeh".to_string(), 2);
        m.kills_by_means.insert("MOD_ROCKET".to_string(), 2);

        let value = serde_json::to_value(&m).unwrap();
        assert_eq!(value["total_kills"], 2);
        assert_eq!(value["players"][0], "Zeh");
        assert_eq!(value["kills"]["Zeh"], 2);
        assert_eq!(value["kills_by_means"]["MOD_ROCKET"], 2);
        assert!(value.get("id").is_none());
        assert_eq!(m.cause_total(), 2);
    }

    #[test]
    fn test_breakdown_lookup() {
        let breakdown = MatchBreakdown(vec![report("match_1", 4)]);
        assert_eq!(breakdown.get("match_1").map(|m| m.total_kills), Some(4));
        assert!(breakdown.get("match_2").is_none());
        assert_eq!(breakdown.len(), 1);
    }
}
