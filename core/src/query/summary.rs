use std::collections::{BTreeMap, BTreeSet};

use fragstat_types::FlatSummary;

use crate::session::Match;

/// Every player of every match, sorted, with kills summed across matches.
pub fn flat_summary(matches: &[Match]) -> FlatSummary {
    let mut players = BTreeSet::new();
    let mut kills: BTreeMap<String, u32> = BTreeMap::new();

    for game in matches {
        for player in game.players() {
            players.insert(player.to_string());
            *kills.entry(player.to_string()).or_insert(0) += game.kills_of(player);
        }
    }

    FlatSummary {
        players: players.into_iter().collect(),
        kills,
    }
}
