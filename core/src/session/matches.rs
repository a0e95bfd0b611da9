use std::collections::{BTreeMap, BTreeSet};

use fragstat_types::{MatchReport, WORLD_TOKEN};

/// Statistics accumulated for one match.
///
/// Players are kept in a sorted set, so the finalized list needs no extra
/// sort pass. Every player has a kill entry, starting at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Match {
    pub id: String,
    pub total_kills: u32,
    players: BTreeSet<String>,
    kills: BTreeMap<String, u32>,
    kills_by_cause: BTreeMap<String, u32>,
}

impl Match {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Add a player with 0 kills. Returns false for `<world>` and for players
    /// already present.
    pub fn add_player(&mut self, name: &str) -> bool {
        if name == WORLD_TOKEN || self.players.contains(name) {
            return false;
        }
        self.players.insert(name.to_string());
        self.kills.entry(name.to_string()).or_insert(0);
        true
    }

    pub fn credit_kill(&mut self, killer: &str) {
        if killer == WORLD_TOKEN {
            return;
        }
        self.add_player(killer);
        if let Some(count) = self.kills.get_mut(killer) {
            *count += 1;
        }
    }

    /// World-kill penalty: one kill less for the victim, never below 0.
    pub fn penalize(&mut self, victim: &str) {
        if let Some(count) = self.kills.get_mut(victim) {
            *count = count.saturating_sub(1);
        }
    }

    /// Count a death regardless of who (or what) caused it.
    pub fn record_death(&mut self, cause: &str) {
        self.total_kills += 1;
        *self.kills_by_cause.entry(cause.to_string()).or_insert(0) += 1;
    }

    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.players.contains(name)
    }

    pub fn kills(&self) -> &BTreeMap<String, u32> {
        &self.kills
    }

    pub fn kills_of(&self, name: &str) -> u32 {
        self.kills.get(name).copied().unwrap_or(0)
    }

    pub fn kills_by_cause(&self) -> &BTreeMap<String, u32> {
        &self.kills_by_cause
    }

    pub fn to_report(&self) -> MatchReport {
        MatchReport {
            id: self.id.clone(),
            total_kills: self.total_kills,
            players: self.players.iter().cloned().collect(),
            kills: self.kills.clone(),
            kills_by_means: self.kills_by_cause.clone(),
        }
    }
}
