use crate::identity::PlayerRegistry;
use crate::session::matches::Match;

/// Whether a match is currently being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoActiveMatch,
    ActiveMatch,
}

/// Pure storage for session state.
/// Routing logic lives in EventProcessor.
#[derive(Debug, Clone)]
pub struct SessionCache {
    current: Option<Match>,
    // Scoped to the current match; replaced on every open
    registry: PlayerRegistry,

    // Completed matches in finalize order
    completed: Vec<Match>,
    next_match_id: u64,
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCache {
    pub fn new() -> Self {
        Self {
            current: None,
            registry: PlayerRegistry::new(),
            completed: Vec::new(),
            next_match_id: 1,
        }
    }

    // --- Match Management ---

    /// Start a new match with a fresh identity registry and return its id.
    /// Callers finalize any active match first.
    pub fn open_match(&mut self) -> &str {
        let id = allocate_match_id(&mut self.next_match_id);
        self.registry = PlayerRegistry::new();
        self.current.insert(Match::new(id)).id.as_str()
    }

    /// The active match together with its registry, opening a match when none
    /// is active. The flag is true when this call opened it.
    pub fn active_or_open(&mut self) -> (&mut Match, &mut PlayerRegistry, bool) {
        let opened = self.current.is_none();
        if opened {
            self.registry = PlayerRegistry::new();
        }
        let counter = &mut self.next_match_id;
        let game = self
            .current
            .get_or_insert_with(|| Match::new(allocate_match_id(counter)));
        (game, &mut self.registry, opened)
    }

    /// Move the active match into the completed store.
    pub fn finalize_current(&mut self) -> Option<&Match> {
        let finished = self.current.take()?;
        self.completed.push(finished);
        self.completed.last()
    }

    // --- Accessors ---

    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::ActiveMatch
        } else {
            SessionState::NoActiveMatch
        }
    }

    pub fn current_match(&self) -> Option<&Match> {
        self.current.as_ref()
    }

    pub fn current_match_mut(&mut self) -> Option<&mut Match> {
        self.current.as_mut()
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PlayerRegistry {
        &mut self.registry
    }

    pub fn completed_matches(&self) -> &[Match] {
        &self.completed
    }

    pub fn match_by_id(&self, id: &str) -> Option<&Match> {
        self.completed.iter().find(|m| m.id == id)
    }

    pub fn match_count(&self) -> usize {
        self.completed.len()
    }
}

fn allocate_match_id(counter: &mut u64) -> String {
    let id = format!("match_{}", counter);
    *counter += 1;
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_finalize() {
        let mut cache = SessionCache::new();
        assert_eq!(cache.state(), SessionState::NoActiveMatch);
        assert!(cache.finalize_current().is_none());

        assert_eq!(cache.open_match(), "match_1");
        assert_eq!(cache.state(), SessionState::ActiveMatch);
        cache.current_match_mut().unwrap().add_player("Zeh");

        let done = cache.finalize_current().unwrap();
        assert_eq!(done.id, "match_1");
        assert!(done.has_player("Zeh"));
        assert_eq!(cache.state(), SessionState::NoActiveMatch);
        assert_eq!(cache.match_count(), 1);
        assert!(cache.match_by_id("match_1").is_some());
    }

    #[test]
    fn test_open_resets_registry_and_counts_up() {
        let mut cache = SessionCache::new();
        cache.open_match();
        cache.registry_mut().register(2, "Isgalamido");
        cache.finalize_current();

        assert_eq!(cache.open_match(), "match_2");
        assert!(cache.registry().is_empty());
        assert_eq!(cache.registry().canonical_for(2), None);
    }

    #[test]
    fn test_active_or_open() {
        let mut cache = SessionCache::new();
        cache.open_match();
        cache.finalize_current();

        let (game, registry, opened) = cache.active_or_open();
        assert!(opened);
        assert_eq!(game.id, "match_2");
        registry.register(2, "Isgalamido");
        game.add_player("Isgalamido");

        // Already active: same match, registry untouched
        let (game, registry, opened) = cache.active_or_open();
        assert!(!opened);
        assert_eq!(game.id, "match_2");
        assert!(game.has_player("Isgalamido"));
        assert_eq!(registry.canonical_for(2), Some("Isgalamido"));
        assert_eq!(cache.state(), SessionState::ActiveMatch);
    }
}
