//! Player identity resolution for one match session.
//!
//! The log names players two ways: a numeric client slot (stable for one
//! connection) and a display name that may vary in trailing punctuation or
//! padding. The registry reconciles both into one canonical name per player.
//! Client slots are reused across matches, so a registry never outlives the
//! match it was created for.

use hashbrown::HashMap;

const TRAILING_PUNCTUATION: [char; 4] = ['!', '?', '.', ','];

/// Trim, drop trailing `! ? . ,` and trim again. Inner characters are kept.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(TRAILING_PUNCTUATION)
        .trim()
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClientBinding {
    canonical: String,
    /// Set by a userinfo event. Bindings guessed from kill lines are not
    /// authoritative and give way to the name a later kill line carries.
    confirmed: bool,
}

/// Outcome of [`PlayerRegistry::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub canonical: String,
    /// Name this client was bound to before, when the event renamed it.
    pub previous: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    clients: HashMap<u32, ClientBinding>,
    variants: HashMap<String, String>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the name a client announced through a userinfo event.
    ///
    /// A different normalized name for a known client replaces the old one,
    /// whether the old one came from a userinfo event or a kill line; stats
    /// recorded under the old name are not carried over.
    pub fn register(&mut self, client_id: u32, raw_name: &str) -> Registration {
        let canonical = normalize(raw_name);

        if let Some(binding) = self.clients.get_mut(&client_id)
            && binding.canonical == canonical
        {
            binding.confirmed = true;
            self.variants
                .insert(raw_name.to_string(), binding.canonical.clone());
            return Registration {
                canonical,
                previous: None,
            };
        }

        let previous = self.canonical_for(client_id).map(str::to_string);
        self.bind(client_id, raw_name, &canonical, true);
        Registration {
            canonical,
            previous,
        }
    }

    /// Canonical name for a player seen in a kill line.
    ///
    /// Lookup order: confirmed client binding, known name variant, then the
    /// normalized fallback name, which is remembered for this client.
    pub fn resolve(&mut self, client_id: u32, fallback_raw: &str) -> String {
        if let Some(binding) = self.clients.get(&client_id)
            && binding.confirmed
        {
            return binding.canonical.clone();
        }
        if let Some(canonical) = self.variants.get(fallback_raw) {
            return canonical.clone();
        }

        let canonical = normalize(fallback_raw);
        self.bind(client_id, fallback_raw, &canonical, false);
        canonical
    }

    fn bind(&mut self, client_id: u32, raw_name: &str, canonical: &str, confirmed: bool) {
        self.clients.insert(
            client_id,
            ClientBinding {
                canonical: canonical.to_string(),
                confirmed,
            },
        );
        self.variants
            .insert(raw_name.to_string(), canonical.to_string());
        if canonical != raw_name {
            self.variants
                .insert(canonical.to_string(), canonical.to_string());
        }
    }

    pub fn canonical_for(&self, client_id: u32) -> Option<&str> {
        self.clients.get(&client_id).map(|b| b.canonical.as_str())
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.variants.is_empty()
    }
}
