use crate::log::ParseError;

/// Signals emitted by the EventProcessor for the side channel.
/// Results never travel this way; only notifications and diagnostics do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSignal {
    // Match lifecycle
    MatchStarted {
        match_id: String,
        line_number: u64,
        /// Opened by a kill event because no match was active
        auto_opened: bool,
    },
    MatchFinalized {
        match_id: String,
        total_kills: u32,
        player_count: usize,
    },

    // Diagnostics
    PlayerRenamed {
        line_number: u64,
        client_id: u32,
        from: String,
        to: String,
    },
    LineRejected {
        line_number: u64,
        error: ParseError,
    },
}

impl SessionSignal {
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Self::PlayerRenamed { .. } | Self::LineRejected { .. })
    }
}
