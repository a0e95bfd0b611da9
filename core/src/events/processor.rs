//! Event dispatcher and match session state machine.
//!
//! Each raw line goes through the tokenizer, then is routed by event name:
//! - `InitGame` opens a match, finalizing any match left open
//! - `Exit` / `ShutdownGame` finalize the active match
//! - `ClientUserinfoChanged` registers a player name
//! - `Kill` scores a kill, opening a match first if none is active
//!
//! Everything else is ignored. A bad line never stops processing; it comes
//! back as a `LineRejected` signal.

use super::SessionSignal;
use crate::identity::normalize;
use crate::log::{
    EventKind, LogLine, ParseError, event_kind, is_ignorable, parse_client_info, parse_kill,
    tokenize,
};
use crate::session::SessionCache;

/// Line counters for one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines_read: u64,
    /// Blank and separator lines
    pub lines_skipped: u64,
    pub lines_rejected: u64,
    /// Well-formed lines with an event the engine does not track
    pub events_ignored: u64,
}

#[derive(Debug, Default)]
pub struct EventProcessor {
    stats: ParseStats,
}

impl EventProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    /// Process one raw line and return the signals it produced.
    pub fn process_line(
        &mut self,
        line_number: u64,
        raw: &str,
        cache: &mut SessionCache,
    ) -> Vec<SessionSignal> {
        self.stats.lines_read += 1;
        if is_ignorable(raw) {
            self.stats.lines_skipped += 1;
            return Vec::new();
        }

        let mut signals = Vec::new();
        let result = tokenize(raw)
            .and_then(|line| self.dispatch(line_number, &line, cache, &mut signals));

        if let Err(error) = result {
            self.stats.lines_rejected += 1;
            signals.push(SessionSignal::LineRejected { line_number, error });
        }
        signals
    }

    /// End of input: a match still open is finalized as if it had been closed.
    pub fn finish(&mut self, cache: &mut SessionCache) -> Vec<SessionSignal> {
        let mut signals = Vec::new();
        finalize_match(cache, &mut signals);
        signals
    }

    fn dispatch(
        &mut self,
        line_number: u64,
        line: &LogLine<'_>,
        cache: &mut SessionCache,
        signals: &mut Vec<SessionSignal>,
    ) -> Result<(), ParseError> {
        let Some(kind) = event_kind(line.event_name) else {
            self.stats.events_ignored += 1;
            return Ok(());
        };

        match kind {
            EventKind::SessionOpen => {
                start_match(line_number, cache, signals);
                Ok(())
            }
            EventKind::SessionClose => {
                finalize_match(cache, signals);
                Ok(())
            }
            EventKind::IdentityChanged => {
                handle_identity_changed(line_number, line.payload, cache, signals)
            }
            EventKind::ClientConnect => Ok(()),
            EventKind::Kill => handle_kill(line_number, line.payload, cache, signals),
        }
    }
}

fn start_match(line_number: u64, cache: &mut SessionCache, signals: &mut Vec<SessionSignal>) {
    // Guards against a missing Exit before the next InitGame
    finalize_match(cache, signals);

    let match_id = cache.open_match().to_string();
    signals.push(SessionSignal::MatchStarted {
        match_id,
        line_number,
        auto_opened: false,
    });
}

fn finalize_match(cache: &mut SessionCache, signals: &mut Vec<SessionSignal>) {
    if let Some(done) = cache.finalize_current() {
        signals.push(SessionSignal::MatchFinalized {
            match_id: done.id.clone(),
            total_kills: done.total_kills,
            player_count: done.player_count(),
        });
    }
}

fn handle_identity_changed(
    line_number: u64,
    payload: &str,
    cache: &mut SessionCache,
    signals: &mut Vec<SessionSignal>,
) -> Result<(), ParseError> {
    let info = parse_client_info(payload)?;
    require_name(info.raw_name)?;
    let registration = cache.registry_mut().register(info.client_id, info.raw_name);

    if let Some(previous) = registration.previous {
        signals.push(SessionSignal::PlayerRenamed {
            line_number,
            client_id: info.client_id,
            from: previous,
            to: registration.canonical.clone(),
        });
    }

    // Outside a match the name is remembered but nobody joins anything
    if let Some(game) = cache.current_match_mut() {
        game.add_player(&registration.canonical);
    }
    Ok(())
}

fn handle_kill(
    line_number: u64,
    payload: &str,
    cache: &mut SessionCache,
    signals: &mut Vec<SessionSignal>,
) -> Result<(), ParseError> {
    let kill = parse_kill(payload)?;
    require_name(kill.victim_name)?;
    if !kill.is_world_kill() {
        require_name(kill.killer_name)?;
    }

    let (game, registry, opened) = cache.active_or_open();
    if opened {
        signals.push(SessionSignal::MatchStarted {
            match_id: game.id.clone(),
            line_number,
            auto_opened: true,
        });
    }

    let victim = registry.resolve(kill.victim_id, kill.victim_name);
    let killer = if kill.is_world_kill() {
        None
    } else {
        Some(registry.resolve(kill.killer_id, kill.killer_name))
    };

    if victim != kill.victim_name {
        tracing::debug!(line = line_number, "Victim name mapped from '{}' to '{}'", kill.victim_name, victim);
    }
    if let Some(killer) = &killer
        && killer != kill.killer_name
    {
        tracing::debug!(line = line_number, "Killer name mapped from '{}' to '{}'", kill.killer_name, killer);
    }

    game.add_player(&victim);
    match killer {
        Some(killer) => game.credit_kill(&killer),
        None => game.penalize(&victim),
    }
    game.record_death(kill.cause_name);
    Ok(())
}

/// Names made only of padding and trailing punctuation normalize to nothing.
fn require_name(raw: &str) -> Result<(), ParseError> {
    if normalize(raw).is_empty() {
        return Err(ParseError::malformed("empty player name"));
    }
    Ok(())
}
