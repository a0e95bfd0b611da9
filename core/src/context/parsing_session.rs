use std::path::Path;

use fragstat_types::{FlatSummary, MatchBreakdown, RankingEntry};

use super::reader::{IngestError, LogFile};
use crate::events::{EventProcessor, ParseStats, SessionSignal, SignalHandler};
use crate::query::{flat_summary, match_breakdown, player_rankings};
use crate::session::{Match, SessionCache};

/// Owns everything needed to turn one log into match statistics: the
/// processor, the session state and the side-channel handlers.
///
/// A session ingests one source start to finish. Views are meant to be read
/// after [`ParsingSession::finish`], which `parse_file` and `parse_str` call.
#[derive(Default)]
pub struct ParsingSession {
    cache: SessionCache,
    processor: EventProcessor,
    signal_handlers: Vec<Box<dyn SignalHandler>>,
}

impl ParsingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a signal handler to receive diagnostics and match events
    pub fn add_signal_handler(&mut self, handler: Box<dyn SignalHandler>) {
        self.signal_handlers.push(handler);
    }

    /// Read and process a whole log file. Fails before any line is processed
    /// when the file cannot be read.
    pub fn parse_file(&mut self, path: &Path) -> Result<ParseStats, IngestError> {
        let log = LogFile::open(path)?;
        tracing::debug!(path = %log.path().display(), bytes = log.bytes().len(), "Opened log file");

        for (line_number, line) in log.lines() {
            self.process_line(line_number, &line);
        }
        self.finish();
        Ok(self.stats())
    }

    /// Process log text already in memory, then finish.
    pub fn parse_str(&mut self, text: &str) -> ParseStats {
        for (idx, line) in text.lines().enumerate() {
            self.process_line(idx as u64 + 1, line);
        }
        self.finish();
        self.stats()
    }

    /// Process a single line through the processor and dispatch signals
    pub fn process_line(&mut self, line_number: u64, line: &str) {
        let signals = self
            .processor
            .process_line(line_number, line, &mut self.cache);
        self.dispatch_signals(&signals);
    }

    /// End of input. Finalizes a match left open.
    pub fn finish(&mut self) {
        let signals = self.processor.finish(&mut self.cache);
        self.dispatch_signals(&signals);
    }

    fn dispatch_signals(&mut self, signals: &[SessionSignal]) {
        if signals.is_empty() {
            return;
        }
        for handler in &mut self.signal_handlers {
            handler.handle_signals(signals);
        }
    }

    // --- Views ---

    pub fn stats(&self) -> ParseStats {
        self.processor.stats()
    }

    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    pub fn matches(&self) -> &[Match] {
        self.cache.completed_matches()
    }

    pub fn summary(&self) -> FlatSummary {
        flat_summary(self.matches())
    }

    pub fn breakdown(&self) -> MatchBreakdown {
        match_breakdown(self.matches())
    }

    pub fn rankings(&self) -> Vec<RankingEntry> {
        player_rankings(self.matches())
    }
}
