use super::SessionSignal;

/// Receives the signals produced while a log is processed.
pub trait SignalHandler {
    fn handle_signals(&mut self, signals: &[SessionSignal]);
}

/// Collects every signal, in order.
impl SignalHandler for Vec<SessionSignal> {
    fn handle_signals(&mut self, signals: &[SessionSignal]) {
        self.extend_from_slice(signals);
    }
}

/// Writes diagnostics and lifecycle events to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticLogger;

impl SignalHandler for DiagnosticLogger {
    fn handle_signals(&mut self, signals: &[SessionSignal]) {
        for signal in signals {
            match signal {
                SessionSignal::LineRejected { line_number, error } => {
                    tracing::warn!(line = line_number, error = %error, "Skipping unparseable line");
                }
                SessionSignal::PlayerRenamed {
                    line_number,
                    client_id,
                    from,
                    to,
                } => {
                    tracing::debug!(
                        line = line_number,
                        client_id,
                        "Player changed name from '{}' to '{}'",
                        from,
                        to
                    );
                }
                SessionSignal::MatchStarted {
                    match_id,
                    line_number,
                    auto_opened,
                } => {
                    if *auto_opened {
                        tracing::info!(%match_id, line = line_number, "Kill outside a match, opened one");
                    } else {
                        tracing::debug!(%match_id, line = line_number, "Match started");
                    }
                }
                SessionSignal::MatchFinalized {
                    match_id,
                    total_kills,
                    player_count,
                } => {
                    tracing::debug!(%match_id, total_kills, player_count, "Match finalized");
                }
            }
        }
    }
}
