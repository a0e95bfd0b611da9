//! Rendering of the engine views for stdout.

use fragstat_core::ParsingSession;
use fragstat_types::OutputFormat;
use fragstat_types::formatting::format_ranking;
use serde::Serialize;

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Render the requested projection(s) as one block of text.
pub fn render(session: &ParsingSession, format: OutputFormat, pretty: bool) -> serde_json::Result<String> {
    let text = match format {
        OutputFormat::Basic => to_json(&session.summary(), pretty)?,
        OutputFormat::Multi => to_json(&session.breakdown(), pretty)?,
        OutputFormat::Ranking => format_ranking(&session.rankings()),
        OutputFormat::All => format!(
            "=== BASIC OUTPUT ===\n{}\n\n=== MULTI-GAME OUTPUT ===\n{}\n\n=== PLAYER RANKINGS ===\n{}",
            to_json(&session.summary(), pretty)?,
            to_json(&session.breakdown(), pretty)?,
            format_ranking(&session.rankings()),
        ),
    };
    Ok(text)
}
