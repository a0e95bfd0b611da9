//! First grammar stage: `<timestamp> <event-name>: <payload>`.

use memchr::memchr;

use super::ParseError;

/// A tokenized log line. Borrows from the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    /// `minutes:seconds` since server start, kept verbatim
    pub timestamp: &'a str,
    pub event_name: &'a str,
    /// Everything after the first colon following the event name, trimmed
    pub payload: &'a str,
}

/// Split a leading `digits:digits` timestamp off the line.
/// Leading whitespace is allowed.
fn split_timestamp(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    let b = input.as_bytes();

    let minutes = b.iter().take_while(|c| c.is_ascii_digit()).count();
    if minutes == 0 || b.get(minutes) != Some(&b':') {
        return None;
    }
    let seconds = b[minutes + 1..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();
    if seconds == 0 {
        return None;
    }

    let end = minutes + 1 + seconds;
    Some((&input[..end], &input[end..]))
}

/// Blank lines and dash separators (`  0:00 -----------`) carry no event and
/// are dropped before tokenization.
pub fn is_ignorable(line: &str) -> bool {
    if line.trim().is_empty() {
        return true;
    }
    let body = match split_timestamp(line) {
        Some((_, rest)) => rest.trim(),
        None => line.trim(),
    };
    !body.is_empty() && body.bytes().all(|c| c == b'-')
}

pub fn tokenize(line: &str) -> Result<LogLine<'_>, ParseError> {
    let (timestamp, rest) =
        split_timestamp(line).ok_or(ParseError::malformed("missing timestamp"))?;

    if !rest.starts_with(char::is_whitespace) {
        return Err(ParseError::malformed("no whitespace after timestamp"));
    }
    let rest = rest.trim_start();

    let colon = memchr(b':', rest.as_bytes())
        .ok_or(ParseError::malformed("missing ':' after event name"))?;
    let event_name = rest[..colon].trim();
    if event_name.is_empty() {
        return Err(ParseError::malformed("empty event name"));
    }

    Ok(LogLine {
        timestamp,
        event_name,
        payload: rest[colon + 1..].trim(),
    })
}
