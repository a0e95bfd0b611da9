mod error;
mod event;
mod line;

pub use error::ParseError;
pub use event::{ClientInfo, EventKind, KillEvent, event_kind, parse_client_info, parse_kill};
pub use line::{LogLine, is_ignorable, tokenize};
