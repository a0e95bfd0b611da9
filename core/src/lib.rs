//! Match statistics from arena-shooter server logs.
//!
//! Lines flow through the tokenizer into the [`EventProcessor`], which drives
//! the match state held in a [`SessionCache`]. Completed matches are read back
//! through the views in [`query`]. [`ParsingSession`] wires it together for
//! a whole file.

pub mod context;
pub mod events;
pub mod identity;
pub mod log;
pub mod query;
pub mod session;

// Re-exports for convenience
pub use context::{IngestError, ParsingSession, load_config, resolve_log_path};
pub use events::{DiagnosticLogger, EventProcessor, ParseStats, SessionSignal, SignalHandler};
pub use identity::{PlayerRegistry, normalize};
pub use log::ParseError;
pub use session::{Match, SessionCache, SessionState};
