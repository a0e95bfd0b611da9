pub mod handler;
pub mod processor;
pub mod signal;

pub use handler::{DiagnosticLogger, SignalHandler};
pub use processor::{EventProcessor, ParseStats};
pub use signal::SessionSignal;
