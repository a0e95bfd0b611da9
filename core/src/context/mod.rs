mod app_config;
mod parsing_session;
mod reader;

pub use app_config::{APP_NAME, load_config, resolve_log_path};
pub use parsing_session::ParsingSession;
pub use reader::{IngestError, LogFile, decode_line, line_ranges};
