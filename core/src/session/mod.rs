pub mod cache;
pub mod matches;

pub use cache::{SessionCache, SessionState};
pub use matches::Match;
