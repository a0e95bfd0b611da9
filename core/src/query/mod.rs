//! Read-only projections over completed matches.
//!
//! Views are computed after all lines have been processed; none of them
//! mutate the match store.

mod breakdown;
mod ranking;
mod summary;

pub use breakdown::match_breakdown;
pub use ranking::player_rankings;
pub use summary::flat_summary;
