//! Session-scoped state stores.
//!
//! These hold the mutable state a browsing session accumulates: the
//! comparison selection, the favorites set and the activity log. All of
//! it lives in memory and is discarded with the session.

pub mod compare;
pub mod favorites;
pub mod history;

pub use compare::{CompareSelection, COMPARE_CAPACITY};
pub use favorites::FavoritesSet;
pub use history::{ActivityEntry, ActivityKind, ActivityLog};
