//! Null implementations of the bitkit storage seams.
//!
//! These in-memory doubles let the kit and the history providers be
//! exercised without a real storage engine present.

pub mod store;

pub use store::{NullApiSyncState, NullCheckpointStore};
