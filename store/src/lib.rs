//! Storage seams for the bitkit wallet kit.
//!
//! The persistent storage engine itself is an external collaborator; this
//! crate defines the traits the kit consumes from it (checkpoint
//! resolution, API-sync state), the deterministic partition naming that
//! keys a wallet's on-disk state, and the delete-except maintenance pass
//! over a partition directory.

pub mod checkpoint;
pub mod error;
pub mod identity;
pub mod maintenance;

pub use checkpoint::{resolve_checkpoint, restore_from_api, ApiSyncStateStore, CheckpointStore};
pub use error::StoreError;
pub use identity::database_file_name;
pub use maintenance::clear_partitions;
