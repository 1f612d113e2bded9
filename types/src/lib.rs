//! Fundamental types for the bitkit wallet kit.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: network identifiers and profiles, derivation purposes, sync
//! modes, checkpoints, and block hashes. Everything here is an immutable
//! value object created once at wallet-open time.

pub mod block;
pub mod network;
pub mod profile;
pub mod purpose;
pub mod sync;

pub use block::{BlockHash, Checkpoint};
pub use network::NetworkKind;
pub use profile::{NetworkProfile, HEIGHT_INTERVAL, MAX_TARGET_BITS, TARGET_SPACING};
pub use purpose::{DerivationPurpose, ExtendedKeyVersion};
pub use sync::{ApiKey, SyncMode};
