//! Block-acceptance rule selection.
//!
//! This crate decides *which* validation rules apply to a wallet's network
//! and with which parameters. The rules themselves are descriptors consumed
//! by the external block-validation engine; the proof-of-work and
//! difficulty-adjustment arithmetic lives there, not here.

pub mod chain;
pub mod rule;

pub use chain::ValidatorChain;
pub use rule::{RuleKind, ValidatorRule};
