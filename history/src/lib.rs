//! Remote transaction-history providers.
//!
//! During initial synchronization a wallet can restore its transaction
//! history from a remote index instead of scanning every block. This crate
//! implements the provider clients and the composition rules: a public
//! mainnet provider, a keyed provider with public fallback for restores, and
//! a test-network provider. Which composition a wallet gets is decided by
//! the resolver and recorded as a [`HistoryPlan`]; [`HistorySource::build`]
//! turns the plan into live clients at wallet-open time.

pub mod error;
pub mod fallback;
pub mod item;
pub mod keyed;
pub mod plan;
pub mod public;
pub mod source;
pub mod testnet;

pub use error::HistoryError;
pub use fallback::{FallbackPair, FallbackRole};
pub use item::TransactionItem;
pub use keyed::KeyedHistoryApi;
pub use plan::{HistoryPlan, SourceKind};
pub use public::PublicHistoryApi;
pub use source::HistorySource;
pub use testnet::TestNetHistoryApi;
