//! Error taxonomy: configuration errors (contradictory parameters) versus
//! construction errors (storage or engine failed to initialize, propagated
//! without retry).

use thiserror::Error;

use bitkit_history::HistoryError;
use bitkit_store::StoreError;
use bitkit_types::{DerivationPurpose, NetworkKind, SyncMode};

/// An invalid or contradictory parameter combination. Resolution is pure,
/// so retrying without changed inputs is meaningless.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sync mode '{}' requires an API secret key", .0.as_str())]
    MissingApiKey(SyncMode),

    #[error("API secret key supplied but sync mode '{}' does not use one", .0.as_str())]
    UnexpectedApiKey(SyncMode),

    /// No purpose/network pairing is currently unsupported; the variant
    /// exists so an unsupported pairing fails loudly instead of falling
    /// through to a default.
    #[error("purpose '{}' is not supported on network '{}'", .purpose.as_str(), .network.as_str())]
    UnsupportedCombination {
        purpose: DerivationPurpose,
        network: NetworkKind,
    },

    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),
}

/// Top-level error surfaced to the wallet-open caller.
#[derive(Debug, Error)]
pub enum KitError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    #[error("construction failed: {0}")]
    Construction(String),
}

impl From<StoreError> for KitError {
    fn from(e: StoreError) -> Self {
        Self::Construction(e.to_string())
    }
}

impl From<HistoryError> for KitError {
    fn from(e: HistoryError) -> Self {
        Self::Construction(e.to_string())
    }
}
