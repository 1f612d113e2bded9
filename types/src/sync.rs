//! Sync strategy and remote-API credentials.

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Strategy for acquiring transaction history during initial sync.
///
/// Fixed at wallet-open time. The mode participates in the database
/// partition name, but is not persisted as engine state beyond that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyncMode {
    /// Restore history from a public remote index.
    Api,
    /// Restore history from a keyed remote index, falling back to the
    /// public index for prior state the keyed provider does not cover.
    /// Requires an [`ApiKey`].
    ApiWithKey,
    /// Derive everything from peer-to-peer block download.
    Full,
}

impl SyncMode {
    /// Every sync mode, in declaration order. Useful for exhaustive tests.
    pub const ALL: [SyncMode; 3] = [Self::Api, Self::ApiWithKey, Self::Full];

    /// Stable tag used as a partition-name component. The secret key never
    /// participates in the name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::ApiWithKey => "api-keyed",
            Self::Full => "full",
        }
    }

    /// Whether this mode needs a remote-API secret key.
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Self::ApiWithKey)
    }
}

/// Secret key for a keyed remote history index.
///
/// Zeroized on drop. Deliberately implements neither `Serialize` nor
/// `Deserialize`; the secret must not end up in persisted state. `Debug`
/// never prints it.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw secret, for building provider requests.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(<redacted>)")
    }
}
