//! History-source plans.
//!
//! The resolver decides *which* provider composition a wallet gets and
//! records it as a plan — plain comparable data, no live clients. The plan
//! is turned into clients by [`crate::HistorySource::build`] at wallet-open
//! time, keeping resolution itself pure.

use bitkit_types::ApiKey;

/// Default endpoint of the public mainnet index.
pub const PUBLIC_MAINNET_URL: &str = "https://blockchain.info";
/// Default endpoint of the keyed mainnet index.
pub const KEYED_MAINNET_URL: &str = "https://api.blockchair.com/bitcoin";
/// Default endpoint of the test-network index.
pub const TESTNET_URL: &str = "https://blockstream.info/testnet/api";

/// The provider composition selected for a wallet.
///
/// Carries the API key for the keyed composition, so it does not implement
/// `Serialize`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryPlan {
    /// Single public mainnet provider.
    PublicMainnet { base_url: String },
    /// Keyed mainnet provider for ongoing sync, public provider for the
    /// initial restore of state the keyed index does not cover.
    KeyedWithFallback {
        sync_base_url: String,
        restore_base_url: String,
        key: ApiKey,
    },
    /// Single test-network provider.
    TestNet { base_url: String },
}

impl HistoryPlan {
    /// The public-mainnet plan with the default endpoint.
    pub fn public_mainnet() -> Self {
        Self::PublicMainnet {
            base_url: PUBLIC_MAINNET_URL.to_string(),
        }
    }

    /// The keyed-with-fallback plan with default endpoints.
    pub fn keyed_mainnet(key: ApiKey) -> Self {
        Self::KeyedWithFallback {
            sync_base_url: KEYED_MAINNET_URL.to_string(),
            restore_base_url: PUBLIC_MAINNET_URL.to_string(),
            key,
        }
    }

    /// The test-network plan with the default endpoint.
    pub fn testnet() -> Self {
        Self::TestNet {
            base_url: TESTNET_URL.to_string(),
        }
    }

    /// The plan's identity, for inspection and logging.
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::PublicMainnet { .. } => SourceKind::PublicMainnet,
            Self::KeyedWithFallback { .. } => SourceKind::KeyedWithFallback,
            Self::TestNet { .. } => SourceKind::TestNet,
        }
    }
}

/// History-source identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    PublicMainnet,
    KeyedWithFallback,
    TestNet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plans_carry_default_endpoints() {
        assert_eq!(
            HistoryPlan::public_mainnet(),
            HistoryPlan::PublicMainnet {
                base_url: "https://blockchain.info".to_string()
            }
        );
        assert_eq!(HistoryPlan::testnet().kind(), SourceKind::TestNet);
    }

    #[test]
    fn keyed_plan_keeps_both_endpoints() {
        let plan = HistoryPlan::keyed_mainnet(ApiKey::new("k"));
        let HistoryPlan::KeyedWithFallback {
            sync_base_url,
            restore_base_url,
            ..
        } = &plan
        else {
            panic!("wrong plan variant");
        };
        assert_ne!(sync_base_url, restore_base_url);
        assert_eq!(plan.kind(), SourceKind::KeyedWithFallback);
    }
}
