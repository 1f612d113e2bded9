//! Wallet-open parameters.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use bitkit_types::{ApiKey, DerivationPurpose, NetworkKind, SyncMode};

use crate::error::ConfigError;

/// Default number of confirmations before a transaction counts as settled.
pub const DEFAULT_CONFIRMATIONS_THRESHOLD: u32 = 6;
/// Default number of peers the engine connects to.
pub const DEFAULT_PEER_SIZE: u32 = 10;

/// The key material a wallet is opened with. Zeroized on drop; `Debug`
/// never prints the secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub enum KeyMaterial {
    /// Raw seed bytes, typically 64 bytes derived from a BIP39 mnemonic.
    Seed(Vec<u8>),
    /// A serialized extended private key.
    ExtendedKey(String),
}

impl KeyMaterial {
    /// Derive seed material from a BIP39 mnemonic phrase.
    pub fn from_mnemonic(phrase: &str, passphrase: &str) -> Result<Self, ConfigError> {
        let mnemonic = bip39::Mnemonic::parse_normalized(phrase)
            .map_err(|e| ConfigError::InvalidMnemonic(e.to_string()))?;
        Ok(Self::Seed(mnemonic.to_seed_normalized(passphrase).to_vec()))
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seed(_) => write!(f, "KeyMaterial::Seed(<redacted>)"),
            Self::ExtendedKey(_) => write!(f, "KeyMaterial::ExtendedKey(<redacted>)"),
        }
    }
}

/// Everything a caller supplies to open a wallet.
///
/// Defaults match the common case: mainnet, public-API sync, six
/// confirmations.
#[derive(Debug)]
pub struct WalletDescriptor {
    pub key_material: KeyMaterial,
    pub purpose: DerivationPurpose,
    pub wallet_id: String,
    pub sync_mode: SyncMode,
    pub api_key: Option<ApiKey>,
    pub network: NetworkKind,
    pub confirmations_threshold: u32,
}

impl WalletDescriptor {
    pub fn new(
        key_material: KeyMaterial,
        purpose: DerivationPurpose,
        wallet_id: impl Into<String>,
    ) -> Self {
        Self {
            key_material,
            purpose,
            wallet_id: wallet_id.into(),
            sync_mode: SyncMode::Api,
            api_key: None,
            network: NetworkKind::MainNet,
            confirmations_threshold: DEFAULT_CONFIRMATIONS_THRESHOLD,
        }
    }

    pub fn with_network(mut self, network: NetworkKind) -> Self {
        self.network = network;
        self
    }

    pub fn with_sync_mode(mut self, sync_mode: SyncMode) -> Self {
        self.sync_mode = sync_mode;
        self
    }

    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_confirmations_threshold(mut self, threshold: u32) -> Self {
        self.confirmations_threshold = threshold;
        self
    }
}
