//! Recovery schemes: which address families to scan during restore.

use serde::Serialize;

use bitkit_types::DerivationPurpose;

use crate::codec::{AddressFormat, CodecKind};

/// One address-derivation scheme used to scan for existing funds when a
/// wallet is restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RecoveryScheme {
    /// Legacy pay-to-pubkey-hash over the m/44' path.
    Legacy,
    /// Script-hash-wrapped segwit over the m/49' path.
    WrappedSegwit,
    /// Native segwit over the m/84' path.
    NativeSegwit,
    /// Taproot-family addresses over the m/86' path.
    TaprootSegwit,
    /// Time-locked outputs, plugin-contributed. The redeem scripts wrap
    /// keys from the legacy path.
    TimeLock,
}

impl RecoveryScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::WrappedSegwit => "wrapped-segwit",
            Self::NativeSegwit => "native-segwit",
            Self::TaprootSegwit => "taproot",
            Self::TimeLock => "timelock",
        }
    }

    /// The address format this scheme derives candidates for.
    pub fn address_format(&self) -> AddressFormat {
        match self {
            Self::Legacy => AddressFormat::P2pkh,
            Self::WrappedSegwit => AddressFormat::P2sh,
            Self::NativeSegwit => AddressFormat::P2wpkh,
            Self::TaprootSegwit => AddressFormat::P2tr,
            Self::TimeLock => AddressFormat::P2sh,
        }
    }

    /// Which codec family renders this scheme's addresses.
    pub fn codec_kind(&self) -> CodecKind {
        match self {
            Self::Legacy | Self::WrappedSegwit | Self::TimeLock => CodecKind::Base58,
            Self::NativeSegwit | Self::TaprootSegwit => CodecKind::Bech32,
        }
    }

    /// Account-level derivation path template for a coin type.
    pub fn account_path(&self, coin_type: u32) -> String {
        let purpose = match self {
            Self::Legacy | Self::TimeLock => DerivationPurpose::Bip44,
            Self::WrappedSegwit => DerivationPurpose::Bip49,
            Self::NativeSegwit => DerivationPurpose::Bip84,
            Self::TaprootSegwit => DerivationPurpose::Bip86,
        };
        purpose.account_path(coin_type)
    }
}

/// The ordered, non-empty scheme list active for one wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecoveryStrategySet {
    schemes: Vec<RecoveryScheme>,
}

impl RecoveryStrategySet {
    /// Base schemes for a purpose.
    ///
    /// Bip44 is the only purpose recovering more than one family: earlier
    /// releases of this kit issued wrapped- and native-segwit addresses to
    /// "bip44" wallets, so restoring one must scan all three. Plugin
    /// contributions (the time-lock scheme) are appended by the resolver,
    /// not here.
    pub fn for_purpose(purpose: DerivationPurpose) -> Self {
        let schemes = match purpose {
            DerivationPurpose::Bip44 => vec![
                RecoveryScheme::Legacy,
                RecoveryScheme::WrappedSegwit,
                RecoveryScheme::NativeSegwit,
            ],
            DerivationPurpose::Bip49 => vec![RecoveryScheme::WrappedSegwit],
            DerivationPurpose::Bip84 => vec![RecoveryScheme::NativeSegwit],
            DerivationPurpose::Bip86 => vec![RecoveryScheme::TaprootSegwit],
        };
        Self { schemes }
    }

    /// Append a scheme if not already present.
    pub fn push(&mut self, scheme: RecoveryScheme) {
        if !self.schemes.contains(&scheme) {
            self.schemes.push(scheme);
        }
    }

    pub fn schemes(&self) -> &[RecoveryScheme] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn contains(&self, scheme: RecoveryScheme) -> bool {
        self.schemes.contains(&scheme)
    }
}
