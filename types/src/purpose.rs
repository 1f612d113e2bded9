//! Derivation purpose (BIP44/49/84/86).

use serde::{Deserialize, Serialize};

/// The standardized derivation scheme a wallet was created under.
///
/// Determines the extended-key version prefix and which address format is
/// canonical for newly generated addresses. Immutable once a wallet is
/// opened; changing it requires a new wallet identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivationPurpose {
    /// Legacy pay-to-pubkey-hash wallets (m/44').
    Bip44,
    /// Script-hash-wrapped segwit wallets (m/49').
    Bip49,
    /// Native segwit wallets (m/84').
    Bip84,
    /// Taproot wallets (m/86').
    Bip86,
}

impl DerivationPurpose {
    /// Every purpose, in declaration order. Useful for exhaustive tests.
    pub const ALL: [DerivationPurpose; 4] =
        [Self::Bip44, Self::Bip49, Self::Bip84, Self::Bip86];

    /// The hardened purpose index used as the first path component.
    pub fn index(&self) -> u32 {
        match self {
            Self::Bip44 => 44,
            Self::Bip49 => 49,
            Self::Bip84 => 84,
            Self::Bip86 => 86,
        }
    }

    /// Human-readable name, also used as a partition-name component.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bip44 => "bip44",
            Self::Bip49 => "bip49",
            Self::Bip84 => "bip84",
            Self::Bip86 => "bip86",
        }
    }

    /// Extended-key version prefix for master keys under this purpose.
    ///
    /// Bip86 keys are serialized with the xprv prefix; BIP86 never assigned
    /// taproot its own version bytes.
    pub fn extended_key_version(&self) -> ExtendedKeyVersion {
        match self {
            Self::Bip44 => ExtendedKeyVersion::Xprv,
            Self::Bip49 => ExtendedKeyVersion::Yprv,
            Self::Bip84 => ExtendedKeyVersion::Zprv,
            Self::Bip86 => ExtendedKeyVersion::Xprv,
        }
    }

    /// Account-level derivation path template for a coin type,
    /// e.g. `m/84'/0'/0'`.
    pub fn account_path(&self, coin_type: u32) -> String {
        format!("m/{}'/{}'/0'", self.index(), coin_type)
    }
}

/// Serialization prefix for extended private keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtendedKeyVersion {
    /// 0x0488ade4 — BIP32 mainnet private key.
    Xprv,
    /// 0x049d7878 — BIP49 wrapped-segwit private key.
    Yprv,
    /// 0x04b2430c — BIP84 native-segwit private key.
    Zprv,
}

impl ExtendedKeyVersion {
    /// The four version bytes this prefix serializes to.
    pub fn version_bytes(&self) -> u32 {
        match self {
            Self::Xprv => 0x0488_ade4,
            Self::Yprv => 0x049d_7878,
            Self::Zprv => 0x04b2_430c,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Xprv => "xprv",
            Self::Yprv => "yprv",
            Self::Zprv => "zprv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_versions_follow_purpose() {
        assert_eq!(
            DerivationPurpose::Bip44.extended_key_version(),
            ExtendedKeyVersion::Xprv
        );
        assert_eq!(
            DerivationPurpose::Bip49.extended_key_version(),
            ExtendedKeyVersion::Yprv
        );
        assert_eq!(
            DerivationPurpose::Bip84.extended_key_version(),
            ExtendedKeyVersion::Zprv
        );
        // Taproot reuses the xprv prefix.
        assert_eq!(
            DerivationPurpose::Bip86.extended_key_version(),
            ExtendedKeyVersion::Xprv
        );
    }

    #[test]
    fn account_path_encodes_purpose_and_coin() {
        assert_eq!(DerivationPurpose::Bip44.account_path(0), "m/44'/0'/0'");
        assert_eq!(DerivationPurpose::Bip84.account_path(1), "m/84'/1'/0'");
    }

    #[test]
    fn version_bytes_are_distinct() {
        assert_ne!(
            ExtendedKeyVersion::Xprv.version_bytes(),
            ExtendedKeyVersion::Yprv.version_bytes()
        );
        assert_ne!(
            ExtendedKeyVersion::Yprv.version_bytes(),
            ExtendedKeyVersion::Zprv.version_bytes()
        );
    }
}
