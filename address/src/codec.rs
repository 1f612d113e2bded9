//! Address codecs and the per-wallet codec set.

use serde::Serialize;

use bitkit_types::{DerivationPurpose, NetworkProfile};

use crate::base58;
use crate::error::AddressError;
use crate::segwit;

/// The script kind an address pays to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AddressFormat {
    /// Legacy pay-to-pubkey-hash.
    P2pkh,
    /// Pay-to-script-hash (including wrapped segwit and time-locked
    /// redeem scripts).
    P2sh,
    /// Native segwit v0 pay-to-witness-pubkey-hash.
    P2wpkh,
    /// Native segwit v0 pay-to-witness-script-hash.
    P2wsh,
    /// Taproot (segwit v1).
    P2tr,
}

/// A decoded address: its format and raw script payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    pub format: AddressFormat,
    pub payload: Vec<u8>,
}

/// Which codec family an address string belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CodecKind {
    Base58,
    Bech32,
}

/// Base58check codec parameterized with a network's version bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Base58Codec {
    pub pub_key_hash: u8,
    pub script_hash: u8,
}

impl Base58Codec {
    pub fn for_profile(profile: &NetworkProfile) -> Self {
        Self {
            pub_key_hash: profile.pub_key_hash,
            script_hash: profile.script_hash,
        }
    }

    pub fn encode_pubkey_hash(&self, hash: &[u8; 20]) -> String {
        base58::encode_check(self.pub_key_hash, hash)
    }

    pub fn encode_script_hash(&self, hash: &[u8; 20]) -> String {
        base58::encode_check(self.script_hash, hash)
    }

    pub fn decode(&self, s: &str) -> Result<Address, AddressError> {
        let (version, payload) = base58::decode_check(s)?;
        let format = if version == self.pub_key_hash {
            AddressFormat::P2pkh
        } else if version == self.script_hash {
            AddressFormat::P2sh
        } else {
            return Err(AddressError::UnknownVersion(version));
        };
        Ok(Address { format, payload })
    }
}

/// Bech32 segwit codec parameterized with a network's human-readable part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SegwitCodec {
    pub hrp: &'static str,
}

impl SegwitCodec {
    pub fn for_profile(profile: &NetworkProfile) -> Self {
        Self {
            hrp: profile.bech32_hrp,
        }
    }

    /// Encode a v0 witness program (20-byte pubkey hash or 32-byte script
    /// hash).
    pub fn encode_v0(&self, program: &[u8]) -> Result<String, AddressError> {
        segwit::encode(self.hrp, 0, program)
    }

    /// Encode a taproot output key as a v1 address.
    pub fn encode_v1(&self, output_key: &[u8; 32]) -> Result<String, AddressError> {
        segwit::encode(self.hrp, 1, output_key)
    }

    pub fn decode(&self, s: &str) -> Result<Address, AddressError> {
        let (version, payload) = segwit::decode(self.hrp, s)?;
        let format = match (version, payload.len()) {
            (0, 20) => AddressFormat::P2wpkh,
            (0, 32) => AddressFormat::P2wsh,
            (1, 32) => AddressFormat::P2tr,
            (0, len) | (1, len) => return Err(AddressError::InvalidProgramLength(len)),
            (version, _) => return Err(AddressError::UnsupportedWitnessVersion(version)),
        };
        Ok(Address { format, payload })
    }
}

/// The ordered pair of codecs active for a wallet, with one designated
/// primary for newly generated addresses.
///
/// Both families are always present; parsing consults the bech32 codec
/// first, then base58.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AddressCodecSet {
    base58: Base58Codec,
    segwit: SegwitCodec,
    primary: CodecKind,
}

impl AddressCodecSet {
    /// Assemble the codec set for a profile and purpose. The bech32 codec
    /// is primary exactly when the purpose generates native-segwit or
    /// taproot addresses.
    pub fn new(profile: &NetworkProfile, purpose: DerivationPurpose) -> Self {
        let primary = match purpose {
            DerivationPurpose::Bip84 | DerivationPurpose::Bip86 => CodecKind::Bech32,
            DerivationPurpose::Bip44 | DerivationPurpose::Bip49 => CodecKind::Base58,
        };
        Self {
            base58: Base58Codec::for_profile(profile),
            segwit: SegwitCodec::for_profile(profile),
            primary,
        }
    }

    pub fn primary(&self) -> CodecKind {
        self.primary
    }

    pub fn base58(&self) -> &Base58Codec {
        &self.base58
    }

    pub fn segwit(&self) -> &SegwitCodec {
        &self.segwit
    }

    /// Number of codecs in the set. Always two.
    pub fn len(&self) -> usize {
        2
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Decode an address string with whichever codec accepts it, bech32
    /// first.
    pub fn decode(&self, s: &str) -> Result<Address, AddressError> {
        match self.segwit.decode(s) {
            Ok(address) => Ok(address),
            Err(_) => self.base58.decode(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitkit_types::NetworkKind;

    fn mainnet() -> &'static NetworkProfile {
        NetworkProfile::for_network(NetworkKind::MainNet)
    }

    #[test]
    fn primary_follows_purpose() {
        for (purpose, expected) in [
            (DerivationPurpose::Bip44, CodecKind::Base58),
            (DerivationPurpose::Bip49, CodecKind::Base58),
            (DerivationPurpose::Bip84, CodecKind::Bech32),
            (DerivationPurpose::Bip86, CodecKind::Bech32),
        ] {
            let set = AddressCodecSet::new(mainnet(), purpose);
            assert_eq!(set.primary(), expected, "purpose {:?}", purpose);
            assert_eq!(set.len(), 2);
        }
    }

    #[test]
    fn decodes_both_families() {
        let set = AddressCodecSet::new(mainnet(), DerivationPurpose::Bip84);
        let hash = [0x11u8; 20];

        let legacy = set.base58().encode_pubkey_hash(&hash);
        assert_eq!(
            set.decode(&legacy).unwrap(),
            Address {
                format: AddressFormat::P2pkh,
                payload: hash.to_vec()
            }
        );

        let native = set.segwit().encode_v0(&hash).unwrap();
        assert_eq!(
            set.decode(&native).unwrap(),
            Address {
                format: AddressFormat::P2wpkh,
                payload: hash.to_vec()
            }
        );
    }

    #[test]
    fn wrong_network_version_byte_rejected() {
        let mainnet_set = AddressCodecSet::new(mainnet(), DerivationPurpose::Bip44);
        let testnet_set = AddressCodecSet::new(
            NetworkProfile::for_network(NetworkKind::TestNet),
            DerivationPurpose::Bip44,
        );
        let hash = [0x22u8; 20];
        let testnet_address = testnet_set.base58().encode_pubkey_hash(&hash);
        assert_eq!(
            mainnet_set.decode(&testnet_address),
            Err(AddressError::UnknownVersion(0x6f))
        );
    }

    #[test]
    fn script_hash_addresses_decode_as_p2sh() {
        let set = AddressCodecSet::new(mainnet(), DerivationPurpose::Bip49);
        let hash = [0x33u8; 20];
        let encoded = set.base58().encode_script_hash(&hash);
        assert_eq!(set.decode(&encoded).unwrap().format, AddressFormat::P2sh);
    }

    #[test]
    fn taproot_addresses_decode_as_p2tr() {
        let set = AddressCodecSet::new(mainnet(), DerivationPurpose::Bip86);
        let key = [0x44u8; 32];
        let encoded = set.segwit().encode_v1(&key).unwrap();
        assert_eq!(set.decode(&encoded).unwrap().format, AddressFormat::P2tr);
    }
}
