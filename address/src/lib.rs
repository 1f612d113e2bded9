//! Address codecs and recovery-scheme selection.
//!
//! Two codec families are active for every wallet: the base58check family
//! (legacy and script-hash addresses) and the bech32 family (segwit and
//! taproot addresses). Which one is primary for newly generated addresses
//! depends on the wallet's derivation purpose. Recovery schemes describe
//! which address families to scan when restoring a wallet.

pub mod base58;
pub mod codec;
pub mod error;
pub mod recovery;
pub mod segwit;

pub use codec::{Address, AddressCodecSet, AddressFormat, Base58Codec, CodecKind, SegwitCodec};
pub use error::AddressError;
pub use recovery::{RecoveryScheme, RecoveryStrategySet};
