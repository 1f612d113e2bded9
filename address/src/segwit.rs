//! Segwit address encoding and decoding (bech32 / bech32m).
//!
//! Witness v0 programs use bech32, v1 (taproot) uses bech32m; the `bech32`
//! crate's segwit module picks the right checksum per BIP173/BIP350.

use bech32::{segwit, Fe32, Hrp};

use crate::error::AddressError;

/// Encode a witness program under the given human-readable part.
///
/// Witness v0 programs must be 20 bytes (P2WPKH) or 32 bytes (P2WSH);
/// v1 programs must be 32 bytes (x-only taproot output key).
pub fn encode(hrp: &str, witness_version: u8, program: &[u8]) -> Result<String, AddressError> {
    match (witness_version, program.len()) {
        (0, 20) | (0, 32) | (1, 32) => {}
        (0, len) | (1, len) => return Err(AddressError::InvalidProgramLength(len)),
        (version, _) => return Err(AddressError::UnsupportedWitnessVersion(version)),
    }

    let hrp = Hrp::parse(hrp).map_err(|e| AddressError::Bech32(e.to_string()))?;
    let version = Fe32::try_from(witness_version)
        .map_err(|_| AddressError::UnsupportedWitnessVersion(witness_version))?;
    segwit::encode(hrp, version, program).map_err(|e| AddressError::Bech32(e.to_string()))
}

/// Decode a segwit address, checking it belongs to the expected network.
///
/// Returns the witness version and program.
pub fn decode(expected_hrp: &str, s: &str) -> Result<(u8, Vec<u8>), AddressError> {
    let (hrp, version, program) =
        segwit::decode(s).map_err(|e| AddressError::Bech32(e.to_string()))?;
    if hrp.as_str() != expected_hrp {
        return Err(AddressError::UnknownHrp(hrp.as_str().to_string()));
    }
    Ok((version.to_u8(), program))
}
