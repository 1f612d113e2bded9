use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid base58 character '{0}'")]
    InvalidCharacter(char),

    #[error("base58 payload too short")]
    TooShort,

    #[error("base58 checksum mismatch")]
    InvalidChecksum,

    #[error("unknown address version byte 0x{0:02x}")]
    UnknownVersion(u8),

    #[error("bech32 error: {0}")]
    Bech32(String),

    #[error("unknown bech32 prefix '{0}'")]
    UnknownHrp(String),

    #[error("invalid witness program length {0}")]
    InvalidProgramLength(usize),

    #[error("unsupported witness version {0}")]
    UnsupportedWitnessVersion(u8),
}
