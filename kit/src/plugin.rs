//! Plugin registration interface.
//!
//! A plugin contributes one additional address format and one additional
//! recovery scheme to the resolved configuration. Plugin *execution*
//! (script construction, spend rules) lives in the external engine; only
//! the registration shape is modeled here.

use bitkit_address::{AddressFormat, RecoveryScheme};

/// A component contributing to the address codec set and the recovery
/// strategy set.
pub trait WalletPlugin {
    /// Stable identifier, used in logs.
    fn id(&self) -> &'static str;

    /// The address format this plugin's outputs use.
    fn address_format(&self) -> AddressFormat;

    /// The recovery scheme to scan during wallet restore.
    fn recovery_scheme(&self) -> RecoveryScheme;
}

/// The time-locked-output plugin. Its outputs are pay-to-script-hash over
/// time-locked redeem scripts wrapping legacy-path keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeLockPlugin;

impl WalletPlugin for TimeLockPlugin {
    fn id(&self) -> &'static str {
        "timelock"
    }

    fn address_format(&self) -> AddressFormat {
        AddressFormat::P2sh
    }

    fn recovery_scheme(&self) -> RecoveryScheme {
        RecoveryScheme::TimeLock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timelock_contributes_script_hash_format() {
        let plugin = TimeLockPlugin;
        assert_eq!(plugin.id(), "timelock");
        assert_eq!(plugin.address_format(), AddressFormat::P2sh);
        assert_eq!(plugin.recovery_scheme(), RecoveryScheme::TimeLock);
    }
}
