//! The wallet-construction resolver.
//!
//! Given a derivation purpose, network, and sync mode, the resolver
//! deterministically assembles everything the external engine is built
//! from. It is a pure function of its inputs: no I/O, no randomness, no
//! retries — either a fully resolved configuration is produced or none is.

use tracing::debug;

use bitkit_address::{AddressCodecSet, RecoveryStrategySet};
use bitkit_history::HistoryPlan;
use bitkit_store::restore_from_api;
use bitkit_types::{ApiKey, DerivationPurpose, NetworkKind, NetworkProfile, SyncMode};
use bitkit_validation::ValidatorChain;

use crate::error::ConfigError;
use crate::plugin::{TimeLockPlugin, WalletPlugin};

/// The immutable result of resolution, aggregating every component the
/// engine constructor consumes. Created once per wallet-open call and never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    /// Chain parameters for the wallet's network.
    pub profile: &'static NetworkProfile,
    /// Ordered block-acceptance rules.
    pub validators: ValidatorChain,
    /// Active address codecs with the purpose's primary designated.
    pub codecs: AddressCodecSet,
    /// Address families to scan during restore.
    pub recovery: RecoveryStrategySet,
    /// Remote history composition, or `None` on networks without a remote
    /// index (regtest).
    pub history: Option<HistoryPlan>,
    /// Whether initial history is restored from the remote index at all.
    pub restore_from_api: bool,
    /// Whether block median-time computation may be approximate. True for
    /// the keyed sync mode, whose provider does not report exact
    /// median-time data.
    pub approximate_median_time: bool,
}

/// Resolves wallet parameters into a [`ResolvedConfig`].
///
/// Registered plugins contribute recovery schemes for bip44 wallets; the
/// time-lock plugin is registered by default.
pub struct WalletResolver {
    plugins: Vec<Box<dyn WalletPlugin>>,
}

impl WalletResolver {
    pub fn new() -> Self {
        Self {
            plugins: vec![Box::new(TimeLockPlugin)],
        }
    }

    /// A resolver with a custom plugin set (empty to disable plugins).
    pub fn with_plugins(plugins: Vec<Box<dyn WalletPlugin>>) -> Self {
        Self { plugins }
    }

    /// Resolve a wallet configuration.
    ///
    /// The API key must be present if and only if `sync_mode` is the keyed
    /// variant; mismatched presence is a configuration error, never
    /// silently ignored. Every other (purpose, network, sync mode)
    /// combination resolves.
    pub fn resolve(
        &self,
        purpose: DerivationPurpose,
        network: NetworkKind,
        sync_mode: SyncMode,
        api_key: Option<&ApiKey>,
    ) -> Result<ResolvedConfig, ConfigError> {
        match (sync_mode.requires_api_key(), api_key) {
            (true, None) => return Err(ConfigError::MissingApiKey(sync_mode)),
            (false, Some(_)) => return Err(ConfigError::UnexpectedApiKey(sync_mode)),
            _ => {}
        }

        let profile = NetworkProfile::for_network(network);
        let validators = ValidatorChain::for_profile(profile);
        let history = Self::select_history(network, sync_mode, api_key);
        let codecs = AddressCodecSet::new(profile, purpose);
        let recovery = self.select_recovery(purpose);

        debug!(
            network = network.as_str(),
            purpose = purpose.as_str(),
            sync_mode = sync_mode.as_str(),
            validators = validators.len(),
            recovery_schemes = recovery.len(),
            history = ?history.as_ref().map(|h| h.kind()),
            "resolved wallet configuration"
        );

        Ok(ResolvedConfig {
            profile,
            validators,
            codecs,
            recovery,
            restore_from_api: restore_from_api(profile, sync_mode),
            approximate_median_time: sync_mode == SyncMode::ApiWithKey,
            history,
        })
    }

    /// History selection is total: every (network, sync mode) combination
    /// yields exactly one plan, or explicitly `None` for regtest, where no
    /// remote index exists and a full local sync is assumed.
    fn select_history(
        network: NetworkKind,
        sync_mode: SyncMode,
        api_key: Option<&ApiKey>,
    ) -> Option<HistoryPlan> {
        match network {
            NetworkKind::RegTest => None,
            NetworkKind::TestNet => Some(HistoryPlan::testnet()),
            NetworkKind::MainNet => match (sync_mode, api_key) {
                (SyncMode::ApiWithKey, Some(key)) => Some(HistoryPlan::keyed_mainnet(key.clone())),
                _ => Some(HistoryPlan::public_mainnet()),
            },
        }
    }

    fn select_recovery(&self, purpose: DerivationPurpose) -> RecoveryStrategySet {
        let mut recovery = RecoveryStrategySet::for_purpose(purpose);
        // Plugin outputs were only ever issued to bip44 wallets.
        if purpose == DerivationPurpose::Bip44 {
            for plugin in &self.plugins {
                recovery.push(plugin.recovery_scheme());
            }
        }
        recovery
    }
}

impl Default for WalletResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitkit_address::{CodecKind, RecoveryScheme};
    use bitkit_history::SourceKind;
    use bitkit_validation::RuleKind;

    fn resolver() -> WalletResolver {
        WalletResolver::new()
    }

    fn key() -> ApiKey {
        ApiKey::new("secret")
    }

    /// Valid inputs for a sync mode: the key is present iff required.
    fn key_for(mode: SyncMode) -> Option<ApiKey> {
        mode.requires_api_key().then(key)
    }

    #[test]
    fn resolve_is_total_over_valid_inputs() {
        for purpose in DerivationPurpose::ALL {
            for network in NetworkKind::ALL {
                for sync_mode in SyncMode::ALL {
                    let api_key = key_for(sync_mode);
                    let result =
                        resolver().resolve(purpose, network, sync_mode, api_key.as_ref());
                    assert!(
                        result.is_ok(),
                        "resolve failed for {:?}/{:?}/{:?}",
                        purpose,
                        network,
                        sync_mode
                    );
                }
            }
        }
    }

    #[test]
    fn keyed_mode_without_key_is_a_configuration_error() {
        let err = resolver()
            .resolve(
                DerivationPurpose::Bip44,
                NetworkKind::MainNet,
                SyncMode::ApiWithKey,
                None,
            )
            .unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey(SyncMode::ApiWithKey));
    }

    #[test]
    fn key_without_keyed_mode_is_a_configuration_error() {
        for sync_mode in [SyncMode::Api, SyncMode::Full] {
            let err = resolver()
                .resolve(
                    DerivationPurpose::Bip44,
                    NetworkKind::MainNet,
                    sync_mode,
                    Some(&key()),
                )
                .unwrap_err();
            assert_eq!(err, ConfigError::UnexpectedApiKey(sync_mode));
        }
    }

    #[test]
    fn validator_chain_is_a_pure_function_of_network() {
        for purpose in DerivationPurpose::ALL {
            for sync_mode in SyncMode::ALL {
                let api_key = key_for(sync_mode);
                let mainnet = resolver()
                    .resolve(purpose, NetworkKind::MainNet, sync_mode, api_key.as_ref())
                    .unwrap();
                assert_eq!(
                    mainnet.validators.kinds(),
                    vec![RuleKind::ProofOfWork, RuleKind::DifficultyAdjustment]
                );

                for network in [NetworkKind::TestNet, NetworkKind::RegTest] {
                    let config = resolver()
                        .resolve(purpose, network, sync_mode, api_key.as_ref())
                        .unwrap();
                    assert_eq!(
                        config.validators.kinds(),
                        vec![
                            RuleKind::ProofOfWork,
                            RuleKind::DifficultyAdjustment,
                            RuleKind::TestNetDifficulty,
                        ]
                    );
                }
            }
        }
    }

    #[test]
    fn codec_set_always_has_two_codecs_with_purpose_driven_primary() {
        for purpose in DerivationPurpose::ALL {
            for network in NetworkKind::ALL {
                let config = resolver()
                    .resolve(purpose, network, SyncMode::Full, None)
                    .unwrap();
                assert_eq!(config.codecs.len(), 2);
                let expect_bech32 = matches!(
                    purpose,
                    DerivationPurpose::Bip84 | DerivationPurpose::Bip86
                );
                assert_eq!(
                    config.codecs.primary() == CodecKind::Bech32,
                    expect_bech32,
                    "purpose {:?}",
                    purpose
                );
            }
        }
    }

    #[test]
    fn bip44_recovery_is_strictly_larger_than_single_scheme_purposes() {
        let bip44 = resolver()
            .resolve(
                DerivationPurpose::Bip44,
                NetworkKind::MainNet,
                SyncMode::Api,
                None,
            )
            .unwrap();
        for purpose in [DerivationPurpose::Bip49, DerivationPurpose::Bip84] {
            let other = resolver()
                .resolve(purpose, NetworkKind::MainNet, SyncMode::Api, None)
                .unwrap();
            assert!(bip44.recovery.len() > other.recovery.len());
        }
    }

    #[test]
    fn scenario_bip84_mainnet_api() {
        let config = resolver()
            .resolve(
                DerivationPurpose::Bip84,
                NetworkKind::MainNet,
                SyncMode::Api,
                None,
            )
            .unwrap();
        assert_eq!(
            config.validators.kinds(),
            vec![RuleKind::ProofOfWork, RuleKind::DifficultyAdjustment]
        );
        assert_eq!(config.codecs.primary(), CodecKind::Bech32);
        assert_eq!(
            config.history.as_ref().map(|h| h.kind()),
            Some(SourceKind::PublicMainnet)
        );
        assert_eq!(
            config.recovery.schemes(),
            &[RecoveryScheme::NativeSegwit]
        );
        assert!(!config.approximate_median_time);
    }

    #[test]
    fn scenario_bip44_regtest_full() {
        let config = resolver()
            .resolve(
                DerivationPurpose::Bip44,
                NetworkKind::RegTest,
                SyncMode::Full,
                None,
            )
            .unwrap();
        assert_eq!(config.history, None);
        assert!(config.validators.contains(RuleKind::TestNetDifficulty));
        assert_eq!(
            config.recovery.schemes(),
            &[
                RecoveryScheme::Legacy,
                RecoveryScheme::WrappedSegwit,
                RecoveryScheme::NativeSegwit,
                RecoveryScheme::TimeLock,
            ]
        );
        assert!(!config.restore_from_api);
    }

    #[test]
    fn keyed_mainnet_composes_the_fallback_pair() {
        let api_key = key();
        let config = resolver()
            .resolve(
                DerivationPurpose::Bip49,
                NetworkKind::MainNet,
                SyncMode::ApiWithKey,
                Some(&api_key),
            )
            .unwrap();
        assert_eq!(
            config.history.as_ref().map(|h| h.kind()),
            Some(SourceKind::KeyedWithFallback)
        );
        assert!(config.approximate_median_time);
    }

    #[test]
    fn testnet_uses_the_testnet_provider_for_every_api_mode() {
        for sync_mode in [SyncMode::Api, SyncMode::Full] {
            let config = resolver()
                .resolve(
                    DerivationPurpose::Bip84,
                    NetworkKind::TestNet,
                    sync_mode,
                    None,
                )
                .unwrap();
            assert_eq!(
                config.history.as_ref().map(|h| h.kind()),
                Some(SourceKind::TestNet)
            );
        }
    }

    #[test]
    fn full_sync_never_restores_from_api() {
        let config = resolver()
            .resolve(
                DerivationPurpose::Bip84,
                NetworkKind::MainNet,
                SyncMode::Full,
                None,
            )
            .unwrap();
        assert!(!config.restore_from_api);
        // The provider still exists for the network; it is just not used
        // for the initial restore.
        assert!(config.history.is_some());
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolve = || {
            resolver().resolve(
                DerivationPurpose::Bip86,
                NetworkKind::TestNet,
                SyncMode::Api,
                None,
            )
        };
        assert_eq!(resolve().unwrap(), resolve().unwrap());
    }

    #[test]
    fn pluginless_resolver_skips_the_timelock_scheme() {
        let resolver = WalletResolver::with_plugins(Vec::new());
        let config = resolver
            .resolve(
                DerivationPurpose::Bip44,
                NetworkKind::MainNet,
                SyncMode::Api,
                None,
            )
            .unwrap();
        assert_eq!(config.recovery.len(), 3);
        assert!(!config.recovery.contains(RecoveryScheme::TimeLock));
    }
}
