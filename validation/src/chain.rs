//! Ordered validator chains per network.

use serde::Serialize;

use bitkit_types::{NetworkKind, NetworkProfile};

use crate::rule::{RuleKind, ValidatorRule};

/// The ordered sequence of block-acceptance rules for one wallet.
///
/// Invariants: the proof-of-work rule is always present and always first;
/// the standard difficulty-adjustment rule is present on every network; the
/// relaxed test-network rule is appended after the standard one on TestNet
/// and RegTest only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatorChain {
    rules: Vec<ValidatorRule>,
}

impl ValidatorChain {
    /// Assemble the chain for a network profile. Pure function of the
    /// profile's network.
    pub fn for_profile(profile: &NetworkProfile) -> Self {
        let mut rules = vec![
            ValidatorRule::ProofOfWork {
                max_target_bits: profile.max_target_bits,
            },
            ValidatorRule::DifficultyAdjustment {
                height_interval: profile.height_interval,
                target_timespan: profile.target_timespan(),
                max_target_bits: profile.max_target_bits,
            },
        ];

        match profile.network {
            NetworkKind::MainNet => {}
            NetworkKind::TestNet | NetworkKind::RegTest => {
                rules.push(ValidatorRule::TestNetDifficulty {
                    height_interval: profile.height_interval,
                    target_spacing: profile.target_spacing,
                    max_target_bits: profile.max_target_bits,
                });
            }
        }

        Self { rules }
    }

    pub fn rules(&self) -> &[ValidatorRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule identities in chain order.
    pub fn kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    pub fn contains(&self, kind: RuleKind) -> bool {
        self.rules.iter().any(|r| r.kind() == kind)
    }
}
