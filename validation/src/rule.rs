//! Parameterized block-acceptance rules.

use serde::Serialize;

/// One block-acceptance rule, fully parameterized for the target network.
///
/// The external engine executes these; this crate only selects and
/// parameterizes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ValidatorRule {
    /// Header hash must meet the target encoded in its compact bits, and
    /// the bits must never exceed the network maximum.
    ProofOfWork {
        /// Maximum target difficulty in compact form.
        max_target_bits: u32,
    },
    /// At each difficulty boundary, the new compact bits must match the
    /// retarget computed from the elapsed timespan of the closed cycle.
    DifficultyAdjustment {
        /// Blocks per difficulty cycle.
        height_interval: u32,
        /// Seconds one full cycle should take.
        target_timespan: u32,
        /// Maximum target difficulty in compact form.
        max_target_bits: u32,
    },
    /// Test-network relaxation: a minimum-difficulty block is acceptable
    /// when the elapsed time since the previous block exceeds twice the
    /// target spacing.
    TestNetDifficulty {
        /// Blocks per difficulty cycle.
        height_interval: u32,
        /// Target seconds between blocks.
        target_spacing: u32,
        /// Maximum target difficulty in compact form.
        max_target_bits: u32,
    },
}

impl ValidatorRule {
    /// The rule's identity, independent of its parameters.
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::ProofOfWork { .. } => RuleKind::ProofOfWork,
            Self::DifficultyAdjustment { .. } => RuleKind::DifficultyAdjustment,
            Self::TestNetDifficulty { .. } => RuleKind::TestNetDifficulty,
        }
    }
}

/// Rule identity for chain inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RuleKind {
    ProofOfWork,
    DifficultyAdjustment,
    TestNetDifficulty,
}
