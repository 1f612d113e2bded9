//! Network identifier.

use serde::{Deserialize, Serialize};

/// Identifies which Bitcoin network a wallet is bound to.
///
/// The network is fixed for the lifetime of a wallet's on-disk state: the
/// database partition name is keyed partly by this value, so switching it
/// addresses a disjoint dataset rather than migrating an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkKind {
    /// The production network.
    MainNet,
    /// The public test network (testnet3).
    TestNet,
    /// Local regression-test network.
    RegTest,
}

impl NetworkKind {
    /// Every network, in declaration order. Useful for exhaustive tests.
    pub const ALL: [NetworkKind; 3] = [Self::MainNet, Self::TestNet, Self::RegTest];

    /// Default P2P port for this network.
    pub fn default_port(&self) -> u16 {
        match self {
            Self::MainNet => 8333,
            Self::TestNet => 18333,
            Self::RegTest => 18444,
        }
    }

    /// Human-readable name, also used as a partition-name component.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MainNet => "mainnet",
            Self::TestNet => "testnet",
            Self::RegTest => "regtest",
        }
    }
}
