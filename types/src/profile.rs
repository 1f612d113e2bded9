//! Per-network chain parameters.
//!
//! A [`NetworkProfile`] is the immutable parameter set the rest of the kit
//! selects components from: address version bytes, difficulty bounds, the
//! genesis checkpoint, and whether a remote history index exists for the
//! network. Profiles are resolved by pure lookup — no computation happens
//! at wallet-open time.

use serde::Serialize;

use crate::block::{BlockHash, Checkpoint};
use crate::network::NetworkKind;

/// Block count in one difficulty-adjustment cycle.
pub const HEIGHT_INTERVAL: u32 = 2016;
/// Target seconds between blocks (10 minutes).
pub const TARGET_SPACING: u32 = 600;
/// Initial and maximum target difficulty for blocks, in compact form.
pub const MAX_TARGET_BITS: u32 = 0x1d00ffff;

/// Immutable parameter set for one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    /// Which network these parameters describe.
    pub network: NetworkKind,
    /// Base58 version byte for pay-to-pubkey-hash addresses.
    pub pub_key_hash: u8,
    /// Base58 version byte for pay-to-script-hash addresses.
    pub script_hash: u8,
    /// Human-readable part of bech32 segwit addresses.
    pub bech32_hrp: &'static str,
    /// BIP44 coin type used in derivation paths.
    pub coin_type: u32,
    /// Default P2P port.
    pub default_port: u16,
    /// Whether a remote transaction-history index exists for this network.
    pub syncable_from_api: bool,
    /// URI scheme accepted by the payment-address parser.
    pub payment_scheme: &'static str,
    /// The network's genesis block as a checkpoint.
    pub genesis: Checkpoint,
    /// Blocks per difficulty-adjustment cycle.
    pub height_interval: u32,
    /// Target seconds between blocks.
    pub target_spacing: u32,
    /// Maximum target difficulty in compact form.
    pub max_target_bits: u32,
}

impl NetworkProfile {
    /// Seconds one full difficulty cycle should take.
    pub fn target_timespan(&self) -> u32 {
        self.height_interval * self.target_spacing
    }

    /// Fixed profile lookup for a network. Pure, total, no computation.
    pub fn for_network(network: NetworkKind) -> &'static NetworkProfile {
        match network {
            NetworkKind::MainNet => &MAIN_NET,
            NetworkKind::TestNet => &TEST_NET,
            NetworkKind::RegTest => &REG_TEST,
        }
    }
}

static MAIN_NET: NetworkProfile = NetworkProfile {
    network: NetworkKind::MainNet,
    pub_key_hash: 0x00,
    script_hash: 0x05,
    bech32_hrp: "bc",
    coin_type: 0,
    default_port: 8333,
    syncable_from_api: true,
    payment_scheme: "bitcoin",
    genesis: Checkpoint::new(
        0,
        BlockHash::from_hex_lit("000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"),
        1_231_006_505,
    ),
    height_interval: HEIGHT_INTERVAL,
    target_spacing: TARGET_SPACING,
    max_target_bits: MAX_TARGET_BITS,
};

static TEST_NET: NetworkProfile = NetworkProfile {
    network: NetworkKind::TestNet,
    pub_key_hash: 0x6f,
    script_hash: 0xc4,
    bech32_hrp: "tb",
    coin_type: 1,
    default_port: 18333,
    syncable_from_api: true,
    payment_scheme: "bitcoin",
    genesis: Checkpoint::new(
        0,
        BlockHash::from_hex_lit("000000000933ea01ad0ee984209779baaec3ced90fa3f408719526f8d77f4943"),
        1_296_688_602,
    ),
    height_interval: HEIGHT_INTERVAL,
    target_spacing: TARGET_SPACING,
    max_target_bits: MAX_TARGET_BITS,
};

static REG_TEST: NetworkProfile = NetworkProfile {
    network: NetworkKind::RegTest,
    pub_key_hash: 0x6f,
    script_hash: 0xc4,
    bech32_hrp: "bcrt",
    coin_type: 1,
    default_port: 18444,
    syncable_from_api: false,
    payment_scheme: "bitcoin",
    genesis: Checkpoint::new(
        0,
        BlockHash::from_hex_lit("0f9188f13cb7b2c71f2a335e3a4fc328bf5beb436012afca590b1a11466e2206"),
        1_296_688_602,
    ),
    height_interval: HEIGHT_INTERVAL,
    target_spacing: TARGET_SPACING,
    max_target_bits: MAX_TARGET_BITS,
};
