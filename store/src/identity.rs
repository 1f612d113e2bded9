//! Deterministic storage-partition naming.
//!
//! Two wallets with the same identifier but different network, purpose, or
//! sync mode must land in disjoint partitions; identical tuples must always
//! produce the same name.

use bitkit_types::{DerivationPurpose, NetworkKind, SyncMode};

/// Partition file name for a wallet configuration.
///
/// The name is `<wallet_id>-<network>-<purpose>-<sync_mode>`. The three
/// trailing components come from fixed vocabularies and no vocabulary entry
/// is a suffix of another, so the name decomposes unambiguously from the
/// right even when `wallet_id` itself contains dashes — the function is
/// injective over the full tuple. The remote-API secret never participates
/// in the name.
pub fn database_file_name(
    wallet_id: &str,
    network: NetworkKind,
    purpose: DerivationPurpose,
    sync_mode: SyncMode,
) -> String {
    format!(
        "{}-{}-{}-{}",
        wallet_id,
        network.as_str(),
        purpose.as_str(),
        sync_mode.as_str()
    )
}

/// Extract the wallet-id component from a partition file name.
///
/// Returns `None` for names that do not carry the three trailing
/// components, i.e. files that are not wallet partitions.
pub fn wallet_id_component(file_name: &str) -> Option<&str> {
    let rest = strip_tagged_suffix(file_name, SyncMode::ALL.iter().map(|m| m.as_str()))?;
    let rest = strip_tagged_suffix(rest, DerivationPurpose::ALL.iter().map(|p| p.as_str()))?;
    let rest = strip_tagged_suffix(rest, NetworkKind::ALL.iter().map(|n| n.as_str()))?;
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

/// Strip `-<tag>` for whichever vocabulary tag the name ends with.
fn strip_tagged_suffix<'a>(
    s: &'a str,
    tags: impl IntoIterator<Item = &'static str>,
) -> Option<&'a str> {
    for tag in tags {
        if let Some(rest) = s.strip_suffix(tag).and_then(|r| r.strip_suffix('-')) {
            return Some(rest);
        }
    }
    None
}
