//! Provider-independent transaction records.

use serde::{Deserialize, Serialize};

/// One confirmed transaction reported by a history provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionItem {
    /// Transaction id, as rendered by explorers.
    pub txid: String,
    /// Height of the confirming block.
    pub block_height: u32,
    /// Unix timestamp of the confirming block, when the provider reports one.
    pub timestamp: Option<u64>,
}

/// Drop unconfirmed entries and everything at or below the checkpoint
/// height, then dedup by txid preserving first-seen order.
pub(crate) fn finalize(
    raw: impl IntoIterator<Item = (String, Option<u32>, Option<u64>)>,
    since_height: u32,
) -> Vec<TransactionItem> {
    let mut seen = std::collections::HashSet::new();
    let mut items = Vec::new();
    for (txid, height, timestamp) in raw {
        let Some(block_height) = height else {
            continue;
        };
        if block_height <= since_height {
            continue;
        }
        if seen.insert(txid.clone()) {
            items.push(TransactionItem {
                txid,
                block_height,
                timestamp,
            });
        }
    }
    items
}
