//! Test-network history provider.

use std::time::Duration;

use serde::Deserialize;

use crate::error::HistoryError;
use crate::item::{finalize, TransactionItem};

/// Client for the test-network transaction index.
///
/// The index exposes per-address endpoints, so addresses are queried one at
/// a time and the results merged.
#[derive(Clone)]
pub struct TestNetHistoryApi {
    http: reqwest::Client,
    base_url: String,
}

impl TestNetHistoryApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, HistoryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| HistoryError::Http(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch confirmed transactions touching any of `addresses` above
    /// `since_height`.
    pub async fn transactions(
        &self,
        addresses: &[String],
        since_height: u32,
    ) -> Result<Vec<TransactionItem>, HistoryError> {
        let mut raw = Vec::new();
        for address in addresses {
            let url = format!("{}/address/{}/txs", self.base_url, address);
            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(|e| HistoryError::Http(format!("request failed: {e}")))?;

            if !response.status().is_success() {
                return Err(HistoryError::Status(response.status().as_u16()));
            }

            let txs: Vec<AddressTx> = response
                .json()
                .await
                .map_err(|e| HistoryError::InvalidResponse(e.to_string()))?;
            raw.extend(txs);
        }

        Ok(items_from_raw(raw, since_height))
    }
}

/// Per-address transaction entry from the test-network index.
#[derive(Debug, Deserialize)]
pub(crate) struct AddressTx {
    pub txid: String,
    pub status: TxStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TxStatus {
    pub confirmed: bool,
    #[serde(default)]
    pub block_height: Option<u32>,
    #[serde(default)]
    pub block_time: Option<u64>,
}

pub(crate) fn items_from_raw(raw: Vec<AddressTx>, since_height: u32) -> Vec<TransactionItem> {
    finalize(
        raw.into_iter().map(|tx| {
            let height = if tx.status.confirmed {
                tx.status.block_height
            } else {
                None
            };
            (tx.txid, height, tx.status.block_time)
        }),
        since_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {"txid": "t1", "status": {"confirmed": true, "block_height": 2400100, "block_time": 1690000000}},
        {"txid": "t2", "status": {"confirmed": false}},
        {"txid": "t1", "status": {"confirmed": true, "block_height": 2400100, "block_time": 1690000000}}
    ]"#;

    #[test]
    fn parses_address_payload_and_dedups() {
        let raw: Vec<AddressTx> = serde_json::from_str(FIXTURE).unwrap();
        let items = items_from_raw(raw, 0);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].txid, "t1");
        assert_eq!(items[0].block_height, 2_400_100);
    }

    #[test]
    fn checkpoint_height_is_exclusive() {
        let raw: Vec<AddressTx> = serde_json::from_str(FIXTURE).unwrap();
        assert!(items_from_raw(raw, 2_400_100).is_empty());
    }
}
