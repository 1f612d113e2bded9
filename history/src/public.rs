//! Public mainnet history provider.

use std::time::Duration;

use serde::Deserialize;

use crate::error::HistoryError;
use crate::item::{finalize, TransactionItem};

/// Client for the public mainnet transaction index.
///
/// Queries the multi-address endpoint and reduces the response to confirmed
/// [`TransactionItem`]s above the sync checkpoint.
#[derive(Clone)]
pub struct PublicHistoryApi {
    http: reqwest::Client,
    base_url: String,
}

impl PublicHistoryApi {
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
        let url = format!("{}/multiaddr", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("active", addresses.join("|"))])
            .send()
            .await
            .map_err(|e| HistoryError::Http(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(HistoryError::Status(response.status().as_u16()));
        }

        let body: MultiAddrResponse = response
            .json()
            .await
            .map_err(|e| HistoryError::InvalidResponse(e.to_string()))?;

        Ok(items_from_response(body, since_height))
    }
}

/// Multi-address response from the public index.
#[derive(Debug, Deserialize)]
pub(crate) struct MultiAddrResponse {
    #[serde(default)]
    pub txs: Vec<MultiAddrTx>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MultiAddrTx {
    pub hash: String,
    #[serde(default)]
    pub block_height: Option<u32>,
    #[serde(default)]
    pub time: Option<u64>,
}

pub(crate) fn items_from_response(
    response: MultiAddrResponse,
    since_height: u32,
) -> Vec<TransactionItem> {
    finalize(
        response
            .txs
            .into_iter()
            .map(|tx| (tx.hash, tx.block_height, tx.time)),
        since_height,
    )
}
