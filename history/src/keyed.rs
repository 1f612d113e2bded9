//! Keyed mainnet history provider.

use std::time::Duration;

use serde::Deserialize;

use bitkit_types::ApiKey;

use crate::error::HistoryError;
use crate::item::{finalize, TransactionItem};

/// Client for the keyed mainnet transaction index.
///
/// The secret key is sent as a query parameter; it never appears in logs or
/// `Debug` output (see [`ApiKey`]).
#[derive(Clone)]
pub struct KeyedHistoryApi {
    http: reqwest::Client,
    base_url: String,
    key: ApiKey,
}

impl KeyedHistoryApi {
    pub fn new(base_url: impl Into<String>, key: ApiKey) -> Result<Self, HistoryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| HistoryError::Http(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            key,
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
        let url = format!(
            "{}/dashboards/addresses/{}",
            self.base_url,
            addresses.join(",")
        );
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.key.expose())])
            .send()
            .await
            .map_err(|e| HistoryError::Http(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(HistoryError::Status(response.status().as_u16()));
        }

        let body: DashboardResponse = response
            .json()
            .await
            .map_err(|e| HistoryError::InvalidResponse(e.to_string()))?;

        Ok(items_from_response(body, since_height))
    }
}

/// Address-dashboard response from the keyed index.
#[derive(Debug, Deserialize)]
pub(crate) struct DashboardResponse {
    pub data: DashboardData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardData {
    #[serde(default)]
    pub transactions: Vec<DashboardTx>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardTx {
    pub hash: String,
    /// Negative block ids mark mempool transactions.
    pub block_id: i64,
    #[serde(default)]
    pub time: Option<u64>,
}

pub(crate) fn items_from_response(
    response: DashboardResponse,
    since_height: u32,
) -> Vec<TransactionItem> {
    finalize(
        response.data.transactions.into_iter().map(|tx| {
            let height = u32::try_from(tx.block_id).ok();
            (tx.hash, height, tx.time)
        }),
        since_height,
    )
}
