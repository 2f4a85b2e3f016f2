use std::time::Duration;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use crate::{
    adapters::inbound::rpc_types::{BlockResponse, BlockResultsResponse, RpcResponse, StatusResponse},
    application::{BlockSource, SourceError},
    domain::{BlockData, BlockResults},
};

/// Block source backed by a Tendermint/CometBFT JSON-RPC endpoint.
pub struct TendermintRpcSource {
    client: reqwest::Client,
    endpoint: String,
}

impl TendermintRpcSource {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        tracing::info!("Using Tendermint RPC endpoint: {}", endpoint);
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, height: Option<i64>) -> Result<T, SourceError> {
        let url = format!("{}/{}", self.endpoint, method);
        let mut request = self.client.get(&url);
        if let Some(height) = height {
            request = request.query(&[("height", height.to_string())]);
        }

        // Errors come back as JSON-RPC envelopes with a 5xx status, so the
        // body is decoded regardless of status.
        let response: RpcResponse<T> = request.send().await?.json().await?;
        response.into_result()
    }
}

#[async_trait]
impl BlockSource for TendermintRpcSource {
    async fn block(&self, height: i64) -> Result<BlockData, SourceError> {
        let response: BlockResponse = self.call("block", Some(height)).await?;
        BlockData::try_from(response)
    }

    async fn block_results(&self, height: i64) -> Result<BlockResults, SourceError> {
        let response: BlockResultsResponse = self.call("block_results", Some(height)).await?;
        BlockResults::try_from(response)
    }

    async fn latest_height(&self) -> Result<i64, SourceError> {
        let status: StatusResponse = self.call("status", None).await?;
        status.latest_height()
    }
}
