//! Tendermint RPC JSON shapes for `/block`, `/block_results` and `/status`.
//!
//! Integers are string-encoded and transaction lists may be `null`.

use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    application::SourceError,
    domain::{BlockData, BlockResults, ExecResult},
};

#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
}

impl<T> RpcResponse<T> {
    pub fn into_result(self) -> Result<T, SourceError> {
        if let Some(err) = self.error {
            let message = match err.data {
                Some(data) if !data.is_empty() => format!("{}: {}", err.message, data),
                _ => err.message,
            };
            return Err(SourceError::Rpc { code: err.code, message });
        }
        self.result
            .ok_or_else(|| SourceError::Decode("response has neither result nor error".into()))
    }
}

#[derive(Debug, Deserialize)]
pub struct BlockResponse {
    pub block_id: BlockId,
    pub block: RawBlock,
}

#[derive(Debug, Deserialize)]
pub struct BlockId {
    pub hash: String,
}

#[derive(Debug, Deserialize)]
pub struct RawBlock {
    pub header: RawHeader,
    pub data: RawData,
}

#[derive(Debug, Deserialize)]
pub struct RawHeader {
    pub height: String,
    pub time: DateTime<Utc>,
    pub proposer_address: String,
}

#[derive(Debug, Deserialize)]
pub struct RawData {
    #[serde(default)]
    pub txs: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct BlockResultsResponse {
    pub height: String,
    #[serde(default)]
    pub txs_results: Option<Vec<RawTxResult>>,
}

#[derive(Debug, Deserialize)]
pub struct RawTxResult {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub codespace: String,
    #[serde(default)]
    pub log: String,
    #[serde(default)]
    pub gas_wanted: Option<String>,
    #[serde(default)]
    pub gas_used: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub sync_info: SyncInfo,
}

#[derive(Debug, Deserialize)]
pub struct SyncInfo {
    pub latest_block_height: String,
}

fn parse_int(field: &str, raw: &str) -> Result<i64, SourceError> {
    raw.parse()
        .map_err(|_| SourceError::Decode(format!("invalid {}: {:?}", field, raw)))
}

fn parse_opt_int(field: &str, raw: Option<&str>) -> Result<i64, SourceError> {
    match raw {
        Some(raw) if !raw.is_empty() => parse_int(field, raw),
        _ => Ok(0),
    }
}

impl TryFrom<BlockResponse> for BlockData {
    type Error = SourceError;

    fn try_from(resp: BlockResponse) -> Result<Self, Self::Error> {
        let txs = resp
            .block
            .data
            .txs
            .unwrap_or_default()
            .iter()
            .map(|tx| {
                STANDARD
                    .decode(tx)
                    .map(Bytes::from)
                    .map_err(|e| SourceError::Decode(format!("invalid tx encoding: {}", e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BlockData {
            height: parse_int("height", &resp.block.header.height)?,
            time: resp.block.header.time,
            hash: resp.block_id.hash,
            proposer: resp.block.header.proposer_address,
            txs,
        })
    }
}

impl TryFrom<BlockResultsResponse> for BlockResults {
    type Error = SourceError;

    fn try_from(resp: BlockResultsResponse) -> Result<Self, Self::Error> {
        let txs_results = resp
            .txs_results
            .unwrap_or_default()
            .into_iter()
            .map(|r| {
                Ok(ExecResult {
                    code: r.code,
                    gas_wanted: parse_opt_int("gas_wanted", r.gas_wanted.as_deref())?,
                    gas_used: parse_opt_int("gas_used", r.gas_used.as_deref())?,
                    codespace: r.codespace,
                    log: r.log,
                })
            })
            .collect::<Result<Vec<_>, SourceError>>()?;

        Ok(BlockResults {
            height: parse_int("height", &resp.height)?,
            txs_results,
        })
    }
}

impl StatusResponse {
    pub fn latest_height(&self) -> Result<i64, SourceError> {
        parse_int("latest_block_height", &self.sync_info.latest_block_height)
    }
}
