use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::msgs::{Coin, CosmosMsg};

/// Offset between heights in the synthetic transaction id.
pub const TX_ID_HEIGHT_FACTOR: i64 = 100_000;

// ---------------------------------------------------------------------------
// Raw chain data, as handed over by a `BlockSource`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BlockData {
    pub height: i64,
    pub time: DateTime<Utc>,
    pub hash: String,
    pub proposer: String,
    pub txs: Vec<Bytes>,
}

#[derive(Debug, Clone, Default)]
pub struct BlockResults {
    pub height: i64,
    pub txs_results: Vec<ExecResult>,
}

/// Outcome of one transaction's execution, aligned by index with `BlockData::txs`.
#[derive(Debug, Clone, Default)]
pub struct ExecResult {
    pub code: u32,
    pub codespace: String,
    pub log: String,
    pub gas_wanted: i64,
    pub gas_used: i64,
}

/// A signed transaction after protobuf decoding.
#[derive(Debug, Clone, Default)]
pub struct SignedTx {
    pub fee: Fee,
    pub memo: String,
    pub msgs: Vec<CosmosMsg>,
}

// ---------------------------------------------------------------------------
// Normalized documents
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub height: i64,
    pub time: i64,
    pub hash: String,
    pub txn: i64,
    pub proposer: String,
}

impl From<&BlockData> for Block {
    fn from(data: &BlockData) -> Self {
        Self {
            height: data.height,
            time: data.time.timestamp(),
            hash: data.hash.clone(),
            txn: data.txs.len() as i64,
            proposer: data.proposer.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    #[default]
    Success,
    Fail,
}

impl TxStatus {
    pub fn from_code(code: u32) -> Self {
        if code == 0 {
            TxStatus::Success
        } else {
            TxStatus::Fail
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvPair {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub attributes: Vec<KvPair>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocTxMsg {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub msg: CosmosMsg,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Tx {
    pub time: i64,
    pub height: i64,
    pub tx_hash: String,
    /// Type of the first message that resolved through the router.
    #[serde(rename = "type")]
    pub tx_type: String,
    pub memo: String,
    pub status: TxStatus,
    pub log: String,
    pub fee: Fee,
    pub types: Vec<String>,
    pub events: Vec<Event>,
    pub signers: Vec<String>,
    #[serde(rename = "msgs")]
    pub doc_msgs: Vec<DocTxMsg>,
    pub addrs: Vec<String>,
    pub tx_index: u32,
    pub tx_id: i64,
}

impl Tx {
    /// Whether the transaction resolved at least one message and should be kept.
    pub fn is_routed(&self) -> bool {
        !self.tx_hash.is_empty() && !self.tx_type.is_empty()
    }
}

/// `height * 100000 + index`. `None` when the id would collide with the next
/// height or overflow.
pub fn tx_id(height: i64, index: usize) -> Option<i64> {
    let index = i64::try_from(index).ok().filter(|i| *i < TX_ID_HEIGHT_FACTOR)?;
    height.checked_mul(TX_ID_HEIGHT_FACTOR)?.checked_add(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tx_id_formula() {
        assert_eq!(tx_id(0, 0), Some(0));
        assert_eq!(tx_id(12, 3), Some(1_200_003));
        assert_eq!(tx_id(7, 99_999), Some(799_999));
    }

    #[test]
    fn test_tx_id_rejects_colliding_index() {
        assert_eq!(tx_id(7, 100_000), None);
    }

    #[test]
    fn test_tx_id_rejects_overflow() {
        assert_eq!(tx_id(i64::MAX / 1000, 0), None);
    }

    #[test]
    fn test_status_from_code() {
        assert_eq!(TxStatus::from_code(0), TxStatus::Success);
        assert_eq!(TxStatus::from_code(5), TxStatus::Fail);
    }

    #[test]
    fn test_tx_serializes_with_document_field_names() {
        let tx = Tx {
            tx_hash: "AB".into(),
            tx_type: "send".into(),
            status: TxStatus::Fail,
            ..Default::default()
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "send");
        assert_eq!(value["status"], "fail");
        assert!(value["msgs"].is_array());
    }
}
