//! Tracing Sink Adapter
//!
//! Implements `DocumentSink` by emitting every block and transaction document
//! as a structured log record. Each document is serialized to the JSON shape a
//! downstream document store would receive.

use async_trait::async_trait;
use crate::{
    application::{AppError, AppResult, DocumentSink},
    domain::{Block, Tx},
};

#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentSink for LogSink {
    async fn save_block(&self, block: &Block, txs: &[Tx]) -> AppResult<()> {
        tracing::info!(
            height = block.height,
            hash = %block.hash,
            txn = block.txn,
            indexed = txs.len(),
            "Saved block"
        );

        for tx in txs {
            let doc = serde_json::to_string(tx).map_err(|e| AppError::Sink(e.to_string()))?;
            tracing::debug!(tx_hash = %tx.tx_hash, tx_id = tx.tx_id, msg_type = %tx.tx_type, "{}", doc);
        }

        Ok(())
    }
}
