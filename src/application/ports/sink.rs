use async_trait::async_trait;
use crate::application::AppResult;
use crate::domain::{Block, Tx};

/// Receives the documents produced for one height.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    async fn save_block(&self, block: &Block, txs: &[Tx]) -> AppResult<()>;
}
