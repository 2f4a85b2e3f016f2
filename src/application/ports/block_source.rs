use async_trait::async_trait;
use crate::{
    application::SourceError,
    domain::{BlockData, BlockResults},
};

/// Read access to a chain node: blocks, their execution results, and the tip.
#[async_trait]
pub trait BlockSource: Send + Sync {
    async fn block(&self, height: i64) -> Result<BlockData, SourceError>;
    async fn block_results(&self, height: i64) -> Result<BlockResults, SourceError>;
    async fn latest_height(&self) -> Result<i64, SourceError>;
}
