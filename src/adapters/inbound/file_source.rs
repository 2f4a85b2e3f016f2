use std::path::{Path, PathBuf};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use crate::{
    adapters::inbound::rpc_types::{BlockResponse, BlockResultsResponse},
    application::{BlockSource, SourceError},
    domain::{BlockData, BlockResults},
};

pub const BLOCK_FILE: &str = "block.json";
pub const BLOCK_RESULTS_FILE: &str = "block_results.json";

/// Replays blocks from a directory laid out as `<dir>/<height>/block.json`
/// and `<dir>/<height>/block_results.json`, each holding the `result` object
/// of the matching RPC response.
pub struct FileSourceAdaptor {
    dir: PathBuf,
}

impl FileSourceAdaptor {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read<T: DeserializeOwned>(&self, height: i64, file: &str) -> Result<T, SourceError> {
        let path = self.dir.join(height.to_string()).join(file);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound(height));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

#[async_trait]
impl BlockSource for FileSourceAdaptor {
    async fn block(&self, height: i64) -> Result<BlockData, SourceError> {
        let response: BlockResponse = self.read(height, BLOCK_FILE).await?;
        BlockData::try_from(response)
    }

    async fn block_results(&self, height: i64) -> Result<BlockResults, SourceError> {
        let response: BlockResultsResponse = self.read(height, BLOCK_RESULTS_FILE).await?;
        BlockResults::try_from(response)
    }

    async fn latest_height(&self) -> Result<i64, SourceError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut latest = None;
        while let Some(entry) = entries.next_entry().await? {
            if let Some(height) = entry.file_name().to_str().and_then(|n| n.parse::<i64>().ok()) {
                latest = latest.max(Some(height));
            }
        }
        latest.ok_or_else(|| {
            SourceError::Decode(format!("no block fixtures under {}", self.dir.display()))
        })
    }
}
