use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::sleep;

use crate::{
    application::{use_cases::TxParser, AppError, BlockSource, SourceError},
    domain::{Block, BlockData, BlockResults, Tx},
};

/// Delay before the single retry of each RPC call.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub block_delay: Duration,
    pub results_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            block_delay: Duration::from_millis(500),
            results_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParsedBlock {
    pub block: Block,
    pub txs: Vec<Tx>,
}

/// A height that could not be fully ingested, with whatever was built before
/// the failure.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct BlockFailure {
    pub block: Option<Block>,
    pub txs: Vec<Tx>,
    #[source]
    pub error: AppError,
}

impl BlockFailure {
    fn new(block: Option<Block>, txs: Vec<Tx>, error: AppError) -> Self {
        Self { block, txs, error }
    }
}

pub struct BlockPipeline {
    source: Arc<dyn BlockSource>,
    parser: TxParser,
    retry: RetryPolicy,
}

impl BlockPipeline {
    pub fn new(source: Arc<dyn BlockSource>, parser: TxParser) -> Self {
        Self {
            source,
            parser,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn source(&self) -> &Arc<dyn BlockSource> {
        &self.source
    }

    /// Fetches one height and turns it into documents.
    ///
    /// Each RPC call is attempted at most twice. The transactions of the
    /// block are parsed strictly in order; untyped ones are left out.
    pub async fn fetch_and_parse(&self, height: i64) -> Result<ParsedBlock, BlockFailure> {
        let data = fetch_with_retry(height, "block", self.retry.block_delay, || {
            self.source.block(height)
        })
        .await
        .map_err(|source| {
            BlockFailure::new(None, Vec::new(), AppError::BlockFetchFailed { height, source })
        })?;

        let block = Block::from(&data);

        let results = fetch_with_retry(height, "block_results", self.retry.results_delay, || {
            self.source.block_results(height)
        })
        .await;
        let results = match results {
            Ok(results) => results,
            Err(source) => {
                return Err(BlockFailure::new(
                    Some(block),
                    Vec::new(),
                    AppError::BlockResultsFetchFailed { height, source },
                ))
            }
        };

        if data.txs.len() != results.txs_results.len() {
            return Err(BlockFailure::new(
                None,
                Vec::new(),
                AppError::StructuralMismatch {
                    height,
                    txs: data.txs.len(),
                    results: results.txs_results.len(),
                },
            ));
        }

        match self.parse_txs(&data, &results) {
            Ok(txs) => Ok(ParsedBlock { block, txs }),
            Err((txs, error)) => Err(BlockFailure::new(Some(block), txs, error)),
        }
    }

    fn parse_txs(
        &self,
        data: &BlockData,
        results: &BlockResults,
    ) -> Result<Vec<Tx>, (Vec<Tx>, AppError)> {
        let mut txs = Vec::with_capacity(data.txs.len());
        for (index, (raw, result)) in data.txs.iter().zip(&results.txs_results).enumerate() {
            match self.parser.parse(raw, result, data, index) {
                Ok(Some(tx)) if tx.is_routed() => txs.push(tx),
                Ok(_) => {}
                Err(e) => return Err((txs, e)),
            }
        }
        Ok(txs)
    }
}

/// One attempt, then a single retry after `delay`.
async fn fetch_with_retry<T, F, Fut>(
    height: i64,
    what: &str,
    delay: Duration,
    mut fetch: F,
) -> Result<T, SourceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SourceError>>,
{
    match fetch().await {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(height, error = %e, "{} fetch failed, retrying in {:?}", what, delay);
            sleep(delay).await;
            fetch().await.inspect_err(|e| {
                tracing::error!(height, error = %e, "{} fetch failed after retry", what);
            })
        }
    }
}
