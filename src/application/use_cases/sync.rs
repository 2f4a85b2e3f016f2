use std::sync::Arc;
use tokio::{
    sync::{mpsc, OwnedSemaphorePermit, Semaphore},
    task::{JoinError, JoinSet},
};
use crate::application::{
    use_cases::{BlockFailure, BlockPipeline, ParsedBlock},
    AppError, AppResult, DocumentSink,
};

/// Upper bound for the number of heights processed at once.
pub const MAX_CONCURRENCY: usize = 1024;

type Outcome = (i64, Result<ParsedBlock, BlockFailure>, OwnedSemaphorePermit);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub blocks: usize,
    pub txs: usize,
    pub failed_heights: Vec<i64>,
}

/// Walks a height range, ingesting up to `concurrency` heights at a time and
/// handing every parsed block to the sink. Failed heights are reported, not
/// retried.
pub struct SyncRunner {
    pipeline: Arc<BlockPipeline>,
    sink: Arc<dyn DocumentSink>,
    concurrency: usize,
}

impl SyncRunner {
    pub fn new(pipeline: Arc<BlockPipeline>, sink: Arc<dyn DocumentSink>, concurrency: usize) -> Self {
        Self {
            pipeline,
            sink,
            concurrency: concurrency.clamp(1, MAX_CONCURRENCY),
        }
    }

    /// Syncs `start..=end`, or up to the source's latest height when `end` is `None`.
    pub async fn run(&self, start: i64, end: Option<i64>) -> AppResult<SyncReport> {
        let end = match end {
            Some(end) => end,
            None => self
                .pipeline
                .source()
                .latest_height()
                .await
                .map_err(AppError::LatestHeight)?,
        };

        if start > end {
            tracing::info!(start, end, "Nothing to sync");
            return Ok(SyncReport::default());
        }

        tracing::info!(start, end, concurrency = self.concurrency, "Starting sync");

        // Each permit travels with its block and is released after the sink call.
        let (tx, mut rx) = mpsc::channel::<Outcome>(self.concurrency);

        // Producer loop
        let pipeline = self.pipeline.clone();
        let concurrency = self.concurrency;
        let producer = tokio::spawn(async move {
            let permits = Arc::new(Semaphore::new(concurrency));
            let mut workers = JoinSet::new();

            for height in start..=end {
                let Ok(permit) = permits.clone().acquire_owned().await else {
                    break;
                };
                let pipeline = pipeline.clone();
                let tx = tx.clone();
                workers.spawn(async move {
                    let outcome = pipeline.fetch_and_parse(height).await;
                    if tx.send((height, outcome, permit)).await.is_err() {
                        tracing::warn!(height, "Consumer gone, dropping block");
                    }
                });

                while let Some(joined) = workers.try_join_next() {
                    log_join_error(joined);
                }
            }

            while let Some(joined) = workers.join_next().await {
                log_join_error(joined);
            }
        });

        // Consumer loop
        let mut report = SyncReport::default();
        while let Some((height, outcome, permit)) = rx.recv().await {
            match outcome {
                Ok(parsed) => match self.sink.save_block(&parsed.block, &parsed.txs).await {
                    Ok(()) => {
                        report.blocks += 1;
                        report.txs += parsed.txs.len();
                    }
                    Err(e) => {
                        tracing::error!(height, error = %e, "Failed to hand off block");
                        report.failed_heights.push(height);
                    }
                },
                Err(failure) => {
                    tracing::error!(
                        height,
                        partial_txs = failure.txs.len(),
                        error = %failure,
                        "Block ingestion failed"
                    );
                    report.failed_heights.push(height);
                }
            }
            drop(permit);
        }

        if let Err(e) = producer.await {
            tracing::error!(error = %e, "Producer task aborted");
        }

        report.failed_heights.sort_unstable();
        tracing::info!(
            blocks = report.blocks,
            txs = report.txs,
            failed = report.failed_heights.len(),
            "Sync finished"
        );
        Ok(report)
    }
}

fn log_join_error(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        tracing::error!(error = %e, "Sync worker aborted");
    }
}
