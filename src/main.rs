use std::sync::Arc;

use cosmos_block_indexer::{
    adapters::{handlers::build_router, FileSourceAdaptor, LogSink, ProtoTxDecoder, TendermintRpcSource},
    application::{BlockPipeline, BlockSource, DocumentSink, SyncRunner, TxParser},
    infrastructure::{init_tracing, AppConfig, SourceType},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    init_tracing();

    tracing::info!("Initializing Cosmos Block Indexer");

    // Dependency Injection - Source
    let source: Arc<dyn BlockSource> = match config.source_type {
        SourceType::Rpc => Arc::new(TendermintRpcSource::new(&config.rpc_endpoint, config.rpc_timeout)?),
        SourceType::File => {
            tracing::info!("Replaying blocks from {}", config.fixture_dir.display());
            Arc::new(FileSourceAdaptor::new(&config.fixture_dir))
        }
    };

    // Dependency Injection - Message handlers
    let router = build_router(&config.only_support_module)?;
    let parser = TxParser::new(Arc::new(ProtoTxDecoder::new()), Arc::new(router));

    // Ingestion Pipeline
    let pipeline = Arc::new(BlockPipeline::new(source, parser));
    let sink: Arc<dyn DocumentSink> = Arc::new(LogSink::new());
    let runner = SyncRunner::new(pipeline, sink, config.concurrency);

    tracing::info!("Starting Ingestion Pipeline...");
    let report = runner.run(config.start_height, config.end_height).await?;

    if !report.failed_heights.is_empty() {
        tracing::warn!(failed = ?report.failed_heights, "Some heights were not ingested");
    }

    Ok(())
}
