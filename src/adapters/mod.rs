pub mod decoders;
pub mod handlers;
pub mod inbound;
pub mod sinks;

pub use decoders::ProtoTxDecoder;
pub use inbound::{FileSourceAdaptor, TendermintRpcSource};
pub use sinks::LogSink;
