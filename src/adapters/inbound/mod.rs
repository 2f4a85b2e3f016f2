pub mod file_source;
pub mod rpc_source;
pub mod rpc_types;
pub use file_source::FileSourceAdaptor;
pub use rpc_source::TendermintRpcSource;
