pub mod cosmos_tx;
pub use cosmos_tx::ProtoTxDecoder;
