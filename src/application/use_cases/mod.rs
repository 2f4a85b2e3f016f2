pub mod ingest;
pub mod parse_tx;
pub mod sync;
pub use ingest::*;
pub use parse_tx::*;
pub use sync::*;
