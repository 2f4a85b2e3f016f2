pub mod block_source;
pub mod msg_handler;
pub mod sink;
pub mod tx_decoder;
pub use block_source::*;
pub use msg_handler::*;
pub use sink::*;
pub use tx_decoder::*;
