pub mod dedup;
pub mod error;
pub mod logs;
pub mod ports;
pub mod router;
pub mod use_cases;
pub use error::*;
pub use ports::*;
pub use router::MsgRouter;
pub use use_cases::*;
