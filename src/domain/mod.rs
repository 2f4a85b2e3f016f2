pub mod models;
pub mod msgs;

pub use models::*;
pub use msgs::{Any, Coin, CosmosMsg};
