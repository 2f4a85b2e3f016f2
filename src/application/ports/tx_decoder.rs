use crate::{application::DecodeError, domain::SignedTx};

pub trait SignedTxDecoder: Send + Sync {
    fn decode(&self, raw: &[u8]) -> Result<SignedTx, DecodeError>;
}
