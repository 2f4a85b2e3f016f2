//! Protobuf decoding of Cosmos SDK transactions.
//!
//! A raw transaction is a `TxRaw` whose body and auth info are themselves
//! protobuf-encoded. Signatures are not checked; only fee, memo and messages
//! are extracted.

use prost::Message;

use crate::{
    application::{DecodeError, SignedTxDecoder},
    domain::{
        msgs::{AuthInfo, TxBody, TxRaw},
        CosmosMsg, Fee, SignedTx,
    },
};

#[derive(Debug, Default, Clone, Copy)]
pub struct ProtoTxDecoder;

impl ProtoTxDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl SignedTxDecoder for ProtoTxDecoder {
    fn decode(&self, raw: &[u8]) -> Result<SignedTx, DecodeError> {
        let tx_raw = TxRaw::decode(raw)?;
        let body = TxBody::decode(tx_raw.body_bytes.as_slice())?;
        let auth_info = AuthInfo::decode(tx_raw.auth_info_bytes.as_slice())?;

        let fee = auth_info.fee.unwrap_or_default();
        let gas = i64::try_from(fee.gas_limit)
            .map_err(|_| DecodeError::Malformed(format!("gas limit {} out of range", fee.gas_limit)))?;

        let msgs = body
            .messages
            .into_iter()
            .map(CosmosMsg::from_any)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SignedTx {
            fee: Fee { amount: fee.amount, gas },
            memo: body.memo,
            msgs,
        })
    }
}
