use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::{
    application::{
        dedup::unique, logs::parse_abci_logs, router::MsgRouter, AppError, AppResult,
        SignedTxDecoder,
    },
    domain::{tx_id, BlockData, ExecResult, Tx, TxStatus},
};

/// Turns one raw transaction and its execution result into a `Tx` document.
pub struct TxParser {
    decoder: Arc<dyn SignedTxDecoder>,
    router: Arc<MsgRouter>,
}

impl TxParser {
    pub fn new(decoder: Arc<dyn SignedTxDecoder>, router: Arc<MsgRouter>) -> Self {
        Self { decoder, router }
    }

    /// Returns `Ok(None)` for transactions that are skipped (undecodable, or
    /// with no message any registered module recognizes). A transaction
    /// without messages is returned untyped and dropped by the caller.
    ///
    /// The only error is a position that cannot get a unique `tx_id`.
    pub fn parse(
        &self,
        raw: &[u8],
        result: &ExecResult,
        block: &BlockData,
        index: usize,
    ) -> AppResult<Option<Tx>> {
        let height = block.height;
        let tx_id = tx_id(height, index).ok_or(AppError::TxIdOverflow { height, index })?;
        let tx_hash = hex::encode_upper(Sha256::digest(raw));

        let signed = match self.decoder.decode(raw) {
            Ok(signed) => signed,
            Err(e) => {
                tracing::warn!(err_tag = "TxDecoder", tx_hash = %tx_hash, height, "{}", e);
                return Ok(None);
            }
        };

        let status = TxStatus::from_code(result.code);
        let log = match status {
            TxStatus::Fail => result.log.clone(),
            TxStatus::Success => String::new(),
        };

        let mut tx = Tx {
            time: block.time.timestamp(),
            height,
            tx_hash,
            memo: signed.memo,
            status,
            log,
            fee: signed.fee,
            events: parse_abci_logs(&result.log),
            tx_index: index as u32,
            tx_id,
            ..Default::default()
        };

        if signed.msgs.is_empty() {
            return Ok(Some(tx));
        }

        let mut signers = Vec::new();
        let mut addrs = Vec::new();
        let mut types = Vec::new();

        for msg in &signed.msgs {
            let info = self.router.dispatch(msg);
            if info.addrs.is_empty() {
                continue;
            }
            let Some(doc) = info.doc else {
                continue;
            };

            if tx.doc_msgs.is_empty() {
                tx.tx_type = doc.msg_type.clone();
            }
            signers.extend(msg.signers());
            addrs.extend(unique(info.addrs));
            types.push(doc.msg_type.clone());
            tx.doc_msgs.push(doc);
        }

        tx.signers = unique(signers);
        tx.types = unique(types);
        tx.addrs = unique(addrs);

        if tx.tx_type.is_empty() {
            tracing::warn!(err_tag = "TxMsg", tx_hash = %tx.tx_hash, height, "unsupported message type");
            return Ok(None);
        }

        Ok(Some(tx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::handlers::build_router;
    use crate::application::DecodeError;
    use crate::domain::msgs::{BankMsg, MsgSend, MsgUnjail, MsgVote, GovMsg};
    use crate::domain::{Any, Coin, CosmosMsg, Fee, SignedTx};
    use chrono::{TimeZone, Utc};

    struct Fixed(SignedTx);

    impl SignedTxDecoder for Fixed {
        fn decode(&self, _raw: &[u8]) -> Result<SignedTx, DecodeError> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    impl SignedTxDecoder for Broken {
        fn decode(&self, _raw: &[u8]) -> Result<SignedTx, DecodeError> {
            Err(DecodeError::Malformed("garbage".into()))
        }
    }

    fn block(height: i64) -> BlockData {
        BlockData {
            height,
            time: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            hash: "BLOCKHASH".into(),
            proposer: "PROPOSER".into(),
            txs: vec![],
        }
    }

    fn send(from: &str, to: &str) -> CosmosMsg {
        CosmosMsg::Bank(BankMsg::Send(MsgSend {
            from_address: from.into(),
            to_address: to.into(),
            amount: vec![Coin { denom: "uatom".into(), amount: "1".into() }],
        }))
    }

    fn unknown() -> CosmosMsg {
        CosmosMsg::Unknown(Any { type_url: "/cosmos.authz.v1beta1.MsgExec".into(), value: vec![] })
    }

    fn parser(msgs: Vec<CosmosMsg>, allow: &str) -> TxParser {
        let signed = SignedTx {
            fee: Fee { amount: vec![], gas: 200_000 },
            memo: "hello".into(),
            msgs,
        };
        let router = build_router(&crate::application::router::parse_module_list(allow)).unwrap();
        TxParser::new(Arc::new(Fixed(signed)), Arc::new(router))
    }

    fn ok() -> ExecResult {
        ExecResult { log: "[]".into(), ..Default::default() }
    }

    #[test]
    fn test_success_has_empty_log() {
        let tx = parser(vec![send("a", "b")], "")
            .parse(b"raw", &ok(), &block(10), 0)
            .unwrap()
            .unwrap();
        assert_eq!(tx.status, TxStatus::Success);
        assert_eq!(tx.log, "");
        assert_eq!(tx.memo, "hello");
        assert_eq!(tx.fee.gas, 200_000);
        assert_eq!(tx.time, block(10).time.timestamp());
    }

    #[test]
    fn test_failure_keeps_raw_log() {
        let result = ExecResult { code: 5, log: "insufficient funds".into(), ..Default::default() };
        let tx = parser(vec![send("a", "b")], "")
            .parse(b"raw", &result, &block(10), 0)
            .unwrap()
            .unwrap();
        assert_eq!(tx.status, TxStatus::Fail);
        assert_eq!(tx.log, "insufficient funds");
        assert!(tx.events.is_empty());
    }

    #[test]
    fn test_hash_is_uppercase_sha256() {
        let tx = parser(vec![send("a", "b")], "").parse(b"", &ok(), &block(1), 0).unwrap().unwrap();
        assert_eq!(
            tx.tx_hash,
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"
        );
    }

    #[test]
    fn test_tx_id_and_index() {
        let tx = parser(vec![send("a", "b")], "").parse(b"raw", &ok(), &block(42), 7).unwrap().unwrap();
        assert_eq!(tx.tx_index, 7);
        assert_eq!(tx.tx_id, 4_200_007);
    }

    #[test]
    fn test_index_without_unique_id_is_hard_error() {
        let err = parser(vec![send("a", "b")], "")
            .parse(b"raw", &ok(), &block(42), 100_000)
            .unwrap_err();
        assert!(matches!(err, AppError::TxIdOverflow { height: 42, index: 100_000 }));
    }

    #[test]
    fn test_undecodable_tx_is_skipped() {
        let router = build_router(&[]).unwrap();
        let parser = TxParser::new(Arc::new(Broken), Arc::new(router));
        assert!(parser.parse(b"raw", &ok(), &block(1), 0).unwrap().is_none());
    }

    #[test]
    fn test_tx_without_messages_is_untyped() {
        let tx = parser(vec![], "").parse(b"raw", &ok(), &block(1), 0).unwrap().unwrap();
        assert!(!tx.is_routed());
        assert!(tx.doc_msgs.is_empty());
    }

    #[test]
    fn test_unresolved_messages_drop_the_tx() {
        let parsed = parser(vec![unknown(), unknown()], "").parse(b"raw", &ok(), &block(1), 0).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_filtered_module_drops_the_tx() {
        let parsed = parser(vec![send("a", "b")], "gov").parse(b"raw", &ok(), &block(1), 0).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_first_resolved_message_sets_type() {
        let vote = CosmosMsg::Gov(GovMsg::Vote(MsgVote { proposal_id: 1, voter: "v".into(), option: 1 }));
        let tx = parser(vec![unknown(), vote, send("a", "b")], "")
            .parse(b"raw", &ok(), &block(1), 0)
            .unwrap()
            .unwrap();
        assert_eq!(tx.tx_type, "vote");
        assert_eq!(tx.doc_msgs.len(), 2);
        assert_eq!(tx.doc_msgs[0].msg_type, "vote");
        assert_eq!(tx.doc_msgs[1].msg_type, "send");
    }

    #[test]
    fn test_aggregates_are_deduplicated() {
        let msgs = vec![
            send("a", "b"),
            send("a", "c"),
            send("b", "a"),
            CosmosMsg::Slashing(MsgUnjail { validator_addr: "val".into() }),
        ];
        let tx = parser(msgs, "").parse(b"raw", &ok(), &block(1), 0).unwrap().unwrap();

        let mut signers = tx.signers.clone();
        signers.sort();
        assert_eq!(signers, vec!["a", "b", "val"]);

        let mut addrs = tx.addrs.clone();
        addrs.sort();
        assert_eq!(addrs, vec!["a", "b", "c", "val"]);

        let mut types = tx.types.clone();
        types.sort();
        assert_eq!(types, vec!["send", "unjail"]);
        assert_eq!(tx.doc_msgs.len(), 4);
    }

    #[test]
    fn test_events_decoded_from_log() {
        let result = ExecResult {
            log: r#"[{"msg_index":0,"events":[{"type":"message","attributes":[{"key":"action","value":"send"}]}]}]"#.into(),
            ..Default::default()
        };
        let tx = parser(vec![send("a", "b")], "").parse(b"raw", &result, &block(1), 0).unwrap().unwrap();
        assert_eq!(tx.events.len(), 1);
        assert_eq!(tx.events[0].event_type, "message");
    }
}
