#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{TimeZone, Utc};
use prost::Message;

use cosmos_block_indexer::{
    adapters::{handlers::build_router, ProtoTxDecoder},
    application::{router::parse_module_list, BlockPipeline, BlockSource, SourceError, TxParser},
    domain::{
        msgs::{AuthInfo, MsgSend, MsgVote, ProtoFee, TxBody, TxRaw, MSG_SEND, MSG_VOTE},
        Any, BlockData, BlockResults, Coin, ExecResult,
    },
};

/// In-memory block source whose calls can be made to fail a fixed number of
/// times per height.
#[derive(Default)]
pub struct ScriptedSource {
    blocks: HashMap<i64, BlockData>,
    results: HashMap<i64, BlockResults>,
    block_failures: Mutex<HashMap<i64, usize>>,
    results_failures: Mutex<HashMap<i64, usize>>,
    pub block_calls: AtomicUsize,
    pub results_calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, data: BlockData, results: BlockResults) -> Self {
        self.results.insert(data.height, results);
        self.blocks.insert(data.height, data);
        self
    }

    pub fn fail_block(self, height: i64, times: usize) -> Self {
        self.block_failures.lock().unwrap().insert(height, times);
        self
    }

    pub fn fail_results(self, height: i64, times: usize) -> Self {
        self.results_failures.lock().unwrap().insert(height, times);
        self
    }

    pub fn block_calls(&self) -> usize {
        self.block_calls.load(Ordering::SeqCst)
    }

    pub fn results_calls(&self) -> usize {
        self.results_calls.load(Ordering::SeqCst)
    }
}

fn take_failure(failures: &Mutex<HashMap<i64, usize>>, height: i64) -> bool {
    let mut failures = failures.lock().unwrap();
    match failures.get_mut(&height) {
        Some(left) if *left > 0 => {
            *left -= 1;
            true
        }
        _ => false,
    }
}

#[async_trait]
impl BlockSource for ScriptedSource {
    async fn block(&self, height: i64) -> Result<BlockData, SourceError> {
        self.block_calls.fetch_add(1, Ordering::SeqCst);
        if take_failure(&self.block_failures, height) {
            return Err(SourceError::Transport("connection reset".into()));
        }
        self.blocks.get(&height).cloned().ok_or(SourceError::NotFound(height))
    }

    async fn block_results(&self, height: i64) -> Result<BlockResults, SourceError> {
        self.results_calls.fetch_add(1, Ordering::SeqCst);
        if take_failure(&self.results_failures, height) {
            return Err(SourceError::Transport("connection reset".into()));
        }
        self.results.get(&height).cloned().ok_or(SourceError::NotFound(height))
    }

    async fn latest_height(&self) -> Result<i64, SourceError> {
        self.blocks.keys().max().copied().ok_or(SourceError::NotFound(0))
    }
}

pub fn send_any(from: &str, to: &str) -> Any {
    let msg = MsgSend {
        from_address: from.into(),
        to_address: to.into(),
        amount: vec![Coin { denom: "uatom".into(), amount: "10".into() }],
    };
    Any { type_url: MSG_SEND.into(), value: msg.encode_to_vec() }
}

pub fn vote_any(voter: &str) -> Any {
    let msg = MsgVote { proposal_id: 9, voter: voter.into(), option: 1 };
    Any { type_url: MSG_VOTE.into(), value: msg.encode_to_vec() }
}

pub fn unknown_any() -> Any {
    Any { type_url: "/cosmos.authz.v1beta1.MsgExec".into(), value: vec![] }
}

pub fn encode_tx(messages: Vec<Any>, memo: &str) -> Bytes {
    let body = TxBody { messages, memo: memo.into(), timeout_height: 0 };
    let auth_info = AuthInfo {
        fee: Some(ProtoFee {
            amount: vec![Coin { denom: "uatom".into(), amount: "500".into() }],
            gas_limit: 200_000,
            ..Default::default()
        }),
    };
    let raw = TxRaw {
        body_bytes: body.encode_to_vec(),
        auth_info_bytes: auth_info.encode_to_vec(),
        signatures: vec![vec![1; 64]],
    };
    Bytes::from(raw.encode_to_vec())
}

pub fn block_data(height: i64, txs: Vec<Bytes>) -> BlockData {
    BlockData {
        height,
        time: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        hash: format!("HASH{}", height),
        proposer: "PROPOSER".into(),
        txs,
    }
}

pub fn ok_results(height: i64, count: usize) -> BlockResults {
    BlockResults {
        height,
        txs_results: vec![ExecResult { log: "[]".into(), ..Default::default() }; count],
    }
}

/// A block of `txs` with successful results for each.
pub fn block(height: i64, txs: Vec<Bytes>) -> (BlockData, BlockResults) {
    let results = ok_results(height, txs.len());
    (block_data(height, txs), results)
}

pub fn pipeline(source: Arc<ScriptedSource>, allow_list: &str) -> BlockPipeline {
    let router = build_router(&parse_module_list(allow_list)).unwrap();
    let parser = TxParser::new(Arc::new(ProtoTxDecoder::new()), Arc::new(router));
    BlockPipeline::new(source, parser)
}
