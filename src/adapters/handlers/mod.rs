//! Per-module message handlers and the statically known route table.

pub mod bank;
pub mod crisis;
pub mod distribution;
pub mod evidence;
pub mod feegrant;
pub mod gov;
pub mod ibc;
pub mod slashing;
pub mod staking;

pub use bank::BankHandler;
pub use crisis::CrisisHandler;
pub use distribution::DistributionHandler;
pub use evidence::EvidenceHandler;
pub use feegrant::FeegrantHandler;
pub use gov::GovHandler;
pub use ibc::IbcHandler;
pub use slashing::SlashingHandler;
pub use staking::StakingHandler;

use std::sync::Arc;

use crate::{
    application::{AppResult, MsgHandler, MsgRouter},
    domain::msgs::{
        BANK_ROUTE, CRISIS_ROUTE, DISTRIBUTION_ROUTE, EVIDENCE_ROUTE, FEEGRANT_ROUTE, GOV_ROUTE,
        IBC_ROUTE, IBC_TRANSFER_ROUTE, SLASHING_ROUTE, STAKING_ROUTE,
    },
};

fn route<H: MsgHandler + 'static>(key: &'static str, handler: H) -> (&'static str, Arc<dyn MsgHandler>) {
    (key, Arc::new(handler))
}

/// Every module this indexer can decode, keyed by route.
pub fn known_handlers() -> Vec<(&'static str, Arc<dyn MsgHandler>)> {
    let ibc: Arc<dyn MsgHandler> = Arc::new(IbcHandler::new());
    vec![
        route(BANK_ROUTE, BankHandler::new()),
        route(STAKING_ROUTE, StakingHandler::new()),
        route(DISTRIBUTION_ROUTE, DistributionHandler::new()),
        route(GOV_ROUTE, GovHandler::new()),
        route(SLASHING_ROUTE, SlashingHandler::new()),
        route(CRISIS_ROUTE, CrisisHandler::new()),
        route(EVIDENCE_ROUTE, EvidenceHandler::new()),
        route(FEEGRANT_ROUTE, FeegrantHandler::new()),
        (IBC_ROUTE, ibc.clone()),
        (IBC_TRANSFER_ROUTE, ibc),
    ]
}

/// Builds the router for `allow_list` (empty = all known modules).
pub fn build_router(allow_list: &[String]) -> AppResult<MsgRouter> {
    let router = MsgRouter::new(known_handlers(), allow_list)?;
    tracing::info!(routes = ?router.routes(), "Built message router");
    Ok(router)
}
