use crate::{
    application::{MsgDocInfo, MsgHandler},
    domain::{msgs::GovMsg, CosmosMsg},
};

pub const MSG_TYPE_SUBMIT_PROPOSAL: &str = "submit_proposal";
pub const MSG_TYPE_VOTE: &str = "vote";
pub const MSG_TYPE_DEPOSIT: &str = "deposit";

#[derive(Debug, Default)]
pub struct GovHandler;

impl GovHandler {
    pub fn new() -> Self {
        Self
    }
}

impl MsgHandler for GovHandler {
    fn name(&self) -> &str {
        "GovHandler"
    }

    fn handle(&self, msg: &CosmosMsg) -> MsgDocInfo {
        match msg {
            CosmosMsg::Gov(GovMsg::SubmitProposal(m)) => {
                MsgDocInfo::new(MSG_TYPE_SUBMIT_PROPOSAL, msg, vec![m.proposer.clone()])
            }
            CosmosMsg::Gov(GovMsg::Vote(m)) => {
                MsgDocInfo::new(MSG_TYPE_VOTE, msg, vec![m.voter.clone()])
            }
            CosmosMsg::Gov(GovMsg::Deposit(m)) => {
                MsgDocInfo::new(MSG_TYPE_DEPOSIT, msg, vec![m.depositor.clone()])
            }
            _ => MsgDocInfo::default(),
        }
    }
}
