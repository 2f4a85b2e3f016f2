use crate::{
    application::{MsgDocInfo, MsgHandler},
    domain::{msgs::FeegrantMsg, CosmosMsg},
};

pub const MSG_TYPE_GRANT_ALLOWANCE: &str = "grant_allowance";
pub const MSG_TYPE_REVOKE_ALLOWANCE: &str = "revoke_allowance";

#[derive(Debug, Default)]
pub struct FeegrantHandler;

impl FeegrantHandler {
    pub fn new() -> Self {
        Self
    }
}

impl MsgHandler for FeegrantHandler {
    fn name(&self) -> &str {
        "FeegrantHandler"
    }

    fn handle(&self, msg: &CosmosMsg) -> MsgDocInfo {
        match msg {
            CosmosMsg::Feegrant(FeegrantMsg::GrantAllowance(m)) => MsgDocInfo::new(
                MSG_TYPE_GRANT_ALLOWANCE,
                msg,
                vec![m.granter.clone(), m.grantee.clone()],
            ),
            CosmosMsg::Feegrant(FeegrantMsg::RevokeAllowance(m)) => MsgDocInfo::new(
                MSG_TYPE_REVOKE_ALLOWANCE,
                msg,
                vec![m.granter.clone(), m.grantee.clone()],
            ),
            _ => MsgDocInfo::default(),
        }
    }
}
