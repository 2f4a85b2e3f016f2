use crate::{
    application::{MsgDocInfo, MsgHandler},
    domain::CosmosMsg,
};

pub const MSG_TYPE_VERIFY_INVARIANT: &str = "verify_invariant";

#[derive(Debug, Default)]
pub struct CrisisHandler;

impl CrisisHandler {
    pub fn new() -> Self {
        Self
    }
}

impl MsgHandler for CrisisHandler {
    fn name(&self) -> &str {
        "CrisisHandler"
    }

    fn handle(&self, msg: &CosmosMsg) -> MsgDocInfo {
        match msg {
            CosmosMsg::Crisis(m) => {
                MsgDocInfo::new(MSG_TYPE_VERIFY_INVARIANT, msg, vec![m.sender.clone()])
            }
            _ => MsgDocInfo::default(),
        }
    }
}
