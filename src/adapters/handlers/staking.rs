use crate::{
    application::{MsgDocInfo, MsgHandler},
    domain::{msgs::StakingMsg, CosmosMsg},
};

pub const MSG_TYPE_CREATE_VALIDATOR: &str = "create_validator";
pub const MSG_TYPE_EDIT_VALIDATOR: &str = "edit_validator";
pub const MSG_TYPE_DELEGATE: &str = "delegate";
pub const MSG_TYPE_BEGIN_UNBONDING: &str = "begin_unbonding";
pub const MSG_TYPE_BEGIN_REDELEGATE: &str = "begin_redelegate";

#[derive(Debug, Default)]
pub struct StakingHandler;

impl StakingHandler {
    pub fn new() -> Self {
        Self
    }
}

impl MsgHandler for StakingHandler {
    fn name(&self) -> &str {
        "StakingHandler"
    }

    fn handle(&self, msg: &CosmosMsg) -> MsgDocInfo {
        let CosmosMsg::Staking(staking) = msg else {
            return MsgDocInfo::default();
        };

        match staking {
            StakingMsg::CreateValidator(m) => MsgDocInfo::new(
                MSG_TYPE_CREATE_VALIDATOR,
                msg,
                vec![m.delegator_address.clone(), m.validator_address.clone()],
            ),
            StakingMsg::EditValidator(m) => {
                MsgDocInfo::new(MSG_TYPE_EDIT_VALIDATOR, msg, vec![m.validator_address.clone()])
            }
            StakingMsg::Delegate(m) => MsgDocInfo::new(
                MSG_TYPE_DELEGATE,
                msg,
                vec![m.delegator_address.clone(), m.validator_address.clone()],
            ),
            StakingMsg::Undelegate(m) => MsgDocInfo::new(
                MSG_TYPE_BEGIN_UNBONDING,
                msg,
                vec![m.delegator_address.clone(), m.validator_address.clone()],
            ),
            StakingMsg::BeginRedelegate(m) => MsgDocInfo::new(
                MSG_TYPE_BEGIN_REDELEGATE,
                msg,
                vec![
                    m.delegator_address.clone(),
                    m.validator_src_address.clone(),
                    m.validator_dst_address.clone(),
                ],
            ),
        }
    }
}
