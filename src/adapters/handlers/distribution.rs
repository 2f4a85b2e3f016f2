use crate::{
    application::{MsgDocInfo, MsgHandler},
    domain::{msgs::DistributionMsg, CosmosMsg},
};

pub const MSG_TYPE_SET_WITHDRAW_ADDRESS: &str = "set_withdraw_address";
pub const MSG_TYPE_WITHDRAW_DELEGATOR_REWARD: &str = "withdraw_delegator_reward";
pub const MSG_TYPE_WITHDRAW_VALIDATOR_COMMISSION: &str = "withdraw_validator_commission";
pub const MSG_TYPE_FUND_COMMUNITY_POOL: &str = "fund_community_pool";

#[derive(Debug, Default)]
pub struct DistributionHandler;

impl DistributionHandler {
    pub fn new() -> Self {
        Self
    }
}

impl MsgHandler for DistributionHandler {
    fn name(&self) -> &str {
        "DistributionHandler"
    }

    fn handle(&self, msg: &CosmosMsg) -> MsgDocInfo {
        let CosmosMsg::Distribution(distribution) = msg else {
            return MsgDocInfo::default();
        };

        match distribution {
            DistributionMsg::SetWithdrawAddress(m) => MsgDocInfo::new(
                MSG_TYPE_SET_WITHDRAW_ADDRESS,
                msg,
                vec![m.delegator_address.clone(), m.withdraw_address.clone()],
            ),
            DistributionMsg::WithdrawDelegatorReward(m) => MsgDocInfo::new(
                MSG_TYPE_WITHDRAW_DELEGATOR_REWARD,
                msg,
                vec![m.delegator_address.clone(), m.validator_address.clone()],
            ),
            DistributionMsg::WithdrawValidatorCommission(m) => MsgDocInfo::new(
                MSG_TYPE_WITHDRAW_VALIDATOR_COMMISSION,
                msg,
                vec![m.validator_address.clone()],
            ),
            DistributionMsg::FundCommunityPool(m) => {
                MsgDocInfo::new(MSG_TYPE_FUND_COMMUNITY_POOL, msg, vec![m.depositor.clone()])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::msgs::MsgWithdrawDelegatorReward;

    #[test]
    fn test_withdraw_reward() {
        let msg = CosmosMsg::Distribution(DistributionMsg::WithdrawDelegatorReward(
            MsgWithdrawDelegatorReward {
                delegator_address: "del".into(),
                validator_address: "val".into(),
            },
        ));
        let info = DistributionHandler::new().handle(&msg);
        assert_eq!(info.msg_type(), "withdraw_delegator_reward");
        assert_eq!(info.addrs, vec!["del", "val"]);
    }
}
