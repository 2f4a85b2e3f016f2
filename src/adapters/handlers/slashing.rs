use crate::{
    application::{MsgDocInfo, MsgHandler},
    domain::CosmosMsg,
};

pub const MSG_TYPE_UNJAIL: &str = "unjail";

#[derive(Debug, Default)]
pub struct SlashingHandler;

impl SlashingHandler {
    pub fn new() -> Self {
        Self
    }
}

impl MsgHandler for SlashingHandler {
    fn name(&self) -> &str {
        "SlashingHandler"
    }

    fn handle(&self, msg: &CosmosMsg) -> MsgDocInfo {
        match msg {
            CosmosMsg::Slashing(m) => {
                MsgDocInfo::new(MSG_TYPE_UNJAIL, msg, vec![m.validator_addr.clone()])
            }
            _ => MsgDocInfo::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::msgs::MsgUnjail;

    #[test]
    fn test_unjail() {
        let msg = CosmosMsg::Slashing(MsgUnjail { validator_addr: "cosmosvaloper1x".into() });
        let info = SlashingHandler::new().handle(&msg);
        assert_eq!(info.msg_type(), "unjail");
        assert_eq!(info.addrs, vec!["cosmosvaloper1x"]);
    }
}
