use crate::{
    application::{MsgDocInfo, MsgHandler},
    domain::{msgs::BankMsg, CosmosMsg},
};

pub const MSG_TYPE_SEND: &str = "send";
pub const MSG_TYPE_MULTI_SEND: &str = "multisend";

#[derive(Debug, Default)]
pub struct BankHandler;

impl BankHandler {
    pub fn new() -> Self {
        Self
    }
}

impl MsgHandler for BankHandler {
    fn name(&self) -> &str {
        "BankHandler"
    }

    fn handle(&self, msg: &CosmosMsg) -> MsgDocInfo {
        match msg {
            CosmosMsg::Bank(BankMsg::Send(m)) => MsgDocInfo::new(
                MSG_TYPE_SEND,
                msg,
                vec![m.from_address.clone(), m.to_address.clone()],
            ),
            CosmosMsg::Bank(BankMsg::MultiSend(m)) => {
                let addrs = m
                    .inputs
                    .iter()
                    .chain(&m.outputs)
                    .map(|io| io.address.clone())
                    .collect();
                MsgDocInfo::new(MSG_TYPE_MULTI_SEND, msg, addrs)
            }
            _ => MsgDocInfo::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::msgs::{BankIo, MsgMultiSend, MsgSend};

    #[test]
    fn test_send() {
        let msg = CosmosMsg::Bank(BankMsg::Send(MsgSend {
            from_address: "a".into(),
            to_address: "b".into(),
            amount: vec![],
        }));
        let info = BankHandler::new().handle(&msg);
        assert_eq!(info.msg_type(), "send");
        assert_eq!(info.addrs, vec!["a", "b"]);
        assert_eq!(info.doc.unwrap().msg, msg);
    }

    #[test]
    fn test_multisend_collects_inputs_and_outputs() {
        let io = |a: &str| BankIo { address: a.into(), coins: vec![] };
        let msg = CosmosMsg::Bank(BankMsg::MultiSend(MsgMultiSend {
            inputs: vec![io("a")],
            outputs: vec![io("b"), io("c")],
        }));
        let info = BankHandler::new().handle(&msg);
        assert_eq!(info.msg_type(), "multisend");
        assert_eq!(info.addrs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_foreign_module_is_ignored() {
        let msg = CosmosMsg::Slashing(Default::default());
        assert_eq!(BankHandler::new().handle(&msg), MsgDocInfo::default());
    }
}
