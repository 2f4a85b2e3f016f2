use crate::{
    application::{MsgDocInfo, MsgHandler},
    domain::CosmosMsg,
};

pub const MSG_TYPE_SUBMIT_EVIDENCE: &str = "submit_evidence";

#[derive(Debug, Default)]
pub struct EvidenceHandler;

impl EvidenceHandler {
    pub fn new() -> Self {
        Self
    }
}

impl MsgHandler for EvidenceHandler {
    fn name(&self) -> &str {
        "EvidenceHandler"
    }

    fn handle(&self, msg: &CosmosMsg) -> MsgDocInfo {
        match msg {
            CosmosMsg::Evidence(m) => {
                MsgDocInfo::new(MSG_TYPE_SUBMIT_EVIDENCE, msg, vec![m.submitter.clone()])
            }
            _ => MsgDocInfo::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::msgs::MsgSubmitEvidence;

    #[test]
    fn test_submit_evidence() {
        let msg = CosmosMsg::Evidence(MsgSubmitEvidence {
            submitter: "submitter".into(),
            evidence: None,
        });
        let info = EvidenceHandler::new().handle(&msg);
        assert_eq!(info.msg_type(), "submit_evidence");
        assert_eq!(info.addrs, vec!["submitter"]);
    }
}
