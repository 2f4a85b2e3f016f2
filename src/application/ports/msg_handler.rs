use crate::domain::{CosmosMsg, DocTxMsg};

/// What a module handler extracts from one message.
///
/// An empty `addrs` means the handler did not recognize the message; the
/// transaction parser skips such messages entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MsgDocInfo {
    pub doc: Option<DocTxMsg>,
    pub addrs: Vec<String>,
}

impl MsgDocInfo {
    pub fn new(msg_type: &str, msg: &CosmosMsg, addrs: Vec<String>) -> Self {
        Self {
            doc: Some(DocTxMsg {
                msg_type: msg_type.to_string(),
                msg: msg.clone(),
            }),
            addrs,
        }
    }

    pub fn msg_type(&self) -> &str {
        self.doc.as_ref().map(|d| d.msg_type.as_str()).unwrap_or_default()
    }
}

pub trait MsgHandler: Send + Sync {
    fn handle(&self, msg: &CosmosMsg) -> MsgDocInfo;
    fn name(&self) -> &str;
}
