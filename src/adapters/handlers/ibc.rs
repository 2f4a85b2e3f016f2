//! IBC handler, registered under both the `ibc` (core) and `transfer`
//! (ICS-20 application) routes.
//!
//! Packet messages also index the sender and receiver of the fungible token
//! transfer they carry, when the packet data is ICS-20 JSON.

use crate::{
    application::{MsgDocInfo, MsgHandler},
    domain::{
        msgs::{IbcMsg, Packet},
        CosmosMsg,
    },
};

pub const MSG_TYPE_TRANSFER: &str = "transfer";
pub const MSG_TYPE_UPDATE_CLIENT: &str = "update_client";
pub const MSG_TYPE_RECV_PACKET: &str = "recv_packet";
pub const MSG_TYPE_ACKNOWLEDGE_PACKET: &str = "acknowledge_packet";
pub const MSG_TYPE_TIMEOUT_PACKET: &str = "timeout_packet";

#[derive(Debug, Default)]
pub struct IbcHandler;

impl IbcHandler {
    pub fn new() -> Self {
        Self
    }

    fn packet_addrs(signer: &str, packet: Option<&Packet>) -> Vec<String> {
        let mut addrs = vec![signer.to_string()];
        if let Some(data) = packet.and_then(Packet::token_data) {
            addrs.push(data.sender);
            addrs.push(data.receiver);
        }
        addrs
    }
}

impl MsgHandler for IbcHandler {
    fn name(&self) -> &str {
        "IbcHandler"
    }

    fn handle(&self, msg: &CosmosMsg) -> MsgDocInfo {
        let CosmosMsg::Ibc(ibc) = msg else {
            return MsgDocInfo::default();
        };

        match ibc {
            IbcMsg::Transfer(m) => MsgDocInfo::new(
                MSG_TYPE_TRANSFER,
                msg,
                vec![m.sender.clone(), m.receiver.clone()],
            ),
            IbcMsg::UpdateClient(m) => {
                MsgDocInfo::new(MSG_TYPE_UPDATE_CLIENT, msg, vec![m.signer.clone()])
            }
            IbcMsg::RecvPacket(m) => MsgDocInfo::new(
                MSG_TYPE_RECV_PACKET,
                msg,
                Self::packet_addrs(&m.signer, m.packet.as_ref()),
            ),
            IbcMsg::Acknowledgement(m) => MsgDocInfo::new(
                MSG_TYPE_ACKNOWLEDGE_PACKET,
                msg,
                Self::packet_addrs(&m.signer, m.packet.as_ref()),
            ),
            IbcMsg::Timeout(m) => MsgDocInfo::new(
                MSG_TYPE_TIMEOUT_PACKET,
                msg,
                Self::packet_addrs(&m.signer, m.packet.as_ref()),
            ),
        }
    }
}
