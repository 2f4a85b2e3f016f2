//! Typed Cosmos SDK and IBC messages.
//!
//! Every decoded message carries its module tag (`CosmosMsg::route`) next to
//! the payload, so the router never has to inspect type URLs at dispatch time.
//! Field tags mirror the upstream protobuf definitions; fields the indexer has
//! no use for (proofs, public keys) are left out and skipped by prost on decode.

use prost::Message;
use serde::Serialize;

pub const BANK_ROUTE: &str = "bank";
pub const STAKING_ROUTE: &str = "staking";
pub const DISTRIBUTION_ROUTE: &str = "distribution";
pub const GOV_ROUTE: &str = "gov";
pub const SLASHING_ROUTE: &str = "slashing";
pub const CRISIS_ROUTE: &str = "crisis";
pub const EVIDENCE_ROUTE: &str = "evidence";
pub const FEEGRANT_ROUTE: &str = "feegrant";
pub const IBC_ROUTE: &str = "ibc";
pub const IBC_TRANSFER_ROUTE: &str = "transfer";

pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const MSG_MULTI_SEND: &str = "/cosmos.bank.v1beta1.MsgMultiSend";
pub const MSG_CREATE_VALIDATOR: &str = "/cosmos.staking.v1beta1.MsgCreateValidator";
pub const MSG_EDIT_VALIDATOR: &str = "/cosmos.staking.v1beta1.MsgEditValidator";
pub const MSG_DELEGATE: &str = "/cosmos.staking.v1beta1.MsgDelegate";
pub const MSG_UNDELEGATE: &str = "/cosmos.staking.v1beta1.MsgUndelegate";
pub const MSG_BEGIN_REDELEGATE: &str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";
pub const MSG_SET_WITHDRAW_ADDRESS: &str = "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress";
pub const MSG_WITHDRAW_DELEGATOR_REWARD: &str =
    "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";
pub const MSG_WITHDRAW_VALIDATOR_COMMISSION: &str =
    "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission";
pub const MSG_FUND_COMMUNITY_POOL: &str = "/cosmos.distribution.v1beta1.MsgFundCommunityPool";
pub const MSG_SUBMIT_PROPOSAL: &str = "/cosmos.gov.v1beta1.MsgSubmitProposal";
pub const MSG_VOTE: &str = "/cosmos.gov.v1beta1.MsgVote";
pub const MSG_DEPOSIT: &str = "/cosmos.gov.v1beta1.MsgDeposit";
pub const MSG_UNJAIL: &str = "/cosmos.slashing.v1beta1.MsgUnjail";
pub const MSG_VERIFY_INVARIANT: &str = "/cosmos.crisis.v1beta1.MsgVerifyInvariant";
pub const MSG_SUBMIT_EVIDENCE: &str = "/cosmos.evidence.v1beta1.MsgSubmitEvidence";
pub const MSG_GRANT_ALLOWANCE: &str = "/cosmos.feegrant.v1beta1.MsgGrantAllowance";
pub const MSG_REVOKE_ALLOWANCE: &str = "/cosmos.feegrant.v1beta1.MsgRevokeAllowance";
pub const MSG_TRANSFER: &str = "/ibc.applications.transfer.v1.MsgTransfer";
pub const MSG_UPDATE_CLIENT: &str = "/ibc.core.client.v1.MsgUpdateClient";
pub const MSG_RECV_PACKET: &str = "/ibc.core.channel.v1.MsgRecvPacket";
pub const MSG_ACKNOWLEDGEMENT: &str = "/ibc.core.channel.v1.MsgAcknowledgement";
pub const MSG_TIMEOUT: &str = "/ibc.core.channel.v1.MsgTimeout";

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct Any {
    #[prost(string, tag = "1")]
    pub type_url: String,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(serialize_with = "hex::serde::serialize")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct TxRaw {
    #[prost(bytes = "vec", tag = "1")]
    pub body_bytes: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub auth_info_bytes: Vec<u8>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    pub signatures: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct TxBody {
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<Any>,
    #[prost(string, tag = "2")]
    pub memo: String,
    #[prost(uint64, tag = "3")]
    pub timeout_height: u64,
}

#[derive(Clone, PartialEq, Message)]
pub struct AuthInfo {
    #[prost(message, optional, tag = "2")]
    pub fee: Option<ProtoFee>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ProtoFee {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    #[prost(uint64, tag = "2")]
    pub gas_limit: u64,
    #[prost(string, tag = "3")]
    pub payer: String,
    #[prost(string, tag = "4")]
    pub granter: String,
}

#[derive(Clone, PartialEq, Eq, Message, Serialize)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

// ---------------------------------------------------------------------------
// bank
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgSend {
    #[prost(string, tag = "1")]
    pub from_address: String,
    #[prost(string, tag = "2")]
    pub to_address: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct BankIo {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, repeated, tag = "2")]
    pub coins: Vec<Coin>,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgMultiSend {
    #[prost(message, repeated, tag = "1")]
    pub inputs: Vec<BankIo>,
    #[prost(message, repeated, tag = "2")]
    pub outputs: Vec<BankIo>,
}

// ---------------------------------------------------------------------------
// staking
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct Description {
    #[prost(string, tag = "1")]
    pub moniker: String,
    #[prost(string, tag = "2")]
    pub identity: String,
    #[prost(string, tag = "3")]
    pub website: String,
    #[prost(string, tag = "4")]
    pub security_contact: String,
    #[prost(string, tag = "5")]
    pub details: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct CommissionRates {
    #[prost(string, tag = "1")]
    pub rate: String,
    #[prost(string, tag = "2")]
    pub max_rate: String,
    #[prost(string, tag = "3")]
    pub max_change_rate: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgCreateValidator {
    #[prost(message, optional, tag = "1")]
    pub description: Option<Description>,
    #[prost(message, optional, tag = "2")]
    pub commission: Option<CommissionRates>,
    #[prost(string, tag = "3")]
    pub min_self_delegation: String,
    #[prost(string, tag = "4")]
    pub delegator_address: String,
    #[prost(string, tag = "5")]
    pub validator_address: String,
    #[prost(message, optional, tag = "7")]
    pub value: Option<Coin>,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgEditValidator {
    #[prost(message, optional, tag = "1")]
    pub description: Option<Description>,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(string, tag = "3")]
    pub commission_rate: String,
    #[prost(string, tag = "4")]
    pub min_self_delegation: String,
}

/// Shared shape of `MsgDelegate` and `MsgUndelegate`.
#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgDelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(message, optional, tag = "3")]
    pub amount: Option<Coin>,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgBeginRedelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_src_address: String,
    #[prost(string, tag = "3")]
    pub validator_dst_address: String,
    #[prost(message, optional, tag = "4")]
    pub amount: Option<Coin>,
}

// ---------------------------------------------------------------------------
// distribution
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgSetWithdrawAddress {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub withdraw_address: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgWithdrawDelegatorReward {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgWithdrawValidatorCommission {
    #[prost(string, tag = "1")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgFundCommunityPool {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    #[prost(string, tag = "2")]
    pub depositor: String,
}

// ---------------------------------------------------------------------------
// gov
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgSubmitProposal {
    #[prost(message, optional, tag = "1")]
    pub content: Option<Any>,
    #[prost(message, repeated, tag = "2")]
    pub initial_deposit: Vec<Coin>,
    #[prost(string, tag = "3")]
    pub proposer: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgVote {
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub voter: String,
    #[prost(int32, tag = "3")]
    pub option: i32,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgDeposit {
    #[prost(uint64, tag = "1")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub depositor: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

// ---------------------------------------------------------------------------
// slashing / crisis / evidence / feegrant
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgUnjail {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgVerifyInvariant {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(string, tag = "2")]
    pub invariant_module_name: String,
    #[prost(string, tag = "3")]
    pub invariant_route: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgSubmitEvidence {
    #[prost(string, tag = "1")]
    pub submitter: String,
    #[prost(message, optional, tag = "2")]
    pub evidence: Option<Any>,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgGrantAllowance {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(string, tag = "2")]
    pub grantee: String,
    #[prost(message, optional, tag = "3")]
    pub allowance: Option<Any>,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgRevokeAllowance {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(string, tag = "2")]
    pub grantee: String,
}

// ---------------------------------------------------------------------------
// ibc
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct IbcHeight {
    #[prost(uint64, tag = "1")]
    pub revision_number: u64,
    #[prost(uint64, tag = "2")]
    pub revision_height: u64,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgTransfer {
    #[prost(string, tag = "1")]
    pub source_port: String,
    #[prost(string, tag = "2")]
    pub source_channel: String,
    #[prost(message, optional, tag = "3")]
    pub token: Option<Coin>,
    #[prost(string, tag = "4")]
    pub sender: String,
    #[prost(string, tag = "5")]
    pub receiver: String,
    #[prost(message, optional, tag = "6")]
    pub timeout_height: Option<IbcHeight>,
    #[prost(uint64, tag = "7")]
    pub timeout_timestamp: u64,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct Packet {
    #[prost(uint64, tag = "1")]
    pub sequence: u64,
    #[prost(string, tag = "2")]
    pub source_port: String,
    #[prost(string, tag = "3")]
    pub source_channel: String,
    #[prost(string, tag = "4")]
    pub destination_port: String,
    #[prost(string, tag = "5")]
    pub destination_channel: String,
    #[prost(bytes = "vec", tag = "6")]
    #[serde(serialize_with = "hex::serde::serialize")]
    pub data: Vec<u8>,
    #[prost(message, optional, tag = "7")]
    pub timeout_height: Option<IbcHeight>,
    #[prost(uint64, tag = "8")]
    pub timeout_timestamp: u64,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgUpdateClient {
    #[prost(string, tag = "1")]
    pub client_id: String,
    #[prost(string, tag = "3")]
    pub signer: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgRecvPacket {
    #[prost(message, optional, tag = "1")]
    pub packet: Option<Packet>,
    #[prost(message, optional, tag = "3")]
    pub proof_height: Option<IbcHeight>,
    #[prost(string, tag = "4")]
    pub signer: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgAcknowledgement {
    #[prost(message, optional, tag = "1")]
    pub packet: Option<Packet>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(serialize_with = "hex::serde::serialize")]
    pub acknowledgement: Vec<u8>,
    #[prost(message, optional, tag = "4")]
    pub proof_height: Option<IbcHeight>,
    #[prost(string, tag = "5")]
    pub signer: String,
}

#[derive(Clone, PartialEq, Message, Serialize)]
pub struct MsgTimeout {
    #[prost(message, optional, tag = "1")]
    pub packet: Option<Packet>,
    #[prost(message, optional, tag = "3")]
    pub proof_height: Option<IbcHeight>,
    #[prost(uint64, tag = "4")]
    pub next_sequence_recv: u64,
    #[prost(string, tag = "5")]
    pub signer: String,
}

/// ICS-20 packet payload, JSON encoded inside `Packet::data`.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct FungibleTokenPacketData {
    pub denom: String,
    pub amount: String,
    pub sender: String,
    pub receiver: String,
}

impl Packet {
    /// Decodes the ICS-20 payload, if the packet carries one.
    pub fn token_data(&self) -> Option<FungibleTokenPacketData> {
        serde_json::from_slice(&self.data).ok()
    }
}

// ---------------------------------------------------------------------------
// Module-tagged message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BankMsg {
    Send(MsgSend),
    MultiSend(MsgMultiSend),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StakingMsg {
    CreateValidator(MsgCreateValidator),
    EditValidator(MsgEditValidator),
    Delegate(MsgDelegate),
    Undelegate(MsgDelegate),
    BeginRedelegate(MsgBeginRedelegate),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DistributionMsg {
    SetWithdrawAddress(MsgSetWithdrawAddress),
    WithdrawDelegatorReward(MsgWithdrawDelegatorReward),
    WithdrawValidatorCommission(MsgWithdrawValidatorCommission),
    FundCommunityPool(MsgFundCommunityPool),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GovMsg {
    SubmitProposal(MsgSubmitProposal),
    Vote(MsgVote),
    Deposit(MsgDeposit),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeegrantMsg {
    GrantAllowance(MsgGrantAllowance),
    RevokeAllowance(MsgRevokeAllowance),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IbcMsg {
    Transfer(MsgTransfer),
    UpdateClient(MsgUpdateClient),
    RecvPacket(MsgRecvPacket),
    Acknowledgement(MsgAcknowledgement),
    Timeout(MsgTimeout),
}

/// A decoded transaction message, tagged with the module that owns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CosmosMsg {
    Bank(BankMsg),
    Staking(StakingMsg),
    Distribution(DistributionMsg),
    Gov(GovMsg),
    Slashing(MsgUnjail),
    Crisis(MsgVerifyInvariant),
    Evidence(MsgSubmitEvidence),
    Feegrant(FeegrantMsg),
    Ibc(IbcMsg),
    /// A message type this indexer has no typed model for.
    Unknown(Any),
}

impl CosmosMsg {
    /// Decodes an `Any` into its typed message. Unrecognized type URLs are
    /// kept as `CosmosMsg::Unknown`; a recognized URL with a body that does
    /// not decode is an error.
    pub fn from_any(any: Any) -> Result<Self, prost::DecodeError> {
        let v = any.value.as_slice();
        let msg = match any.type_url.as_str() {
            MSG_SEND => Self::Bank(BankMsg::Send(MsgSend::decode(v)?)),
            MSG_MULTI_SEND => Self::Bank(BankMsg::MultiSend(MsgMultiSend::decode(v)?)),
            MSG_CREATE_VALIDATOR => {
                Self::Staking(StakingMsg::CreateValidator(MsgCreateValidator::decode(v)?))
            }
            MSG_EDIT_VALIDATOR => {
                Self::Staking(StakingMsg::EditValidator(MsgEditValidator::decode(v)?))
            }
            MSG_DELEGATE => Self::Staking(StakingMsg::Delegate(MsgDelegate::decode(v)?)),
            MSG_UNDELEGATE => Self::Staking(StakingMsg::Undelegate(MsgDelegate::decode(v)?)),
            MSG_BEGIN_REDELEGATE => {
                Self::Staking(StakingMsg::BeginRedelegate(MsgBeginRedelegate::decode(v)?))
            }
            MSG_SET_WITHDRAW_ADDRESS => Self::Distribution(DistributionMsg::SetWithdrawAddress(
                MsgSetWithdrawAddress::decode(v)?,
            )),
            MSG_WITHDRAW_DELEGATOR_REWARD => Self::Distribution(
                DistributionMsg::WithdrawDelegatorReward(MsgWithdrawDelegatorReward::decode(v)?),
            ),
            MSG_WITHDRAW_VALIDATOR_COMMISSION => {
                Self::Distribution(DistributionMsg::WithdrawValidatorCommission(
                    MsgWithdrawValidatorCommission::decode(v)?,
                ))
            }
            MSG_FUND_COMMUNITY_POOL => Self::Distribution(DistributionMsg::FundCommunityPool(
                MsgFundCommunityPool::decode(v)?,
            )),
            MSG_SUBMIT_PROPOSAL => Self::Gov(GovMsg::SubmitProposal(MsgSubmitProposal::decode(v)?)),
            MSG_VOTE => Self::Gov(GovMsg::Vote(MsgVote::decode(v)?)),
            MSG_DEPOSIT => Self::Gov(GovMsg::Deposit(MsgDeposit::decode(v)?)),
            MSG_UNJAIL => Self::Slashing(MsgUnjail::decode(v)?),
            MSG_VERIFY_INVARIANT => Self::Crisis(MsgVerifyInvariant::decode(v)?),
            MSG_SUBMIT_EVIDENCE => Self::Evidence(MsgSubmitEvidence::decode(v)?),
            MSG_GRANT_ALLOWANCE => {
                Self::Feegrant(FeegrantMsg::GrantAllowance(MsgGrantAllowance::decode(v)?))
            }
            MSG_REVOKE_ALLOWANCE => {
                Self::Feegrant(FeegrantMsg::RevokeAllowance(MsgRevokeAllowance::decode(v)?))
            }
            MSG_TRANSFER => Self::Ibc(IbcMsg::Transfer(MsgTransfer::decode(v)?)),
            MSG_UPDATE_CLIENT => Self::Ibc(IbcMsg::UpdateClient(MsgUpdateClient::decode(v)?)),
            MSG_RECV_PACKET => Self::Ibc(IbcMsg::RecvPacket(MsgRecvPacket::decode(v)?)),
            MSG_ACKNOWLEDGEMENT => {
                Self::Ibc(IbcMsg::Acknowledgement(MsgAcknowledgement::decode(v)?))
            }
            MSG_TIMEOUT => Self::Ibc(IbcMsg::Timeout(MsgTimeout::decode(v)?)),
            _ => Self::Unknown(any),
        };
        Ok(msg)
    }

    /// Module key used to look up the handler for this message.
    pub fn route(&self) -> &str {
        match self {
            Self::Bank(_) => BANK_ROUTE,
            Self::Staking(_) => STAKING_ROUTE,
            Self::Distribution(_) => DISTRIBUTION_ROUTE,
            Self::Gov(_) => GOV_ROUTE,
            Self::Slashing(_) => SLASHING_ROUTE,
            Self::Crisis(_) => CRISIS_ROUTE,
            Self::Evidence(_) => EVIDENCE_ROUTE,
            Self::Feegrant(_) => FEEGRANT_ROUTE,
            Self::Ibc(IbcMsg::Transfer(_)) => IBC_TRANSFER_ROUTE,
            Self::Ibc(_) => IBC_ROUTE,
            Self::Unknown(any) => module_of_type_url(&any.type_url),
        }
    }

    /// Addresses that must sign this message.
    pub fn signers(&self) -> Vec<String> {
        let signer = match self {
            Self::Bank(BankMsg::Send(m)) => &m.from_address,
            Self::Bank(BankMsg::MultiSend(m)) => {
                return m.inputs.iter().map(|i| i.address.clone()).collect();
            }
            Self::Staking(StakingMsg::CreateValidator(m)) => &m.delegator_address,
            Self::Staking(StakingMsg::EditValidator(m)) => &m.validator_address,
            Self::Staking(StakingMsg::Delegate(m) | StakingMsg::Undelegate(m)) => {
                &m.delegator_address
            }
            Self::Staking(StakingMsg::BeginRedelegate(m)) => &m.delegator_address,
            Self::Distribution(DistributionMsg::SetWithdrawAddress(m)) => &m.delegator_address,
            Self::Distribution(DistributionMsg::WithdrawDelegatorReward(m)) => &m.delegator_address,
            Self::Distribution(DistributionMsg::WithdrawValidatorCommission(m)) => {
                &m.validator_address
            }
            Self::Distribution(DistributionMsg::FundCommunityPool(m)) => &m.depositor,
            Self::Gov(GovMsg::SubmitProposal(m)) => &m.proposer,
            Self::Gov(GovMsg::Vote(m)) => &m.voter,
            Self::Gov(GovMsg::Deposit(m)) => &m.depositor,
            Self::Slashing(m) => &m.validator_addr,
            Self::Crisis(m) => &m.sender,
            Self::Evidence(m) => &m.submitter,
            Self::Feegrant(FeegrantMsg::GrantAllowance(m)) => &m.granter,
            Self::Feegrant(FeegrantMsg::RevokeAllowance(m)) => &m.granter,
            Self::Ibc(IbcMsg::Transfer(m)) => &m.sender,
            Self::Ibc(IbcMsg::UpdateClient(m)) => &m.signer,
            Self::Ibc(IbcMsg::RecvPacket(m)) => &m.signer,
            Self::Ibc(IbcMsg::Acknowledgement(m)) => &m.signer,
            Self::Ibc(IbcMsg::Timeout(m)) => &m.signer,
            Self::Unknown(_) => return Vec::new(),
        };
        vec![signer.clone()]
    }
}

/// "/cosmos.bank.v1beta1.MsgSend" -> "bank",
/// "/ibc.applications.transfer.v1.MsgTransfer" -> "transfer",
/// "/ibc.core.channel.v1.MsgRecvPacket" -> "ibc".
pub fn module_of_type_url(type_url: &str) -> &str {
    let mut parts = type_url.trim_start_matches('/').split('.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("ibc"), Some("applications"), Some(app)) => app,
        (Some("ibc"), _, _) => IBC_ROUTE,
        (Some(_), Some(module), _) => module,
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any<M: Message>(type_url: &str, msg: &M) -> Any {
        Any {
            type_url: type_url.to_string(),
            value: msg.encode_to_vec(),
        }
    }

    #[test]
    fn test_module_of_type_url() {
        assert_eq!(module_of_type_url(MSG_SEND), "bank");
        assert_eq!(module_of_type_url(MSG_TRANSFER), "transfer");
        assert_eq!(module_of_type_url(MSG_RECV_PACKET), "ibc");
        assert_eq!(module_of_type_url("/cosmos.authz.v1beta1.MsgExec"), "authz");
        assert_eq!(module_of_type_url(""), "");
    }

    #[test]
    fn test_from_any_send() {
        let send = MsgSend {
            from_address: "cosmos1from".into(),
            to_address: "cosmos1to".into(),
            amount: vec![Coin { denom: "uatom".into(), amount: "5".into() }],
        };
        let msg = CosmosMsg::from_any(any(MSG_SEND, &send)).unwrap();
        assert_eq!(msg, CosmosMsg::Bank(BankMsg::Send(send)));
        assert_eq!(msg.route(), "bank");
        assert_eq!(msg.signers(), vec!["cosmos1from".to_string()]);
    }

    #[test]
    fn test_from_any_unknown_keeps_envelope() {
        let raw = Any { type_url: "/cosmos.authz.v1beta1.MsgExec".into(), value: vec![1, 2] };
        let msg = CosmosMsg::from_any(raw.clone()).unwrap();
        assert_eq!(msg, CosmosMsg::Unknown(raw));
        assert_eq!(msg.route(), "authz");
        assert!(msg.signers().is_empty());
    }

    #[test]
    fn test_from_any_rejects_corrupt_body() {
        let raw = Any { type_url: MSG_SEND.into(), value: vec![0x0a, 0xff] };
        assert!(CosmosMsg::from_any(raw).is_err());
    }

    #[test]
    fn test_transfer_routes_separately_from_core_ibc() {
        let transfer = CosmosMsg::Ibc(IbcMsg::Transfer(MsgTransfer::default()));
        let update = CosmosMsg::Ibc(IbcMsg::UpdateClient(MsgUpdateClient::default()));
        assert_eq!(transfer.route(), "transfer");
        assert_eq!(update.route(), "ibc");
    }

    #[test]
    fn test_from_any_submit_evidence() {
        let submit = MsgSubmitEvidence {
            submitter: "cosmos1submitter".into(),
            evidence: Some(Any {
                type_url: "/cosmos.evidence.v1beta1.Equivocation".into(),
                value: vec![8, 1],
            }),
        };
        let msg = CosmosMsg::from_any(any(MSG_SUBMIT_EVIDENCE, &submit)).unwrap();
        assert_eq!(msg, CosmosMsg::Evidence(submit));
        assert_eq!(msg.route(), "evidence");
        assert_eq!(msg.signers(), vec!["cosmos1submitter".to_string()]);
    }

    #[test]
    fn test_multisend_signers_are_inputs() {
        let msg = CosmosMsg::Bank(BankMsg::MultiSend(MsgMultiSend {
            inputs: vec![
                BankIo { address: "a".into(), coins: vec![] },
                BankIo { address: "b".into(), coins: vec![] },
            ],
            outputs: vec![BankIo { address: "c".into(), coins: vec![] }],
        }));
        assert_eq!(msg.signers(), vec!["a".to_string(), "b".to_string()]);
    }
}
