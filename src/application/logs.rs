//! Best-effort decoding of ABCI execution logs.
//!
//! Successful transactions carry a JSON log of the form
//! `[{"msg_index":0,"log":"","events":[{"type":..,"attributes":[..]}]}]`.
//! Failed ones usually carry a plain-text error. Anything that is not one of
//! the accepted JSON shapes decodes to no events.

use serde::Deserialize;

use crate::domain::Event;

// `events` is required so that a bare event list never matches this shape.
#[derive(Debug, Deserialize)]
struct AbciMessageLog {
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AbciLogs {
    Messages(Vec<AbciMessageLog>),
    Events(Vec<Event>),
}

fn try_parse_abci_logs(raw: &str) -> Result<Vec<Event>, serde_json::Error> {
    let logs: AbciLogs = serde_json::from_str(raw)?;
    Ok(match logs {
        AbciLogs::Messages(messages) => messages.into_iter().flat_map(|m| m.events).collect(),
        AbciLogs::Events(events) => events,
    })
}

/// Decodes `raw` into events, in log order. Never fails: malformed input
/// yields an empty list.
pub fn parse_abci_logs(raw: &str) -> Vec<Event> {
    try_parse_abci_logs(raw).unwrap_or_default()
}
