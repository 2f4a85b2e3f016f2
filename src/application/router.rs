//! Module-keyed dispatch of decoded messages to their handlers.
//!
//! The router is built once at startup and only read afterwards, so a single
//! `Arc<MsgRouter>` can be shared by every block pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::{AppError, AppResult, MsgDocInfo, MsgHandler},
    domain::CosmosMsg,
};

pub struct MsgRouter {
    routes: HashMap<String, Arc<dyn MsgHandler>>,
}

impl MsgRouter {
    /// Builds the dispatch table from the `known` handlers.
    ///
    /// An empty `allow_list` registers every known module. Otherwise each key
    /// must name a known module; an unknown key is a configuration error.
    /// Blank keys are ignored, and a non-empty list that leaves no route at
    /// all falls back to the full set.
    pub fn new(
        known: Vec<(&'static str, Arc<dyn MsgHandler>)>,
        allow_list: &[String],
    ) -> AppResult<Self> {
        let full: HashMap<String, Arc<dyn MsgHandler>> = known
            .into_iter()
            .map(|(key, handler)| (key.to_string(), handler))
            .collect();

        if allow_list.is_empty() {
            return Ok(Self::with_routes(full));
        }

        let mut routes = HashMap::new();
        for key in allow_list.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
            let handler = full
                .get(key)
                .ok_or_else(|| AppError::UnknownModule(key.to_string()))?;
            routes.insert(key.to_string(), handler.clone());
        }

        if routes.is_empty() {
            // TODO: reject an allow list that resolves to no routes instead of falling back.
            tracing::warn!(
                allow_list = ?allow_list,
                "module allow list resolved to no routes, falling back to all modules"
            );
            return Ok(Self::with_routes(full));
        }

        Ok(Self::with_routes(routes))
    }

    fn with_routes(routes: HashMap<String, Arc<dyn MsgHandler>>) -> Self {
        for (key, handler) in &routes {
            tracing::debug!(module = %key, handler = handler.name(), "Registered message handler");
        }
        Self { routes }
    }

    /// Runs the handler registered for the message's module. Messages of an
    /// unregistered module yield an empty result.
    pub fn dispatch(&self, msg: &CosmosMsg) -> MsgDocInfo {
        match self.routes.get(msg.route()) {
            Some(handler) => handler.handle(msg),
            None => MsgDocInfo::default(),
        }
    }

    pub fn routes(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Splits a comma-separated module list such as `"bank,staking"`.
pub fn parse_module_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}
