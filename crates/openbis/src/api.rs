use crate::{Error, Result, SearchRequest, SearchResult, Searchable, Updatable};
use openbis_schema::{ToWire, WireConfig};
use openbis_search::CompositeCriterion;
use serde_json::{json, Value};
use std::sync::Arc;
use tap::TapFallible;

/// Carries one JSON-RPC call to the application server.
///
/// Implementations own the HTTP framing and return the `result` member of
/// the response; a JSON-RPC `error` member should come back as `Err`.
pub trait Transport {
    fn call(&self, method: &str, params: Vec<Value>) -> anyhow::Result<Value>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn call(&self, method: &str, params: Vec<Value>) -> anyhow::Result<Value> {
        (**self).call(method, params)
    }
}

/// Typed calls against the V3 application server API of one session.
#[derive(Debug, Clone)]
pub struct ApplicationServerApi<T> {
    transport: T,
    session_token: String,
    config: WireConfig,
}

impl<T: Transport> ApplicationServerApi<T> {
    pub fn new(transport: T, session_token: impl Into<String>, config: WireConfig) -> Self {
        Self {
            transport,
            session_token: session_token.into(),
            config,
        }
    }

    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Search for entities of type `E`. Every returned entity, and every
    /// entity nested in it, is bound to (a part of) `fetch_options`.
    pub fn search<E: Searchable>(
        &self,
        criteria: &CompositeCriterion,
        fetch_options: &E::Options,
    ) -> Result<SearchResult<E>>
    where
        E::Options: ToWire,
    {
        let request = SearchRequest::<E>::new(criteria, fetch_options);
        let method = request.method();
        tracing::debug!(method, criteria = %criteria, "dispatching search");

        let response = self
            .transport
            .call(method, request.params(&self.session_token, &self.config))
            .tap_err(|e| tracing::warn!(method, error = %e, "search call failed"))
            .map_err(|e| Error::transport(method, e))?;

        let result = SearchResult::<E>::decode(&response, Arc::new(fetch_options.clone()), &self.config)
            .tap_err(|e| tracing::warn!(method, error = %e, "could not decode search result"))?;
        tracing::debug!(
            method,
            objects = result.objects().len(),
            total = result.total_count(),
            "search finished"
        );
        Ok(result)
    }

    /// Send a batch of updates as one call. Documents without changes are
    /// still sent; the server treats them as no-ops.
    pub fn update<U: Updatable>(&self, updates: &[U]) -> Result<()> {
        let method = U::UPDATE_METHOD;
        let documents = updates
            .iter()
            .map(|update| update.to_wire(&self.config))
            .collect();
        tracing::debug!(method, count = updates.len(), "dispatching update");

        self.transport
            .call(method, vec![json!(self.session_token), Value::Array(documents)])
            .tap_err(|e| tracing::warn!(method, error = %e, "update call failed"))
            .map_err(|e| Error::transport(method, e))?;
        Ok(())
    }
}
