//! Fetch, normalize and classify resource collections.
//!
//! # Design
//! `ListClient` holds only the `Environment` it resolves URLs against and
//! carries no state between calls. `build_list` produces the request,
//! `parse_list` classifies the response, and `fetch` runs both around a
//! `Transport` round-trip. Classification order: transport failure, then
//! non-2xx status (body ignored), then JSON decode, then envelope
//! normalization. One request per call; no retry, cache or cancellation.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::Environment;
use crate::endpoint::resolve_endpoint;
use crate::envelope::{decode_items, normalize};
use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse};
use crate::resource::{Resource, ResourceKind};
use crate::state::{ListView, ViewState};
use crate::transport::Transport;

/// Stateless list client for one backend environment.
#[derive(Debug, Clone, Default)]
pub struct ListClient {
    environment: Environment,
}

impl ListClient {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn build_list(&self, kind: ResourceKind) -> HttpRequest {
        HttpRequest {
            url: resolve_endpoint(&self.environment, kind),
            headers: Vec::new(),
        }
    }

    pub fn parse_list<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Vec<T>, FetchError> {
        check_status(&response)?;
        let body: Value =
            serde_json::from_slice(&response.body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(decode_items(normalize(body)))
    }

    /// Perform one GET for `kind` and settle it into a view-state.
    pub async fn fetch<T, X>(&self, transport: &X, kind: ResourceKind) -> ViewState<T>
    where
        T: DeserializeOwned,
        X: Transport + ?Sized,
    {
        ViewState::from(self.fetch_outcome::<T, X>(transport, kind).await)
    }

    pub async fn fetch_resource<R, X>(&self, transport: &X) -> ViewState<R>
    where
        R: Resource,
        X: Transport + ?Sized,
    {
        self.fetch(transport, R::KIND).await
    }

    /// Activate `view` and settle it with a fresh fetch of its resource.
    pub async fn load<T, X>(&self, transport: &X, view: &mut ListView<T>) -> bool
    where
        T: DeserializeOwned,
        X: Transport + ?Sized,
    {
        let activation = view.activate();
        let outcome = self.fetch_outcome(transport, view.kind()).await;
        view.settle(activation, outcome)
    }

    async fn fetch_outcome<T, X>(&self, transport: &X, kind: ResourceKind) -> Result<Vec<T>, FetchError>
    where
        T: DeserializeOwned,
        X: Transport + ?Sized,
    {
        let request = self.build_list(kind);
        tracing::debug!(resource = %kind, url = %request.url, "fetching");
        let outcome = match transport.execute(request).await {
            Ok(response) => self.parse_list(response),
            Err(e) => Err(e),
        };
        if let Err(e) = &outcome {
            tracing::warn!(resource = %kind, error = %e, detail = e.detail(), "fetch failed");
        }
        outcome
    }
}

fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if response.is_success() {
        return Ok(());
    }
    Err(FetchError::HttpStatus {
        status: response.status,
    })
}
