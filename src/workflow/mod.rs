//! The end-to-end provisioning pipeline.
//!
//! Per invocation: validate -> fetch token -> create/cancel -> record
//! (create path only). Stateless between invocations; no retries — any
//! stage failure aborts the rest of the pipeline and surfaces to the
//! caller.

use crate::api::{ProvisioningClient, TokenProvider};
use crate::config::settings::EndpointsConfig;
use crate::error::WorkflowError;
use crate::model::outcome::ProvisioningOutcome;
use crate::model::request::ProvisioningRequest;
use crate::store::RecordStore;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub mod recorder;
pub mod validate;

use validate::validate_request;

pub struct Provisioner<S> {
    token_provider: TokenProvider,
    api: ProvisioningClient,
    store: S,
}

impl<S: RecordStore> Provisioner<S> {
    /// Build the pipeline around one shared HTTP client with a bounded
    /// request timeout.
    pub fn new(endpoints: &EndpointsConfig, timeout: Duration, store: S) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            token_provider: TokenProvider::new(endpoints.oauth_url.clone(), client.clone()),
            api: ProvisioningClient::new(endpoints.api_base_url.clone(), client),
            store,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Provision a plan for the order and record the outcome.
    pub async fn provision(
        &self,
        request: &ProvisioningRequest,
    ) -> Result<ProvisioningOutcome, WorkflowError> {
        info!(
            "provisioning order '{}' for site {}",
            request.order_id, request.site_url
        );
        let plan = validate_request(request, &self.store).await?;
        let token = self
            .token_provider
            .fetch_token(&request.client_id, &request.client_secret)
            .await?;
        let outcome = self
            .api
            .create(&token, plan, &request.site_url, &request.local_user)
            .await?;
        recorder::record(&self.store, &request.order_id, &request.site_url, &outcome).await?;
        Ok(outcome)
    }

    /// Cancel the plan held by the order's site. Nothing is recorded on
    /// the cancel path.
    pub async fn cancel(&self, request: &ProvisioningRequest) -> Result<(), WorkflowError> {
        info!(
            "cancelling order '{}' for site {}",
            request.order_id, request.site_url
        );
        validate_request(request, &self.store).await?;
        let token = self
            .token_provider
            .fetch_token(&request.client_id, &request.client_secret)
            .await?;
        self.api.cancel(&token, &request.site_url).await?;
        Ok(())
    }
}
