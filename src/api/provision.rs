use crate::api::read_body;
use crate::error::ProvisionError;
use crate::model::outcome::{AccessToken, ProvisioningOutcome};
use crate::model::request::Plan;
use http::StatusCode;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Bearer-authenticated client for the plan-management API: issues the
/// create-provisioning and partner-cancel calls and interprets their
/// responses. Outbound HTTPS only; no local mutation.
#[derive(Debug, Clone)]
pub struct ProvisioningClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    plan: Plan,
    siteurl: &'a str,
    local_user: &'a str,
    force_register: bool,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    next_url: Option<String>,
    #[serde(default)]
    auth_required: bool,
}

#[derive(Debug, Deserialize)]
struct CancelResponse {
    #[serde(default)]
    success: bool,
}

impl ProvisioningClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Provision a plan for `site_url` on behalf of the partner.
    pub async fn create(
        &self,
        token: &AccessToken,
        plan: Plan,
        site_url: &str,
        local_user: &str,
    ) -> Result<ProvisioningOutcome, ProvisionError> {
        let url = format!("{}/jpphp/provision", self.base_url);
        let request = CreateRequest {
            plan,
            siteurl: site_url,
            local_user,
            force_register: true,
        };

        debug!("provision POST {} plan={}", url, plan.as_str());
        let response = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(&request)
            .send()
            .await?;

        let (status, body) = read_body(response).await?;
        let parsed: CreateResponse = self.interpret(status, body)?;

        match parsed.next_url {
            Some(next_url) if !next_url.is_empty() => {
                info!("plan {} activated for {}", plan.as_str(), site_url);
                Ok(ProvisioningOutcome::Activated { next_url })
            }
            _ if parsed.auth_required => {
                info!(
                    "plan {} allocated for {}, waiting for DNS resolution",
                    plan.as_str(),
                    site_url
                );
                Ok(ProvisioningOutcome::PendingDnsResolution)
            }
            _ => Ok(ProvisioningOutcome::Completed),
        }
    }

    /// Cancel the plan held by `site_url`. The site url becomes a single
    /// path segment with every `/` replaced by `::`.
    pub async fn cancel(&self, token: &AccessToken, site_url: &str) -> Result<(), ProvisionError> {
        let segment = site_url.replace('/', "::");
        let url = format!("{}/jpphp/{}/partner-cancel", self.base_url, segment);

        debug!("cancel POST {}", url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(token.as_str())
            .send()
            .await?;

        let (status, body) = read_body(response).await?;
        let _: CancelResponse = self.interpret(status, body)?;
        info!("plan cancelled for {}", site_url);
        Ok(())
    }

    /// Shared response interpretation: any status >= 400, an empty body,
    /// or `success != true` is an API failure carrying the raw
    /// status/body; a body that is not JSON at all is a transport-level
    /// failure.
    fn interpret<T>(&self, status: StatusCode, body: String) -> Result<T, ProvisionError>
    where
        T: serde::de::DeserializeOwned + HasSuccess,
    {
        if status.as_u16() >= 400 || body.trim().is_empty() {
            error!("api call failed: status={} body='{}'", status, body);
            return Err(ProvisionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: T = serde_json::from_str(&body).map_err(|err| {
            error!("malformed api response: {} body='{}'", err, body);
            ProvisionError::Transport(format!("malformed response body: {}", err))
        })?;

        if !parsed.success() {
            error!("api reported failure: status={} body='{}'", status, body);
            return Err(ProvisionError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(parsed)
    }
}

trait HasSuccess {
    fn success(&self) -> bool;
}

impl HasSuccess for CreateResponse {
    fn success(&self) -> bool {
        self.success
    }
}

impl HasSuccess for CancelResponse {
    fn success(&self) -> bool {
        self.success
    }
}
