use crate::api::read_body;
use crate::error::ProvisionError;
use crate::model::outcome::AccessToken;
use crate::utils::constants::{GRANT_CLIENT_CREDENTIALS, SCOPE_JETPACK_PARTNER};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error};

/// Exchanges partner client credentials for a short-lived bearer token
/// via the OAuth2 client-credentials grant.
///
/// One network attempt per call; the token is not cached or reused
/// between create and cancel operations.
#[derive(Debug, Clone)]
pub struct TokenProvider {
    pub url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

impl TokenProvider {
    pub fn new(url: impl Into<String>, client: Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub async fn fetch_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<AccessToken, ProvisionError> {
        let mut form = HashMap::new();
        form.insert("client_id", client_id);
        form.insert("client_secret", client_secret);
        form.insert("grant_type", GRANT_CLIENT_CREDENTIALS);
        form.insert("scope", SCOPE_JETPACK_PARTNER);

        debug!("fetching partner access token from {}", self.url);
        let response = self.client.post(&self.url).form(&form).send().await?;
        let (status, body) = read_body(response).await?;

        if status.as_u16() >= 400 {
            error!("token request failed: status={} body='{}'", status, body);
            return Err(ProvisionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let token = serde_json::from_str::<TokenResponse>(&body)
            .ok()
            .and_then(|parsed| parsed.access_token)
            .filter(|value| !value.is_empty());

        match token {
            Some(value) => Ok(AccessToken::new(value)),
            None => {
                error!("token response carried no access_token: body='{}'", body);
                Err(ProvisionError::AuthorizationFailed)
            }
        }
    }
}
