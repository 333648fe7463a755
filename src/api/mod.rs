use crate::error::ProvisionError;
use http::StatusCode;

pub mod oauth;
pub mod provision;

pub use oauth::TokenProvider;
pub use provision::ProvisioningClient;

/// Drain a response into (status, raw body). Transport failures while
/// reading the body surface as `ProvisionError::Transport`.
pub(crate) async fn read_body(
    response: reqwest::Response,
) -> Result<(StatusCode, String), ProvisionError> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}
