//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Validates endpoint URLs, the HTTP timeout, the store path,
//!   partner credential values and the logging level.

use crate::config::settings::{CredentialValue, ServiceConfig, SettingsConfig};
use tracing::info;

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);

    validate_endpoint_url("endpoints.oauth_url", &cfg.endpoints.oauth_url, &mut errors);
    validate_endpoint_url(
        "endpoints.api_base_url",
        &cfg.endpoints.api_base_url,
        &mut errors,
    );

    validate_credential_value("partner.client_id", &cfg.partner.client_id, &mut errors);
    validate_credential_value(
        "partner.client_secret",
        &cfg.partner.client_secret,
        &mut errors,
    );

    if cfg.store.path.trim().is_empty() {
        errors.push("store.path cannot be empty".to_string());
    }

    if errors.is_empty() {
        info!("config valid");
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if let Some(http) = &settings.http {
        if let Some(timeout) = http.timeout_seconds {
            if timeout == 0 {
                errors.push("settings.http.timeout_seconds must be > 0".to_string());
            }
        }
    }

    // logging level
    if let Some(logging) = &settings.logging {
        let valid = ["trace", "debug", "info", "warn", "error"];
        if !valid.contains(&logging.level.as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' invalid; allowed: {:?}",
                logging.level, valid
            ));
        }
    }
}

fn validate_endpoint_url(path: &str, url: &str, errors: &mut Vec<String>) {
    if url.trim().is_empty() {
        errors.push(format!("{}: url cannot be empty", path));
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(format!("{}: url '{}' must be http(s)", path, url));
    }
}

fn validate_credential_value(path: &str, value: &CredentialValue, errors: &mut Vec<String>) {
    match value {
        CredentialValue::Literal { value } => {
            if value.trim().is_empty() {
                errors.push(format!("{}: literal value cannot be empty", path));
            }
        }
        CredentialValue::FromEnv { from_env } => {
            if from_env.trim().is_empty() {
                errors.push(format!("{}: env name cannot be empty", path));
            }
        }
    }
}
