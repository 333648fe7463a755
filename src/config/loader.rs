use crate::config::settings::{LogFormat, LoggingConfig, ServiceConfig};
use crate::config::validator::validate_service_config;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Load and validate config from YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config '{}'", path.as_ref().display()))?;
    let mut config: ServiceConfig = serde_yaml::from_str(&raw)?;

    // Apply defaults
    if config.settings.logging.is_none() {
        config.settings.logging = Some(LoggingConfig {
            level: "info".into(),
            format: LogFormat::Compact,
        });
    }

    if let Err(errors) = validate_service_config(&config) {
        bail!(
            "config is not valid, total errors: {}\n{}",
            errors.len(),
            errors.join("\n")
        );
    }

    Ok(config)
}
