//! Error kinds for each stage of the provisioning workflow.
//!
//! Every stage fails with its own enum so callers and tests can tell the
//! kinds apart; `WorkflowError` unifies them at the pipeline boundary.
//! Messages keep the operator-facing wording of the partner module.

use thiserror::Error;

/// Validation-time failures. No network call has been made yet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The provisioning request is missing the required field '{0}'")]
    MissingField(&'static str),

    #[error("'{0}' is not an allowed plan")]
    UnknownPlan(String),

    #[error("Your credentials for provisioning are not complete")]
    MissingCredentials,

    #[error("The provisioning details field is missing from the order record store")]
    MisconfiguredStore,
}

/// Failures while talking to the authorization or plan-management API.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("There was an issue authorizing your partner account for provisioning")]
    AuthorizationFailed,

    /// Non-success API response. Carries the raw status and body so the
    /// operator can diagnose from the log.
    #[error("Provisioning request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unable to connect: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ProvisionError {
    fn from(err: reqwest::Error) -> Self {
        ProvisionError::Transport(err.to_string())
    }
}

/// Failures while persisting provisioning details for an order.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("The provisioning details record for order '{0}' could not be located")]
    RecordMissing(String),

    #[error("Failed to persist provisioning details: {0}")]
    Io(#[from] std::io::Error),
}

/// Any stage failure. Terminal for the invocation; the caller decides
/// whether to re-invoke.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provision(#[from] ProvisionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
