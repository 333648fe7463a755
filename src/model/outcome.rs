/// Bearer token obtained from the authorization server. Fetched fresh
/// for every operation; never cached between create/cancel calls.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// Result of a successful create-provisioning call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningOutcome {
    /// The plan is active; the partner hands `next_url` to the customer
    /// to finish Jetpack activation.
    Activated { next_url: String },

    /// The plan is allocated but the site does not resolve yet. The
    /// operator reconnects the site once DNS propagates.
    PendingDnsResolution,

    /// Provisioned with nothing further to do. No record is written for
    /// this state.
    Completed,
}
