use serde::{Deserialize, Serialize};

/// Plans a partner account is allowed to provision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Personal,
    Premium,
    Professional,
}

impl Plan {
    /// Parse user input, case-insensitively. Returns `None` for anything
    /// outside the allowed set.
    pub fn from_input(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "free" => Some(Plan::Free),
            "personal" => Some(Plan::Personal),
            "premium" => Some(Plan::Premium),
            "professional" => Some(Plan::Professional),
            _ => None,
        }
    }

    /// Lower-case wire form expected by the provisioning endpoint.
    pub fn as_str(&self) -> &'static str {
        match *self {
            Plan::Free => "free",
            Plan::Personal => "personal",
            Plan::Premium => "premium",
            Plan::Professional => "professional",
        }
    }
}

/// One provisioning (or cancellation) order as supplied by the
/// surrounding order-management system.
///
/// `plan` is kept as the raw input string; validation parses it into a
/// [`Plan`] so that unknown values are reported instead of rejected at
/// the type boundary.
#[derive(Clone)]
pub struct ProvisioningRequest {
    pub plan: String,
    pub site_url: String,
    pub local_user: String,
    pub order_id: String,
    pub client_id: String,
    pub client_secret: String,
}

// client_secret must not leak into logs
impl std::fmt::Debug for ProvisioningRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisioningRequest")
            .field("plan", &self.plan)
            .field("site_url", &self.site_url)
            .field("local_user", &self.local_user)
            .field("order_id", &self.order_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}
