//! Shared constants and invariants

// OAuth client-credentials grant
pub const GRANT_CLIENT_CREDENTIALS: &str = "client_credentials";
pub const SCOPE_JETPACK_PARTNER: &str = "jetpack-partner";
