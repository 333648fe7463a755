use crate::error::ValidationError;
use crate::model::request::{Plan, ProvisioningRequest};
use crate::store::RecordStore;

/// Check a provisioning request before any network call is made.
///
/// Order of checks: required fields, allowed plan, partner credentials,
/// then a single schema probe against the record store. Returns the
/// parsed plan so later stages use the typed value.
pub async fn validate_request<S: RecordStore>(
    request: &ProvisioningRequest,
    store: &S,
) -> Result<Plan, ValidationError> {
    if request.plan.trim().is_empty() {
        return Err(ValidationError::MissingField("plan"));
    }
    if request.site_url.trim().is_empty() {
        return Err(ValidationError::MissingField("site url"));
    }
    if request.local_user.trim().is_empty() {
        return Err(ValidationError::MissingField("local user"));
    }
    if request.order_id.trim().is_empty() {
        return Err(ValidationError::MissingField("order id"));
    }

    let plan = Plan::from_input(&request.plan)
        .ok_or_else(|| ValidationError::UnknownPlan(request.plan.clone()))?;

    if request.client_id.trim().is_empty() || request.client_secret.trim().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }

    match store.detail_field_exists().await {
        Ok(true) => Ok(plan),
        _ => Err(ValidationError::MisconfiguredStore),
    }
}
