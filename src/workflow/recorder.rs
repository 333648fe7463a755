use crate::error::StoreError;
use crate::model::outcome::ProvisioningOutcome;
use crate::store::RecordStore;
use tracing::info;

/// Detail text persisted for an outcome, or `None` when nothing is
/// recorded (the successful-but-silent state is kept as-is).
pub fn detail_text(outcome: &ProvisioningOutcome, site_url: &str) -> Option<String> {
    match outcome {
        ProvisioningOutcome::Activated { next_url } => {
            Some(format!("URL to Activate Jetpack: {}", next_url))
        }
        ProvisioningOutcome::PendingDnsResolution => Some(format!(
            "The domain did not appear to resolve when provisioning was attempted \
             however a Jetpack plan is waiting for {}. Once DNS resolves please \
             connect the site via the Jetpack Banner in the sites dashboard",
            site_url
        )),
        ProvisioningOutcome::Completed => None,
    }
}

/// Persist the outcome of a create-provisioning call for an order.
/// Overwrites any previous detail for the same order id.
pub async fn record<S: RecordStore>(
    store: &S,
    order_id: &str,
    site_url: &str,
    outcome: &ProvisioningOutcome,
) -> Result<(), StoreError> {
    match detail_text(outcome, site_url) {
        Some(detail) => {
            info!("recording provisioning details for order '{}'", order_id);
            store.write_detail(order_id, &detail).await
        }
        None => Ok(()),
    }
}
