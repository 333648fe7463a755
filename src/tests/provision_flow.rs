#[cfg(test)]
mod test {
    use crate::error::{ProvisionError, WorkflowError};
    use crate::model::outcome::ProvisioningOutcome;
    use crate::store::{MemoryStore, RecordStore};
    use crate::tests::common::{
        json, mock_token_grant, sample_request, test_provisioner, TEST_TOKEN,
    };
    use httpmock::Method::POST;
    use httpmock::MockServer;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn activated_outcome_records_the_activation_url() {
        let server = MockServer::start_async().await;
        let _token = mock_token_grant(&server).await;
        let provision_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/rest/v1.3/jpphp/provision")
                    .header("authorization", format!("Bearer {}", TEST_TOKEN));
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({"success": true, "next_url": "https://x/activate"}));
            })
            .await;

        let provisioner = test_provisioner(&server, MemoryStore::new());
        let request = sample_request();
        let outcome = provisioner.provision(&request).await.unwrap();

        assert_eq!(
            outcome,
            ProvisioningOutcome::Activated {
                next_url: "https://x/activate".to_string()
            }
        );
        assert_eq!(provision_mock.hits_async().await, 1);
        let detail = provisioner.store().read_detail("1001").await.unwrap();
        assert_eq!(
            detail.as_deref(),
            Some("URL to Activate Jetpack: https://x/activate")
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn pending_dns_outcome_records_the_waiting_notice() {
        let server = MockServer::start_async().await;
        let _token = mock_token_grant(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1.3/jpphp/provision");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(
                        json!({"success": true, "next_url": null, "auth_required": true}),
                    );
            })
            .await;

        let provisioner = test_provisioner(&server, MemoryStore::new());
        let outcome = provisioner.provision(&sample_request()).await.unwrap();

        assert_eq!(outcome, ProvisioningOutcome::PendingDnsResolution);
        let detail = provisioner
            .store()
            .read_detail("1001")
            .await
            .unwrap()
            .expect("pending detail recorded");
        assert!(detail.contains("https://example.com"));
        assert!(detail.contains("Once DNS resolves"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn silent_success_records_nothing() {
        let server = MockServer::start_async().await;
        let _token = mock_token_grant(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1.3/jpphp/provision");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({"success": true}));
            })
            .await;

        let provisioner = test_provisioner(&server, MemoryStore::new());
        let outcome = provisioner.provision(&sample_request()).await.unwrap();

        assert_eq!(outcome, ProvisioningOutcome::Completed);
        assert_eq!(
            provisioner.store().read_detail("1001").await.unwrap(),
            None
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn unsuccessful_response_is_an_api_error_and_records_nothing() {
        let server = MockServer::start_async().await;
        let _token = mock_token_grant(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1.3/jpphp/provision");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({"success": false}));
            })
            .await;

        let provisioner = test_provisioner(&server, MemoryStore::new());
        let err = provisioner.provision(&sample_request()).await.unwrap_err();

        assert!(matches!(
            err,
            WorkflowError::Provision(ProvisionError::Api { status: 200, .. })
        ));
        assert_eq!(
            provisioner.store().read_detail("1001").await.unwrap(),
            None
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn error_status_carries_status_and_body() {
        let server = MockServer::start_async().await;
        let _token = mock_token_grant(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1.3/jpphp/provision");
                then.status(500)
                    .header("Content-Type", "application/json")
                    .json_body(json!({"error": "site_in_progress"}));
            })
            .await;

        let provisioner = test_provisioner(&server, MemoryStore::new());
        let err = provisioner.provision(&sample_request()).await.unwrap_err();

        match err {
            WorkflowError::Provision(ProvisionError::Api { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("site_in_progress"));
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn empty_body_is_an_api_error() {
        let server = MockServer::start_async().await;
        let _token = mock_token_grant(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1.3/jpphp/provision");
                then.status(200);
            })
            .await;

        let provisioner = test_provisioner(&server, MemoryStore::new());
        let err = provisioner.provision(&sample_request()).await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Provision(ProvisionError::Api { .. })
        ));
    }

    // A fresh token is fetched per operation and the record is
    // overwritten in place: rerunning an identical order must not
    // duplicate anything.
    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn repeat_provisioning_overwrites_the_same_record() {
        let server = MockServer::start_async().await;
        let token_mock = mock_token_grant(&server).await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/rest/v1.3/jpphp/provision");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({"success": true, "next_url": "https://x/activate"}));
            })
            .await;

        let provisioner = test_provisioner(&server, MemoryStore::new());
        let request = sample_request();
        provisioner.provision(&request).await.unwrap();
        provisioner.provision(&request).await.unwrap();

        assert_eq!(token_mock.hits_async().await, 2);
        let detail = provisioner.store().read_detail("1001").await.unwrap();
        assert_eq!(
            detail.as_deref(),
            Some("URL to Activate Jetpack: https://x/activate")
        );
    }
}
