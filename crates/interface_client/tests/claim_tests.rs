//! Tests for the claim service against a stub backend

use serde_json::json;

use core_kernel::{ClaimId, CoreError, OrderedPlanId};
use domain_claims::{ClaimResolution, ClaimStatus};
use interface_client::dto::{AcceptClaimRequest, ClaimFilter, CreateClaimRequest, RejectClaimRequest};
use interface_client::services::claim::FETCH_ALL_FAILED;
use test_utils::*;

// ============================================================================
// Listing
// ============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_pending_claims_returns_data_only() {
        let backend = StubBackend::start().await;
        backend
            .respond(
                "GET",
                "/api/claim/all",
                200,
                ok_envelope(json!([ClaimFixtures::json("c1", "PENDING")])),
            )
            .await;

        let claims = backend
            .client()
            .claims()
            .list(&ClaimFilter::new().with_status("PENDING"))
            .await
            .unwrap();

        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].id().as_str(), "c1");
        assert_eq!(claims[0].status_kind(), ClaimStatus::Pending);
        assert_eq!(claims[0].insurance_plan_name, "Flight Delay Cover");

        let request = backend.single_request().await;
        assert_request(&request, "GET", "/api/claim/all");
        assert_query(&request, Some("status=PENDING"));
        assert_query_param_absent(&request, "insurancePlanId");
    }

    #[tokio::test]
    async fn test_list_without_filters_sends_no_query() {
        let backend = StubBackend::start().await;
        backend
            .respond("GET", "/api/claim/all", 200, ok_envelope(json!([])))
            .await;

        let claims = backend.client().claims().list(&ClaimFilter::new()).await.unwrap();
        assert!(claims.is_empty());

        let request = backend.single_request().await;
        assert_query(&request, None);
    }

    #[tokio::test]
    async fn test_list_with_plan_filter_only() {
        let backend = StubBackend::start().await;
        backend
            .respond("GET", "/api/claim/all", 200, ok_envelope(json!([])))
            .await;

        let filter = ClaimFilter::new().with_status("").with_insurance_plan("plan-1");
        backend.client().claims().list(&filter).await.unwrap();

        let request = backend.single_request().await;
        assert_query(&request, Some("insurancePlanId=plan-1"));
        assert_query_param_absent(&request, "status");
    }

    #[tokio::test]
    async fn test_list_failure_ignores_body() {
        let backend = StubBackend::start().await;
        backend
            .respond(
                "GET",
                "/api/claim/all",
                500,
                error_envelope(500, "Database unavailable"),
            )
            .await;

        let err = backend
            .client()
            .claims()
            .list(&ClaimFilter::new())
            .await
            .unwrap_err();

        assert_request_failed(&err, FETCH_ALL_FAILED, 500);
        assert_eq!(err.to_string(), "Failed to fetch claims");
    }

    #[tokio::test]
    async fn test_list_failure_with_html_body() {
        let backend = StubBackend::start().await;
        backend
            .respond_raw("GET", "/api/claim/all", 502, "<html>Bad Gateway</html>")
            .await;

        let err = backend
            .client()
            .claims()
            .list(&ClaimFilter::new())
            .await
            .unwrap_err();

        assert_request_failed(&err, "Failed to fetch claims", 502);
    }
}

// ============================================================================
// Single Claim and Processing
// ============================================================================

mod envelope_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_envelope() {
        let backend = StubBackend::start().await;
        backend
            .respond(
                "GET",
                "/api/claim/c2",
                200,
                ok_envelope(ClaimFixtures::json("c2", "REJECTED")),
            )
            .await;

        let envelope = backend
            .client()
            .claims()
            .get(&ClaimId::new("c2"))
            .await
            .unwrap();

        assert!(envelope.is_success());
        assert_eq!(envelope.message, "Success");
        let claim = envelope.data.unwrap();
        assert!(matches!(
            claim.resolution(),
            ClaimResolution::Rejected { reason: Some(ref r), .. } if r == "Not covered"
        ));
    }

    #[tokio::test]
    async fn test_get_not_found_is_passed_through() {
        let backend = StubBackend::start().await;
        backend
            .respond("GET", "/api/claim/missing", 404, error_envelope(404, "Claim not found"))
            .await;

        let envelope = backend
            .client()
            .claims()
            .get(&ClaimId::new("missing"))
            .await
            .unwrap();

        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.message, "Claim not found");
        assert!(envelope.data.is_none());
        assert_eq!(
            envelope.into_result(),
            Err(CoreError::rejected(404, "Claim not found"))
        );
    }

    #[tokio::test]
    async fn test_create_sends_ordered_plan_and_proof() {
        let backend = StubBackend::start().await;
        backend
            .respond(
                "POST",
                "/api/claim/create",
                201,
                envelope(201, "Claim created", ClaimFixtures::json("c9", "PENDING")),
            )
            .await;

        let body = CreateClaimRequest {
            ordered_plan_id: OrderedPlanId::new("op-1"),
            proof: "https://files.example.com/boarding-pass.png".to_string(),
        };
        let envelope = backend.client().claims().create(&body).await.unwrap();

        assert_eq!(envelope.status, 201);
        assert_eq!(envelope.data.unwrap().id().as_str(), "c9");

        let request = backend.single_request().await;
        assert_request(&request, "POST", "/api/claim/create");
        assert_json_body(
            &request,
            &json!({
                "orderedPlanId": "op-1",
                "proof": "https://files.example.com/boarding-pass.png"
            }),
        );
    }

    #[tokio::test]
    async fn test_accept_sends_note() {
        let backend = StubBackend::start().await;
        backend
            .respond(
                "PUT",
                "/api/claim/accept/c1",
                200,
                ok_envelope(ClaimFixtures::json("c1", "ACCEPTED")),
            )
            .await;

        let body = AcceptClaimRequest {
            accepted_note: "Receipts verified".to_string(),
        };
        let envelope = backend
            .client()
            .claims()
            .accept(&ClaimId::new("c1"), &body)
            .await
            .unwrap();

        assert_eq!(envelope.data.unwrap().status_kind(), ClaimStatus::Accepted);

        let request = backend.single_request().await;
        assert_request(&request, "PUT", "/api/claim/accept/c1");
        assert_json_body(&request, &json!({ "acceptedNote": "Receipts verified" }));
    }

    #[tokio::test]
    async fn test_create_validation_error_is_passed_through() {
        let backend = StubBackend::start().await;
        backend
            .respond(
                "POST",
                "/api/claim/create",
                400,
                envelope(400, "Validation failed", json!({ "proof": "must not be blank" })),
            )
            .await;

        let body = CreateClaimRequest {
            ordered_plan_id: OrderedPlanId::new("op-1"),
            proof: String::new(),
        };
        let envelope = backend.client().claims().create(&body).await.unwrap();

        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.message, "Validation failed");
        assert!(envelope.data.is_none());
        assert_eq!(envelope.details, Some(json!({ "proof": "must not be blank" })));
        assert_eq!(
            envelope.into_result(),
            Err(CoreError::rejected(400, "Validation failed"))
        );
    }

    #[tokio::test]
    async fn test_accept_error_with_text_data_is_passed_through() {
        let backend = StubBackend::start().await;
        backend
            .respond(
                "PUT",
                "/api/claim/accept/c1",
                404,
                envelope(404, "Claim not found", json!("No claim with id c1")),
            )
            .await;

        let body = AcceptClaimRequest {
            accepted_note: "Receipts verified".to_string(),
        };
        let envelope = backend
            .client()
            .claims()
            .accept(&ClaimId::new("c1"), &body)
            .await
            .unwrap();

        assert_eq!(envelope.status, 404);
        assert_eq!(envelope.message, "Claim not found");
        assert!(envelope.data.is_none());
        assert_eq!(envelope.details, Some(json!("No claim with id c1")));
        assert_request(&backend.single_request().await, "PUT", "/api/claim/accept/c1");
    }

    #[tokio::test]
    async fn test_reject_conflict_is_passed_through() {
        let backend = StubBackend::start().await;
        backend
            .respond(
                "PUT",
                "/api/claim/reject/c1",
                409,
                error_envelope(409, "Claim already processed"),
            )
            .await;

        let body = RejectClaimRequest {
            rejection_reason: "Not covered".to_string(),
            rejection_description: "Delay was under three hours".to_string(),
        };
        let envelope = backend
            .client()
            .claims()
            .reject(&ClaimId::new("c1"), &body)
            .await
            .unwrap();

        assert!(!envelope.is_success());
        assert_eq!(envelope.message, "Claim already processed");

        let request = backend.single_request().await;
        assert_eq!(decode_body::<RejectClaimRequest>(&request), body);
    }
}
