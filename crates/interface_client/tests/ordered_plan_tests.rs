//! Tests for the ordered plan service against a stub backend

use chrono::{TimeZone, Utc};
use serde_json::json;

use core_kernel::{OrderedPlanId, PolicyId};
use test_utils::*;

#[tokio::test]
async fn test_get_returns_envelope_with_claims() {
    let backend = StubBackend::start().await;
    backend
        .respond(
            "GET",
            "/api/ordered-plan/op-1",
            200,
            ok_envelope(OrderedPlanFixtures::json("op-1", "pol-1")),
        )
        .await;

    let envelope = backend
        .client()
        .ordered_plans()
        .get(&OrderedPlanId::new("op-1"))
        .await
        .unwrap();

    let plan = envelope.data.unwrap();
    assert_eq!(plan.id().as_str(), "op-1");
    assert_eq!(plan.policy_id.as_str(), "pol-1");
    assert_eq!(plan.claims().len(), 1);
    assert!(plan.summary.has_open_claim());
    assert!(plan.is_expired_at(Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap()));
    assert!(!plan.is_expired_at(Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap()));
}

#[tokio::test]
async fn test_get_missing_is_passed_through() {
    let backend = StubBackend::start().await;
    backend
        .respond(
            "GET",
            "/api/ordered-plan/nope",
            404,
            error_envelope(404, "Ordered plan not found"),
        )
        .await;

    let envelope = backend
        .client()
        .ordered_plans()
        .get(&OrderedPlanId::new("nope"))
        .await
        .unwrap();
    assert_eq!(envelope.status, 404);
    assert!(envelope.data().is_none());
}

#[tokio::test]
async fn test_list_by_policy() {
    let backend = StubBackend::start().await;
    backend
        .respond(
            "GET",
            "/api/ordered-plan/policy/pol-1",
            200,
            ok_envelope(json!([
                OrderedPlanFixtures::json("op-1", "pol-1"),
                OrderedPlanFixtures::json("op-2", "pol-1")
            ])),
        )
        .await;

    let plans = backend
        .client()
        .ordered_plans()
        .list_by_policy(&PolicyId::new("pol-1"))
        .await
        .unwrap();

    assert_eq!(plans.len(), 2);
    assert!(plans.iter().all(|p| p.policy_id.as_str() == "pol-1"));
    assert_request(&backend.single_request().await, "GET", "/api/ordered-plan/policy/pol-1");
}

#[tokio::test]
async fn test_failure_messages() {
    let backend = StubBackend::start().await;
    backend
        .respond("GET", "/api/ordered-plan/all", 500, error_envelope(500, "boom"))
        .await;
    backend
        .respond("GET", "/api/ordered-plan/policy/pol-1", 404, error_envelope(404, "boom"))
        .await;

    let client = backend.client();

    let err = client.ordered_plans().list().await.unwrap_err();
    assert_request_failed(&err, "Failed to fetch ordered plans", 500);

    let err = client
        .ordered_plans()
        .list_by_policy(&PolicyId::new("pol-1"))
        .await
        .unwrap_err();
    assert_request_failed(&err, "Failed to fetch ordered plans for policy", 404);
}
