//! Tests for the statistics service against a stub backend

use core_kernel::{ServiceFilter, ServiceType, TimePeriod};
use test_utils::*;

#[tokio::test]
async fn test_all_services_is_not_sent() {
    let backend = StubBackend::start().await;
    backend
        .respond(
            "GET",
            "/api/statistics",
            200,
            ok_envelope(StatisticsFixtures::breakdown_json("6_MONTHS", "ALL_SERVICES")),
        )
        .await;

    let filter: ServiceFilter = "ALL_SERVICES".parse().unwrap();
    let stats = backend
        .client()
        .statistics()
        .breakdown(TimePeriod::SixMonths, filter)
        .await
        .unwrap();

    assert_eq!(stats.time_period, "6_MONTHS");
    assert_eq!(stats.total_ordered_plans, 30);
    assert_eq!(stats.breakdown_for(ServiceType::Flight), Some(18));
    assert_eq!(stats.breakdown_total(), 30);

    let request = backend.single_request().await;
    assert_request(&request, "GET", "/api/statistics");
    assert_query(&request, Some("timePeriod=6_MONTHS"));
    assert_query_param_absent(&request, "service");
}

#[tokio::test]
async fn test_service_filter_is_sent() {
    let backend = StubBackend::start().await;
    backend
        .respond(
            "GET",
            "/api/statistics",
            200,
            ok_envelope(StatisticsFixtures::breakdown_json("3_MONTHS", "FLIGHT")),
        )
        .await;

    backend
        .client()
        .statistics()
        .breakdown(TimePeriod::ThreeMonths, ServiceType::Flight.into())
        .await
        .unwrap();

    let request = backend.single_request().await;
    assert_query(&request, Some("timePeriod=3_MONTHS&service=FLIGHT"));
}

#[tokio::test]
async fn test_breakdown_failure_uses_backend_message() {
    let backend = StubBackend::start().await;
    backend
        .respond(
            "GET",
            "/api/statistics",
            400,
            error_envelope(400, "Unsupported time period"),
        )
        .await;

    let err = backend
        .client()
        .statistics()
        .breakdown(TimePeriod::TwelveMonths, ServiceFilter::All)
        .await
        .unwrap_err();

    assert_request_failed(&err, "Unsupported time period", 400);
}

#[tokio::test]
async fn test_breakdown_failure_falls_back_to_fixed_message() {
    let backend = StubBackend::start().await;
    backend
        .respond_raw("GET", "/api/statistics", 502, "Bad Gateway")
        .await;

    let err = backend
        .client()
        .statistics()
        .breakdown(TimePeriod::SixMonths, ServiceFilter::All)
        .await
        .unwrap_err();

    assert_request_failed(&err, "Failed to fetch statistics", 502);
}

#[tokio::test]
async fn test_dashboard() {
    let backend = StubBackend::start().await;
    backend
        .respond(
            "GET",
            "/api/statistics/dashboard",
            200,
            ok_envelope(StatisticsFixtures::dashboard_json()),
        )
        .await;

    let stats = backend.client().statistics().dashboard().await.unwrap();
    assert_eq!(stats.total_insurance_plans, 12);
    assert_eq!(stats.total_policies, 48);
    assert_eq!(stats.total_claims_processed, 7);
}

#[tokio::test]
async fn test_dashboard_failure_with_empty_message() {
    let backend = StubBackend::start().await;
    backend
        .respond("GET", "/api/statistics/dashboard", 500, error_envelope(500, ""))
        .await;

    let err = backend.client().statistics().dashboard().await.unwrap_err();
    assert_request_failed(&err, "Failed to fetch dashboard statistics", 500);
}
