//! Pre-built Test Fixtures
//!
//! JSON payloads shaped like the backend's responses. Timestamps mix the
//! formats the backend has been seen to emit (offset-less date-times, RFC3339
//! with offset and plain dates).

use serde_json::{json, Value};

/// Wraps `data` in the response envelope
pub fn envelope(status: u16, message: &str, data: Value) -> Value {
    json!({
        "status": status,
        "message": message,
        "timestamp": "2024-06-01T09:30:00",
        "data": data,
    })
}

/// Successful envelope with status 200
pub fn ok_envelope(data: Value) -> Value {
    envelope(200, "Success", data)
}

/// Error envelope with a null payload
pub fn error_envelope(status: u16, message: &str) -> Value {
    envelope(status, message, Value::Null)
}

/// Fixture for insurance plan payloads
pub struct PlanFixtures;

impl PlanFixtures {
    pub fn json(id: &str) -> Value {
        json!({
            "id": id,
            "providerId": "prov-1",
            "planName": "Flight Delay Cover",
            "price": 25.5,
            "coverage": 1000,
            "coverageDetails": "Covers delays over three hours",
            "applicableService": ["FLIGHT", "PACKAGE"],
            "expiredByDays": 30,
            "createdAt": "2024-01-10T08:00:00",
            "updatedAt": null,
        })
    }

    pub fn list() -> Value {
        json!([Self::json("plan-1"), Self::json("plan-2")])
    }
}

/// Fixture for claim payloads
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A claim as embedded in an ordered plan
    pub fn record_json(id: &str, status: &str) -> Value {
        let mut record = json!({
            "id": id,
            "status": status,
            "proof": "https://files.example.com/proof.pdf",
            "rejectionReason": null,
            "rejectionDescription": null,
            "rejectionTimestamp": null,
            "acceptedNote": null,
            "acceptedTimestamp": null,
            "daysSinceClaimed": 3,
            "createdAt": "2024-05-20T14:15:00Z",
            "updatedAt": null,
        });

        match status {
            "ACCEPTED" => {
                record["acceptedNote"] = json!("Receipts verified");
                record["acceptedTimestamp"] = json!("2024-05-22T10:00:00");
                record["updatedAt"] = json!("2024-05-22T10:00:00");
            }
            "REJECTED" => {
                record["rejectionReason"] = json!("Not covered");
                record["rejectionDescription"] = json!("Delay was under three hours");
                record["rejectionTimestamp"] = json!("2024-05-22T10:00:00");
                record["updatedAt"] = json!("2024-05-22T10:00:00");
            }
            _ => {}
        }
        record
    }

    /// A standalone claim with its ordered-plan context
    pub fn json(id: &str, status: &str) -> Value {
        let mut claim = Self::record_json(id, status);
        claim["orderedPlanId"] = json!("op-1");
        claim["orderedPlanStatus"] = json!("ACTIVE");
        claim["insurancePlanId"] = json!("plan-1");
        claim["insurancePlanName"] = json!("Flight Delay Cover");
        claim
    }
}

/// Fixture for ordered plan payloads
pub struct OrderedPlanFixtures;

impl OrderedPlanFixtures {
    pub fn json(id: &str, policy_id: &str) -> Value {
        json!({
            "id": id,
            "status": "ACTIVE",
            "expiredDate": "2024-07-01",
            "insurancePlanId": "plan-1",
            "insurancePlanName": "Flight Delay Cover",
            "insurancePlanPrice": 25.5,
            "insurancePlanCoverage": 1000,
            "insurancePlanCoverageDetails": "Covers delays over three hours",
            "insurancePlanExpiredByDays": 30,
            "policyId": policy_id,
            "policyStatus": "PAID",
            "claims": [ClaimFixtures::record_json("c1", "PENDING")],
            "createdAt": "2024-06-01T09:00:00",
            "updatedAt": null,
        })
    }

    /// The slimmer projection embedded in a policy
    pub fn summary_json(id: &str, plan_id: &str, price: f64) -> Value {
        json!({
            "id": id,
            "status": "ACTIVE",
            "expiredDate": "2024-07-01T00:00:00+07:00",
            "insurancePlanId": plan_id,
            "insurancePlanName": "Flight Delay Cover",
            "price": price,
            "coverage": 1000,
        })
    }
}

/// Fixture for policy payloads
pub struct PolicyFixtures;

impl PolicyFixtures {
    pub fn json(id: &str) -> Value {
        json!({
            "id": id,
            "userId": "u1",
            "bookingId": "b1",
            "service": "FLIGHT",
            "startDate": "2024-06-01",
            "status": "PENDING_PAYMENT",
            "totalCoverage": 2000,
            "totalPrice": 40.5,
            "orderedPlans": [
                OrderedPlanFixtures::summary_json("op-1", "p1", 25.5),
                OrderedPlanFixtures::summary_json("op-2", "p2", 15.0),
            ],
            "createdAt": "2024-06-01T09:00:00",
            "updatedAt": null,
        })
    }

    /// A policy whose ordered plans embed the short claim projection
    pub fn with_embedded_claims_json(id: &str) -> Value {
        let mut policy = Self::json(id);
        policy["orderedPlans"][0]["claims"] = json!([
            {
                "id": "c1",
                "claimAmount": 350.75,
                "claimDate": "2024-06-10",
                "status": "PENDING",
                "claimDetails": "Flight delayed by five hours"
            },
            {
                "id": "c2",
                "claimAmount": 120,
                "claimDate": "2024-06-12T14:30:00",
                "status": "REJECTED",
                "claimDetails": null
            }
        ]);
        policy
    }
}

/// Fixture for statistics payloads
pub struct StatisticsFixtures;

impl StatisticsFixtures {
    pub fn dashboard_json() -> Value {
        json!({
            "totalInsurancePlans": 12,
            "totalPolicies": 48,
            "totalClaimsProcessed": 7,
        })
    }

    pub fn breakdown_json(time_period: &str, service: &str) -> Value {
        json!({
            "timePeriod": time_period,
            "service": service,
            "startDate": "2023-12-01T00:00:00",
            "endDate": "2024-06-01T00:00:00",
            "totalOrderedPlans": 30,
            "breakdownByService": {
                "ACCOMMODATION": 5,
                "FLIGHT": 18,
                "PACKAGE": 4,
                "RENTAL": 3,
            },
        })
    }
}
