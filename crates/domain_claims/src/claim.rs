//! Claim schema

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, InsurancePlanId, OrderedPlanId};

/// Claim status as understood by the client
///
/// The backend owns the status vocabulary; anything outside the three known
/// states is kept as [`ClaimStatus::Unknown`] rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimStatus {
    /// Submitted and awaiting a decision
    Pending,
    /// Accepted with a note
    Accepted,
    /// Rejected with a reason and description
    Rejected,
    Unknown,
}

impl ClaimStatus {
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("PENDING") {
            ClaimStatus::Pending
        } else if token.eq_ignore_ascii_case("ACCEPTED") {
            ClaimStatus::Accepted
        } else if token.eq_ignore_ascii_case("REJECTED") {
            ClaimStatus::Rejected
        } else {
            ClaimStatus::Unknown
        }
    }

    /// Wire token, also usable as a listing filter
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "PENDING",
            ClaimStatus::Accepted => "ACCEPTED",
            ClaimStatus::Rejected => "REJECTED",
            ClaimStatus::Unknown => "UNKNOWN",
        }
    }

    /// Whether the backend still expects a decision
    pub fn is_open(&self) -> bool {
        matches!(self, ClaimStatus::Pending)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a claim, projected from its status and field groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimResolution {
    Pending,
    Accepted {
        note: Option<String>,
        at: Option<DateTime<Utc>>,
    },
    Rejected {
        reason: Option<String>,
        description: Option<String>,
        at: Option<DateTime<Utc>>,
    },
    /// Status the client does not recognise, carried verbatim
    Other(String),
}

/// A claim as embedded in an ordered plan
///
/// Policies embed a shorter projection (`claimAmount`, `claimDate`,
/// `claimDetails`) without proof or age; those fields are optional here and
/// `claimDate` is read into `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRecord {
    pub id: ClaimId,
    /// Backend-owned status token
    pub status: String,
    /// Proof supplied by the claimant (document link or free text), empty
    /// in the policy projection
    #[serde(default)]
    pub proof: String,
    pub rejection_reason: Option<String>,
    pub rejection_description: Option<String>,
    #[serde(default, with = "core_kernel::temporal::flexible_option")]
    pub rejection_timestamp: Option<DateTime<Utc>>,
    pub accepted_note: Option<String>,
    #[serde(default, with = "core_kernel::temporal::flexible_option")]
    pub accepted_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub days_since_claimed: Option<i64>,
    #[serde(alias = "claimDate", with = "core_kernel::temporal::flexible")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub claim_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim_details: Option<String>,
    #[serde(default, with = "core_kernel::temporal::flexible_option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ClaimRecord {
    pub fn status_kind(&self) -> ClaimStatus {
        ClaimStatus::from_token(&self.status)
    }

    /// Only the field group matching the status is reported; the other
    /// group is ignored even if the backend filled it in.
    pub fn resolution(&self) -> ClaimResolution {
        match self.status_kind() {
            ClaimStatus::Pending => ClaimResolution::Pending,
            ClaimStatus::Accepted => ClaimResolution::Accepted {
                note: self.accepted_note.clone(),
                at: self.accepted_timestamp,
            },
            ClaimStatus::Rejected => ClaimResolution::Rejected {
                reason: self.rejection_reason.clone(),
                description: self.rejection_description.clone(),
                at: self.rejection_timestamp,
            },
            ClaimStatus::Unknown => ClaimResolution::Other(self.status.clone()),
        }
    }

    /// `updatedAt` is null until the backend first modifies the claim
    pub fn is_modified(&self) -> bool {
        self.updated_at.is_some()
    }
}

/// A claim with the context of the ordered plan it was raised against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    #[serde(flatten)]
    pub record: ClaimRecord,
    pub ordered_plan_id: OrderedPlanId,
    pub ordered_plan_status: String,
    pub insurance_plan_id: InsurancePlanId,
    pub insurance_plan_name: String,
}

impl Claim {
    pub fn id(&self) -> &ClaimId {
        &self.record.id
    }

    pub fn status_kind(&self) -> ClaimStatus {
        self.record.status_kind()
    }

    pub fn resolution(&self) -> ClaimResolution {
        self.record.resolution()
    }

    pub fn into_record(self) -> ClaimRecord {
        self.record
    }
}
