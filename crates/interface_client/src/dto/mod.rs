//! Request and response data transfer objects
//!
//! Request DTOs list exactly the fields the backend accepts; server-assigned
//! fields (ids, timestamps, status) never appear in them. No validation is
//! done client-side.

pub mod insurance;
pub mod policy;
pub mod claims;
pub mod statistics;

pub use insurance::{CreateInsurancePlanRequest, UpdateInsurancePlanRequest};
pub use policy::CreatePolicyRequest;
pub use claims::{AcceptClaimRequest, ClaimFilter, CreateClaimRequest, RejectClaimRequest};
pub use statistics::{DashboardStats, Statistics};
