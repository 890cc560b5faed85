//! Core Kernel - Foundational types shared by the insurance client crates
//!
//! This crate provides the building blocks every other crate relies on:
//! - Strongly-typed identifiers for backend entities
//! - Service and time-period tokens exchanged with the backend
//! - Lenient timestamp handling for backend-formatted dates
//! - The uniform response envelope returned by every endpoint

pub mod identifiers;
pub mod service;
pub mod temporal;
pub mod envelope;
pub mod error;

pub use identifiers::{
    InsurancePlanId, ProviderId, PolicyId, UserId, BookingId,
    OrderedPlanId, ClaimId,
};
pub use service::{ServiceType, TimePeriod, ServiceFilter, ALL_SERVICES};
pub use temporal::parse_timestamp;
pub use envelope::BaseResponse;
pub use error::CoreError;
