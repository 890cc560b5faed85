//! Service modules, one per backend resource
//!
//! Each service borrows the client's transport and exposes the operations
//! of one base path. Request construction lives in associated functions
//! (`*_request`) so it can be inspected without a backend.

pub mod insurance_plan;
pub mod policy;
pub mod ordered_plan;
pub mod claim;
pub mod statistics;

pub use insurance_plan::InsurancePlanService;
pub use policy::PolicyService;
pub use ordered_plan::OrderedPlanService;
pub use claim::ClaimService;
pub use statistics::StatisticsService;
