//! Policy Domain
//!
//! Schemas for the insurance catalogue and what customers buy from it:
//! - **InsurancePlan**: a provider's product, applicable to one or more services
//! - **Policy**: a purchase tied to a user's booking for one service
//! - **OrderedPlan**: one insurance plan bought under a policy, carrying a
//!   snapshot of the plan at order time and its claim history
//!
//! # Lifecycle
//!
//! ```text
//! InsurancePlan --(create policy with plan ids)--> Policy
//!                                                   \-> OrderedPlan (one per plan)
//!                                                        \-> ClaimRecord*
//! ```
//!
//! The backend owns every state transition; these types are read-only views
//! of what it returns.

pub mod plan;
pub mod policy;
pub mod ordered_plan;

pub use plan::InsurancePlan;
pub use policy::Policy;
pub use ordered_plan::{OrderedPlan, OrderedPlanSummary};
