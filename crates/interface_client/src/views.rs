//! Data behind each client view
//!
//! [`load_view`] resolves a [`Route`] into the backend calls its view needs,
//! passing route parameters straight through. Single-entity views keep the
//! full envelope so the caller can show the backend's status and message.

use serde::Serialize;
use tracing::debug;

use core_kernel::{BaseResponse, ServiceFilter, TimePeriod};
use domain_claims::Claim;
use domain_policy::{InsurancePlan, OrderedPlan, Policy};

use crate::dto::{ClaimFilter, DashboardStats, Statistics, UpdateInsurancePlanRequest};
use crate::error::ClientError;
use crate::routes::Route;
use crate::InsuranceClient;

/// Loaded view data, tagged by view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "data", rename_all = "kebab-case")]
pub enum ViewData {
    Home(DashboardStats),
    InsurancePlanList(Vec<InsurancePlan>),
    InsurancePlanCreate,
    InsurancePlanEdit {
        plan: BaseResponse<InsurancePlan>,
        /// Edit form pre-filled from the plan, absent when it failed to load
        form: Option<UpdateInsurancePlanRequest>,
    },
    InsurancePlanDetail(BaseResponse<InsurancePlan>),
    PolicyList(Vec<Policy>),
    /// Plan catalogue offered on the policy form
    PolicyCreate(Vec<InsurancePlan>),
    #[serde(rename_all = "camelCase")]
    PolicyDetail {
        policy: BaseResponse<Policy>,
        /// Loaded only once the policy itself was found
        ordered_plans: Option<Vec<OrderedPlan>>,
    },
    ClaimList(Vec<Claim>),
    /// Ordered plan the new claim is filed against
    ClaimCreate(BaseResponse<OrderedPlan>),
    ClaimProcess(BaseResponse<Claim>),
    OrderedPlanDetail(BaseResponse<OrderedPlan>),
    Statistics {
        dashboard: DashboardStats,
        breakdown: Statistics,
    },
    About,
}

/// Fetches everything the view for `route` shows
pub async fn load_view(client: &InsuranceClient, route: &Route) -> Result<ViewData, ClientError> {
    debug!(route = route.name(), path = %route, "Loading view");

    let view = match route {
        Route::Home => ViewData::Home(client.statistics().dashboard().await?),
        Route::InsurancePlanList => ViewData::InsurancePlanList(client.insurance_plans().list().await?),
        Route::InsurancePlanCreate => ViewData::InsurancePlanCreate,
        Route::InsurancePlanEdit(id) => {
            let plan = client.insurance_plans().get(id).await?;
            let form = plan.data().map(UpdateInsurancePlanRequest::from);
            ViewData::InsurancePlanEdit { plan, form }
        }
        Route::InsurancePlanDetail(id) => {
            ViewData::InsurancePlanDetail(client.insurance_plans().get(id).await?)
        }
        Route::PolicyList => ViewData::PolicyList(client.policies().list().await?),
        Route::PolicyCreate => ViewData::PolicyCreate(client.insurance_plans().list().await?),
        Route::PolicyDetail(id) => {
            let policy = client.policies().get(id).await?;
            let ordered_plans = if policy.is_success() {
                Some(client.ordered_plans().list_by_policy(id).await?)
            } else {
                debug!(policy_id = %id, status = policy.status, "Policy not loaded, skipping ordered plans");
                None
            };
            ViewData::PolicyDetail {
                policy,
                ordered_plans,
            }
        }
        Route::ClaimList => ViewData::ClaimList(client.claims().list(&ClaimFilter::new()).await?),
        Route::ClaimCreate(ordered_plan_id) => {
            ViewData::ClaimCreate(client.ordered_plans().get(ordered_plan_id).await?)
        }
        Route::ClaimProcess(id) => ViewData::ClaimProcess(client.claims().get(id).await?),
        Route::OrderedPlanDetail(id) => {
            ViewData::OrderedPlanDetail(client.ordered_plans().get(id).await?)
        }
        Route::Statistics => {
            let statistics = client.statistics();
            let (dashboard, breakdown) = tokio::try_join!(
                statistics.dashboard(),
                statistics.breakdown(TimePeriod::default(), ServiceFilter::All)
            )?;
            ViewData::Statistics {
                dashboard,
                breakdown,
            }
        }
        Route::About => ViewData::About,
    };
    Ok(view)
}

impl ViewData {
    /// Envelope-level failure carried by a single-entity view, if any
    pub fn envelope_error(&self) -> Option<(u16, &str)> {
        fn check<T>(envelope: &BaseResponse<T>) -> Option<(u16, &str)> {
            (!envelope.is_success()).then_some((envelope.status, envelope.message.as_str()))
        }

        match self {
            ViewData::InsurancePlanEdit { plan, .. } => check(plan),
            ViewData::InsurancePlanDetail(plan) => check(plan),
            ViewData::PolicyDetail { policy, .. } => check(policy),
            ViewData::ClaimCreate(plan) | ViewData::OrderedPlanDetail(plan) => check(plan),
            ViewData::ClaimProcess(claim) => check(claim),
            _ => None,
        }
    }
}
