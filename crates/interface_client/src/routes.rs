//! Client route table
//!
//! Maps the client's well-known paths to typed routes. Route parameters are
//! carried as the matching identifier type so views can pass them straight to
//! the service call that loads their data.

use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, CoreError, InsurancePlanId, OrderedPlanId, PolicyId};

/// A navigable client path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    InsurancePlanList,
    InsurancePlanCreate,
    InsurancePlanEdit(InsurancePlanId),
    InsurancePlanDetail(InsurancePlanId),
    PolicyList,
    PolicyCreate,
    PolicyDetail(PolicyId),
    ClaimList,
    ClaimCreate(OrderedPlanId),
    ClaimProcess(ClaimId),
    OrderedPlanDetail(OrderedPlanId),
    Statistics,
    About,
}

impl Route {
    /// Resolves a path; static segments such as `create` win over `:id`
    ///
    /// Query strings, fragments and trailing slashes are ignored and each
    /// segment is percent-decoded before matching. Returns `None` when no
    /// route matches or a segment is not valid UTF-8 once decoded.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let decoded = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(urlencoding::decode)
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        let segments: Vec<&str> = decoded.iter().map(|s| s.as_ref()).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["insurance-plan"] => Route::InsurancePlanList,
            ["insurance-plan", "create"] => Route::InsurancePlanCreate,
            ["insurance-plan", "edit", id] => Route::InsurancePlanEdit(id.parse().ok()?),
            ["insurance-plan", id] => Route::InsurancePlanDetail(id.parse().ok()?),
            ["policy"] => Route::PolicyList,
            ["policy", "create"] => Route::PolicyCreate,
            ["policy", id] => Route::PolicyDetail(id.parse().ok()?),
            ["claim"] => Route::ClaimList,
            ["claim", "create", ordered_plan_id] => Route::ClaimCreate(ordered_plan_id.parse().ok()?),
            ["claim", "process", id] => Route::ClaimProcess(id.parse().ok()?),
            ["ordered-plan", id] => Route::OrderedPlanDetail(id.parse().ok()?),
            ["statistics"] => Route::Statistics,
            ["about"] => Route::About,
            _ => return None,
        };
        Some(route)
    }

    /// Stable route name
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::InsurancePlanList => "insurance-plan-list",
            Route::InsurancePlanCreate => "insurance-plan-create",
            Route::InsurancePlanEdit(_) => "insurance-plan-edit",
            Route::InsurancePlanDetail(_) => "insurance-plan-detail",
            Route::PolicyList => "policy-list",
            Route::PolicyCreate => "policy-create",
            Route::PolicyDetail(_) => "policy-detail",
            Route::ClaimList => "claim-list",
            Route::ClaimCreate(_) => "claim-create",
            Route::ClaimProcess(_) => "claim-process",
            Route::OrderedPlanDetail(_) => "ordered-plan-detail",
            Route::Statistics => "statistics",
            Route::About => "about",
        }
    }

    /// Path pattern with parameter placeholders, e.g. `/claim/process/:id`
    pub fn pattern(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::InsurancePlanList => "/insurance-plan",
            Route::InsurancePlanCreate => "/insurance-plan/create",
            Route::InsurancePlanEdit(_) => "/insurance-plan/edit/:id",
            Route::InsurancePlanDetail(_) => "/insurance-plan/:id",
            Route::PolicyList => "/policy",
            Route::PolicyCreate => "/policy/create",
            Route::PolicyDetail(_) => "/policy/:id",
            Route::ClaimList => "/claim",
            Route::ClaimCreate(_) => "/claim/create/:orderedPlanId",
            Route::ClaimProcess(_) => "/claim/process/:id",
            Route::OrderedPlanDetail(_) => "/ordered-plan/:id",
            Route::Statistics => "/statistics",
            Route::About => "/about",
        }
    }
}

/// Parameters are percent-encoded so the output parses back to the same route
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::InsurancePlanEdit(id) => write!(f, "/insurance-plan/edit/{}", encode(id)),
            Route::InsurancePlanDetail(id) => write!(f, "/insurance-plan/{}", encode(id)),
            Route::PolicyDetail(id) => write!(f, "/policy/{}", encode(id)),
            Route::ClaimCreate(id) => write!(f, "/claim/create/{}", encode(id)),
            Route::ClaimProcess(id) => write!(f, "/claim/process/{}", encode(id)),
            Route::OrderedPlanDetail(id) => write!(f, "/ordered-plan/{}", encode(id)),
            static_route => f.write_str(static_route.pattern()),
        }
    }
}

fn encode(id: &impl fmt::Display) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s).ok_or_else(|| CoreError::unknown_token("route", s))
    }
}
