use serde::{Deserialize, Serialize};

use tollgate_core::condition::Condition;
use tollgate_core::context::Context;
use tollgate_core::errors::EvalError;

use crate::combine::assess_all;

/// Terminal outcome of one gating call.
///
/// `DeniedNotFound` deliberately carries no diagnostics: an access
/// failure must not disclose why, or whether, the protected resource
/// exists. `DeniedForbidden` is the informative path, reached only after
/// every access condition passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateDecision {
    Granted,
    DeniedNotFound,
    DeniedForbidden { message: String },
}

/// Denial raised by [`Gate::check`], mirroring [`GateDecision`].
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// Access denial; conveys nothing about the protected resource.
    #[error("not found")]
    NotFound,
    /// Execute denial with the aggregated message from every failing
    /// execute condition.
    #[error("forbidden: {message}")]
    Forbidden { message: String },
    /// Defect raised by a condition; never produced by the gate itself.
    #[error(transparent)]
    Defect(#[from] EvalError),
}

/// Run the two-tier protocol to a terminal decision.
///
/// Access conditions run one at a time in declaration order and
/// short-circuit: the first failure ends the call with
/// [`GateDecision::DeniedNotFound`] and nothing after it is evaluated.
/// Once access is clear, the execute group runs under implicit ALL
/// semantics, exactly as an [`EveryCondition`](crate::EveryCondition)
/// over the same sequence would. Condition defects propagate as `Err`
/// and are never converted into a denial.
pub fn decide(
    ctx: &Context,
    access: &[Box<dyn Condition>],
    execute: &[Box<dyn Condition>],
) -> Result<GateDecision, EvalError> {
    for condition in access {
        if !condition.run(ctx)?.passed() {
            return Ok(GateDecision::DeniedNotFound);
        }
    }
    let (passed, message) = assess_all(execute, ctx)?;
    if passed {
        Ok(GateDecision::Granted)
    } else {
        Ok(GateDecision::DeniedForbidden { message })
    }
}

/// Bare function-call entry point over [`decide`].
///
/// Denials are dispatched to the matching handler: `on_no_access` takes
/// no payload by contract, `on_no_execute` receives the aggregated
/// message. Handlers produce the caller's error type, so neither path
/// returns normally; defects convert into `E` through `From`.
pub fn gate<E: From<EvalError>>(
    ctx: &Context,
    access: &[Box<dyn Condition>],
    execute: &[Box<dyn Condition>],
    on_no_access: impl FnOnce() -> E,
    on_no_execute: impl FnOnce(String) -> E,
) -> Result<(), E> {
    match decide(ctx, access, execute)? {
        GateDecision::Granted => Ok(()),
        GateDecision::DeniedNotFound => Err(on_no_access()),
        GateDecision::DeniedForbidden { message } => Err(on_no_execute(message)),
    }
}

/// Immutable gate configuration: the ordered `access` and `execute`
/// condition groups for one protected action.
pub struct Gate {
    access: Vec<Box<dyn Condition>>,
    execute: Vec<Box<dyn Condition>>,
}

impl Gate {
    pub fn new(access: Vec<Box<dyn Condition>>, execute: Vec<Box<dyn Condition>>) -> Self {
        Gate { access, execute }
    }

    /// See [`decide`].
    pub fn decide(&self, ctx: &Context) -> Result<GateDecision, EvalError> {
        decide(ctx, &self.access, &self.execute)
    }

    /// Decision-as-error form for callers that want `?`.
    pub fn check(&self, ctx: &Context) -> Result<(), GateError> {
        match self.decide(ctx)? {
            GateDecision::Granted => Ok(()),
            GateDecision::DeniedNotFound => Err(GateError::NotFound),
            GateDecision::DeniedForbidden { message } => Err(GateError::Forbidden { message }),
        }
    }
}
