use serde_json::Value;

use tollgate_core::context::Context;

use crate::gate::{Gate, GateDecision, GateError};

/// Context key under which [`GatedHandler`] injects the resolved object.
pub const OBJECT_KEY: &str = "object";

/// Gate hooks for a request-handling object's lifecycle.
///
/// Handlers gate twice: [`check_request`](Self::check_request) early,
/// before any target object exists, and
/// [`check_object`](Self::check_object) once the target is resolved,
/// with the object injected into the context under [`OBJECT_KEY`].
/// Access failures map to [`GateError::NotFound`] and execute failures
/// to [`GateError::Forbidden`] by default; both mappings are overridable
/// per handler.
pub trait GatedHandler {
    /// The gate guarding this handler.
    fn gate(&self) -> &Gate;

    /// Base context for the current request, before any object lookup.
    fn context(&self) -> Context;

    /// Failure raised for an access denial. Carries no diagnostics.
    fn no_access_failure(&self) -> GateError {
        GateError::NotFound
    }

    /// Failure raised for an execute denial, given the aggregated message.
    fn no_execute_failure(&self, message: String) -> GateError {
        GateError::Forbidden { message }
    }

    /// Early check for flows that never resolve a specific object.
    fn check_request(&self) -> Result<(), GateError> {
        self.apply_gate(self.context())
    }

    /// Re-check with the resolved target object in the bag.
    fn check_object(&self, object: Value) -> Result<(), GateError> {
        self.apply_gate(self.context().with(OBJECT_KEY, object))
    }

    fn apply_gate(&self, ctx: Context) -> Result<(), GateError> {
        match self.gate().decide(&ctx)? {
            GateDecision::Granted => Ok(()),
            GateDecision::DeniedNotFound => Err(self.no_access_failure()),
            GateDecision::DeniedForbidden { message } => Err(self.no_execute_failure(message)),
        }
    }
}
