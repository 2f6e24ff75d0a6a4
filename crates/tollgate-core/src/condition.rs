use crate::binding::Binding;
use crate::context::Context;
use crate::errors::EvalError;
use crate::verdict::Verdict;

/// A reusable, stateless predicate over a named context.
///
/// Implementations declare the keys they read via [`Binding`] and put the
/// policy logic in [`evaluate`](Self::evaluate). Callers go through
/// [`run`](Self::run), which validates required keys, hands `evaluate`
/// only the relevant subset of the bag, and wraps the boolean in a
/// [`Verdict`]. Instances are shared across calls and must not mutate
/// themselves during evaluation; that is the crate's only concurrency
/// guarantee.
pub trait Condition: Send + Sync {
    /// Stable name used in verdicts and error reports.
    fn label(&self) -> &str;

    /// Which context keys this condition reads.
    fn binding(&self) -> &Binding;

    /// Policy logic over the projected context.
    ///
    /// Must be a pure function of the subset it receives. An `Err` is a
    /// defect, not a denial; it propagates out of [`run`](Self::run) as
    /// [`EvalError::Evaluation`] and is never turned into a failing
    /// verdict.
    fn evaluate(&self, ctx: &Context) -> anyhow::Result<bool>;

    /// Explanation attached to a failing verdict.
    ///
    /// The default names the condition. Override to render a
    /// context-specific reason; errors here are treated like `evaluate`
    /// errors.
    fn denial_message(&self, _ctx: &Context) -> anyhow::Result<String> {
        Ok(format!("condition '{}' was not satisfied", self.label()))
    }

    /// Validate, project, evaluate, and wrap the outcome in a [`Verdict`].
    fn run(&self, ctx: &Context) -> Result<Verdict, EvalError> {
        let binding = self.binding();
        if let Some(key) = binding.missing_key(ctx) {
            return Err(EvalError::missing_key(self.label(), key));
        }
        let relevant = binding.relevant(ctx);
        let passed = self
            .evaluate(&relevant)
            .map_err(|cause| EvalError::evaluation(self.label(), cause))?;
        if passed {
            Ok(Verdict::pass(self.label(), ctx.clone()))
        } else {
            let message = self
                .denial_message(ctx)
                .map_err(|cause| EvalError::evaluation(self.label(), cause))?;
            Ok(Verdict::fail(self.label(), message, ctx.clone()))
        }
    }
}
