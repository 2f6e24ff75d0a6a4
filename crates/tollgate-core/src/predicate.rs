use std::fmt;

use crate::binding::Binding;
use crate::condition::Condition;
use crate::context::Context;

/// Leaf condition built from a closure, for policies that do not warrant
/// a dedicated type.
///
/// ```
/// use serde_json::json;
/// use tollgate_core::{Binding, Condition, Context, Predicate};
///
/// let is_adult = Predicate::new("is_adult", Binding::require(["age"]), |ctx| {
///     Ok(ctx.get("age").and_then(|v| v.as_u64()).unwrap_or(0) >= 18)
/// })
/// .with_message("you must be an adult");
///
/// let ctx = Context::new().with("age", json!(17));
/// let verdict = is_adult.run(&ctx).unwrap();
/// assert!(!verdict.passed());
/// assert_eq!(verdict.message(), Some("you must be an adult"));
/// ```
pub struct Predicate<F> {
    label: String,
    binding: Binding,
    message: Option<String>,
    eval: F,
}

impl<F> Predicate<F>
where
    F: Fn(&Context) -> anyhow::Result<bool> + Send + Sync,
{
    pub fn new(label: impl Into<String>, binding: Binding, eval: F) -> Self {
        Predicate {
            label: label.into(),
            binding,
            message: None,
            eval,
        }
    }

    /// Static denial message, replacing the generic default.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<F> Condition for Predicate<F>
where
    F: Fn(&Context) -> anyhow::Result<bool> + Send + Sync,
{
    fn label(&self) -> &str {
        &self.label
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn evaluate(&self, ctx: &Context) -> anyhow::Result<bool> {
        (self.eval)(ctx)
    }

    fn denial_message(&self, _ctx: &Context) -> anyhow::Result<String> {
        Ok(match &self.message {
            Some(message) => message.clone(),
            None => format!("condition '{}' was not satisfied", self.label),
        })
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("label", &self.label)
            .field("binding", &self.binding)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
