use tollgate_core::binding::Binding;
use tollgate_core::condition::Condition;
use tollgate_core::context::Context;
use tollgate_core::errors::EvalError;
use tollgate_core::verdict::Verdict;

/// Separator between failing-child messages under ALL semantics.
pub const AND_SEPARATOR: &str = "\nAND\n";
/// Separator between failing-child messages under ANY semantics.
pub const OR_SEPARATOR: &str = "\nOR\n";

/// Per-child outcomes of one combinator pass.
///
/// Every child runs exactly once, in declaration order, with no
/// short-circuit: the aggregate message has to name every failing child,
/// not just the first. Child defects abort the pass unchanged.
struct Assessment {
    passes: Vec<bool>,
    failures: Vec<String>,
}

fn assess(children: &[Box<dyn Condition>], ctx: &Context) -> Result<Assessment, EvalError> {
    let mut passes = Vec::with_capacity(children.len());
    let mut failures = Vec::new();
    for child in children {
        let verdict = child.run(ctx)?;
        if let Some(message) = verdict.message() {
            failures.push(message.to_string());
        }
        passes.push(verdict.passed());
    }
    Ok(Assessment { passes, failures })
}

/// Run a sequence under ALL semantics without building a combinator.
///
/// Returns the aggregate pass flag and the joined failure message; this
/// is the same assessment [`EveryCondition`] performs over its children.
pub(crate) fn assess_all(
    children: &[Box<dyn Condition>],
    ctx: &Context,
) -> Result<(bool, String), EvalError> {
    let assessment = assess(children, ctx)?;
    Ok((
        assessment.passes.iter().all(|p| *p),
        assessment.failures.join(AND_SEPARATOR),
    ))
}

/// ALL-combinator: passes when every child passes.
///
/// Children may themselves be combinators, nesting into an arbitrary
/// tree evaluated post-order. The binding is catch-all; each child
/// re-projects the bag through its own binding. An empty child list
/// passes, the boolean-algebra convention for `all`.
pub struct EveryCondition {
    label: String,
    binding: Binding,
    children: Vec<Box<dyn Condition>>,
}

impl EveryCondition {
    pub fn new(children: Vec<Box<dyn Condition>>) -> Self {
        EveryCondition {
            label: "every".to_string(),
            binding: Binding::catch_all(),
            children,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl Condition for EveryCondition {
    fn label(&self) -> &str {
        &self.label
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn evaluate(&self, ctx: &Context) -> anyhow::Result<bool> {
        let assessment = assess(&self.children, ctx)?;
        Ok(assessment.passes.iter().all(|p| *p))
    }

    fn denial_message(&self, ctx: &Context) -> anyhow::Result<String> {
        let assessment = assess(&self.children, ctx)?;
        Ok(assessment.failures.join(AND_SEPARATOR))
    }

    // Overridden so children run once per call and child defects
    // propagate unchanged.
    fn run(&self, ctx: &Context) -> Result<Verdict, EvalError> {
        let (passed, message) = assess_all(&self.children, ctx)?;
        if passed {
            Ok(Verdict::pass(self.label(), ctx.clone()))
        } else {
            Ok(Verdict::fail(self.label(), message, ctx.clone()))
        }
    }
}

/// ANY-combinator: passes when at least one child passes.
///
/// Evaluation still touches every child, so a failing verdict can list
/// every alternative that was refused. An empty child list fails, the
/// boolean-algebra convention for `any`; its aggregate message is empty.
pub struct AnyCondition {
    label: String,
    binding: Binding,
    children: Vec<Box<dyn Condition>>,
}

impl AnyCondition {
    pub fn new(children: Vec<Box<dyn Condition>>) -> Self {
        AnyCondition {
            label: "any".to_string(),
            binding: Binding::catch_all(),
            children,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl Condition for AnyCondition {
    fn label(&self) -> &str {
        &self.label
    }

    fn binding(&self) -> &Binding {
        &self.binding
    }

    fn evaluate(&self, ctx: &Context) -> anyhow::Result<bool> {
        let assessment = assess(&self.children, ctx)?;
        Ok(assessment.passes.iter().any(|p| *p))
    }

    fn denial_message(&self, ctx: &Context) -> anyhow::Result<String> {
        let assessment = assess(&self.children, ctx)?;
        Ok(assessment.failures.join(OR_SEPARATOR))
    }

    fn run(&self, ctx: &Context) -> Result<Verdict, EvalError> {
        let assessment = assess(&self.children, ctx)?;
        if assessment.passes.iter().any(|p| *p) {
            Ok(Verdict::pass(self.label(), ctx.clone()))
        } else {
            Ok(Verdict::fail(
                self.label(),
                assessment.failures.join(OR_SEPARATOR),
                ctx.clone(),
            ))
        }
    }
}
