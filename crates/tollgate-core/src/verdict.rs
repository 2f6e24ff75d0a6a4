use serde::Serialize;

use crate::context::Context;

/// Immutable outcome of running one condition against a context.
///
/// A message is present exactly when the verdict failed; the two
/// constructors are the only way to build one, so the invariant holds by
/// construction. `source` is the label of the producing condition and
/// `context` is a read-only snapshot of the bag the run used, kept for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    passed: bool,
    message: Option<String>,
    source: String,
    context: Context,
}

impl Verdict {
    pub fn pass(source: impl Into<String>, context: Context) -> Self {
        Verdict {
            passed: true,
            message: None,
            source: source.into(),
            context,
        }
    }

    pub fn fail(source: impl Into<String>, message: impl Into<String>, context: Context) -> Self {
        Verdict {
            passed: false,
            message: Some(message.into()),
            source: source.into(),
            context,
        }
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Denial explanation; `None` exactly when the verdict passed.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn context(&self) -> &Context {
        &self.context
    }
}
