/// Defects raised while running a condition.
///
/// These are programmer or configuration errors, distinct from a policy
/// denial. Combinators and gates propagate them unchanged and never fold
/// them into a failing verdict.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// A required context key was absent from the bag.
    #[error("condition '{condition}' requires context key '{key}'")]
    MissingContextKey { condition: String, key: String },

    /// A condition's own logic failed instead of producing a boolean.
    #[error("condition '{condition}' failed to evaluate: {cause}")]
    Evaluation {
        condition: String,
        cause: anyhow::Error,
    },
}

impl EvalError {
    pub fn missing_key(condition: impl Into<String>, key: impl Into<String>) -> Self {
        EvalError::MissingContextKey {
            condition: condition.into(),
            key: key.into(),
        }
    }

    pub fn evaluation(condition: impl Into<String>, cause: anyhow::Error) -> Self {
        EvalError::Evaluation {
            condition: condition.into(),
            cause,
        }
    }

    /// Label of the condition the defect originated in.
    pub fn condition(&self) -> &str {
        match self {
            EvalError::MissingContextKey { condition, .. } => condition,
            EvalError::Evaluation { condition, .. } => condition,
        }
    }
}
