#![forbid(unsafe_code)]

pub mod binding;
pub mod condition;
pub mod context;
pub mod errors;
pub mod predicate;
pub mod verdict;

pub use binding::Binding;
pub use condition::Condition;
pub use context::Context;
pub use errors::EvalError;
pub use predicate::Predicate;
pub use verdict::Verdict;
