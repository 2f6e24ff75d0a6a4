#![forbid(unsafe_code)]

pub mod combine;
pub mod gate;
pub mod guard;
pub mod handler;
pub mod registry;

pub use combine::{AnyCondition, EveryCondition};
pub use gate::{gate, Gate, GateDecision, GateError};
pub use guard::Guarded;
pub use handler::{GatedHandler, OBJECT_KEY};
pub use registry::{ConditionRegistry, RegistryError};
