use tollgate_core::context::Context;

use crate::gate::{Gate, GateError};

/// Declarative wrapper: gate an action behind derived context.
///
/// Holds a gate, a function that derives the context bag from the raw
/// input, and the action to protect. [`call`](Self::call) derives the
/// context once, runs the gate, and forwards the derived bag into the
/// action so anything looked up during derivation is not recomputed.
pub struct Guarded<D, A> {
    gate: Gate,
    derive: D,
    action: A,
}

impl<D, A> Guarded<D, A> {
    pub fn new(gate: Gate, derive: D, action: A) -> Self {
        Guarded {
            gate,
            derive,
            action,
        }
    }

    pub fn call<In, Out>(&self, input: In) -> Result<Out, GateError>
    where
        D: Fn(&In) -> Context,
        A: Fn(In, &Context) -> Out,
    {
        let ctx = (self.derive)(&input);
        self.gate.check(&ctx)?;
        Ok((self.action)(input, &ctx))
    }
}
