//! End-to-end scenarios for the access/execute gating protocol.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};

use tollgate_core::{Binding, Condition, Context, EvalError, Predicate};
use tollgate_engine::{gate, AnyCondition, EveryCondition, Gate, GateError};

fn is_authenticated() -> Box<dyn Condition> {
    Box::new(
        Predicate::new("is_authenticated", Binding::require(["user"]), |ctx| {
            Ok(!ctx.get("user").map(Value::is_null).unwrap_or(true))
        })
        .with_message("you must be signed in"),
    )
}

fn owns_object() -> Box<dyn Condition> {
    Box::new(
        Predicate::new("owns_object", Binding::require(["user", "object"]), |ctx| {
            let user = ctx.get("user").and_then(Value::as_str);
            let owner = ctx
                .get("object")
                .and_then(|o| o.get("owner"))
                .and_then(Value::as_str);
            Ok(user.is_some() && user == owner)
        })
        .with_message("you do not own this object"),
    )
}

fn tracked(label: &str, passes: bool, calls: Arc<AtomicUsize>) -> Box<dyn Condition> {
    let message = format!("{label} failed");
    Box::new(
        Predicate::new(label, Binding::none(), move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(passes)
        })
        .with_message(message),
    )
}

#[test]
fn owner_is_granted() {
    let ctx = Context::new()
        .with("user", json!("u1"))
        .with("object", json!({"id": 4, "owner": "u1"}));
    let result: Result<(), GateError> = gate(
        &ctx,
        &[is_authenticated()],
        &[owns_object()],
        || GateError::NotFound,
        |message| GateError::Forbidden { message },
    );
    assert!(result.is_ok());
}

#[test]
fn non_owner_gets_the_execute_denial_with_reason() {
    let ctx = Context::new()
        .with("user", json!("u1"))
        .with("object", json!({"id": 4, "owner": "u2"}));

    let no_access_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&no_access_calls);
    let result: Result<(), GateError> = gate(
        &ctx,
        &[is_authenticated()],
        &[owns_object()],
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            GateError::NotFound
        },
        |message| GateError::Forbidden { message },
    );

    match result {
        Err(GateError::Forbidden { message }) => {
            assert_eq!(message, "you do not own this object");
        }
        other => panic!("expected forbidden, got {other:?}"),
    }
    assert_eq!(no_access_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn anonymous_caller_learns_nothing() {
    let ctx = Context::new()
        .with("user", json!(null))
        .with("object", json!({"id": 4, "owner": "u2"}));
    let gate = Gate::new(vec![is_authenticated()], vec![owns_object()]);
    match gate.check(&ctx) {
        Err(GateError::NotFound) => {}
        other => panic!("expected not-found, got {other:?}"),
    }
}

#[test]
fn absent_required_key_is_a_defect_not_a_denial() {
    // No `user` key at all: this is a wiring bug, not an anonymous caller.
    let ctx = Context::new().with("object", json!({"id": 4, "owner": "u2"}));
    let gate = Gate::new(vec![is_authenticated()], vec![owns_object()]);
    match gate.check(&ctx) {
        Err(GateError::Defect(EvalError::MissingContextKey { condition, key })) => {
            assert_eq!(condition, "is_authenticated");
            assert_eq!(key, "user");
        }
        other => panic!("expected defect, got {other:?}"),
    }
}

#[test]
fn access_short_circuit_skips_later_conditions() {
    let calls = Arc::new(AtomicUsize::new(0));
    let gate = Gate::new(
        vec![
            tracked("a_fail", false, Arc::clone(&calls)),
            tracked("a_never_called", true, Arc::clone(&calls)),
        ],
        vec![tracked("e_never_called", true, Arc::clone(&calls))],
    );
    assert!(matches!(
        gate.check(&Context::new()),
        Err(GateError::NotFound)
    ));
    // Only the failing access condition ran.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn nested_combinator_computes_but_does_not_surface_inner_messages() {
    // every(any(A=false, B=true), C=true) passes overall; A's message was
    // still rendered while the ANY branch ran.
    struct MessageSpy {
        binding: Binding,
        renders: Arc<AtomicUsize>,
    }

    impl Condition for MessageSpy {
        fn label(&self) -> &str {
            "a"
        }
        fn binding(&self) -> &Binding {
            &self.binding
        }
        fn evaluate(&self, _ctx: &Context) -> anyhow::Result<bool> {
            Ok(false)
        }
        fn denial_message(&self, _ctx: &Context) -> anyhow::Result<String> {
            self.renders.fetch_add(1, Ordering::SeqCst);
            Ok("a failed".to_string())
        }
    }

    let renders = Arc::new(AtomicUsize::new(0));
    let a: Box<dyn Condition> = Box::new(MessageSpy {
        binding: Binding::none(),
        renders: Arc::clone(&renders),
    });
    let b: Box<dyn Condition> = Box::new(Predicate::new("b", Binding::none(), |_| Ok(true)));
    let c: Box<dyn Condition> = Box::new(Predicate::new("c", Binding::none(), |_| Ok(true)));

    let inner: Box<dyn Condition> = Box::new(AnyCondition::new(vec![a, b]));
    let tree = EveryCondition::new(vec![inner, c]);

    let verdict = tree.run(&Context::new()).unwrap();
    assert!(verdict.passed());
    assert!(verdict.message().is_none());
    assert_eq!(renders.load(Ordering::SeqCst), 1);
}

#[test]
fn repeated_gating_is_stable() {
    let ctx = Context::new()
        .with("user", json!("u1"))
        .with("object", json!({"id": 4, "owner": "u2"}));
    let gate = Gate::new(vec![is_authenticated()], vec![owns_object()]);
    let first = gate.decide(&ctx).unwrap();
    let second = gate.decide(&ctx).unwrap();
    assert_eq!(first, second);
}

#[test]
fn execute_group_reports_every_failing_condition() {
    let ctx = Context::new().with("user", json!("u1"));
    let quota: Box<dyn Condition> = Box::new(
        Predicate::new("within_quota", Binding::none(), |_| Ok(false))
            .with_message("quota exhausted"),
    );
    let verified: Box<dyn Condition> = Box::new(
        Predicate::new("email_verified", Binding::none(), |_| Ok(false))
            .with_message("verify your email first"),
    );
    let gate = Gate::new(vec![is_authenticated()], vec![quota, verified]);
    match gate.check(&ctx) {
        Err(GateError::Forbidden { message }) => {
            assert_eq!(message, "quota exhausted\nAND\nverify your email first");
        }
        other => panic!("expected forbidden, got {other:?}"),
    }
}
