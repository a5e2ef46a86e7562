#![allow(dead_code)]

use mimic::{BoxError, Class, InterfaceRegistry, Method, Value};

// ============================================================================
// Test Classes
// ============================================================================

#[derive(Debug)]
pub struct A {
    pub first: String,
    pub last: String,
}

impl Class for A {
    const NAME: &'static str = "A";
}

#[derive(Debug)]
pub struct B {
    pub first: String,
    pub last: String,
}

impl Class for B {
    const NAME: &'static str = "B";
}

#[derive(Debug)]
pub struct C {
    pub serial: u32,
}

impl Class for C {
    const NAME: &'static str = "C";
}

pub const METHODS: [&str; 3] = ["talk", "walk", "getFullName"];

// ============================================================================
// Registry Fixtures
// ============================================================================

fn full_name(this: &Value) -> Result<Value, BoxError> {
    if let Some(a) = this.downcast_ref::<A>() {
        return Ok(format!("{} {}", a.first, a.last).into());
    }
    if let Some(b) = this.downcast_ref::<B>() {
        return Ok(format!("{}, {}", b.last, b.first).into());
    }
    Err("receiver has no name".into())
}

/// The three-class registry: every class implements every method.
pub struct Fixture {
    pub registry: InterfaceRegistry,
    pub a_talk: Method,
    pub b_talk: Method,
    pub c_talk: Method,
    pub default_impl: Method,
    pub data_impl: Method,
}

pub fn fixture() -> Fixture {
    let mut registry = InterfaceRegistry::with_methods(METHODS).unwrap();

    let a_talk = Method::constant("A talks");
    let b_talk = Method::constant("B talks");
    let c_talk = Method::constant("C beeps");

    registry
        .set_implementation(A::type_tag(), "talk", a_talk.clone())
        .unwrap();
    registry
        .set_implementation(A::type_tag(), "walk", Method::constant("A walks"))
        .unwrap();
    registry
        .set_implementation(A::type_tag(), "getFullName", Method::new(|this, _| full_name(this)))
        .unwrap();

    registry
        .set_implementation(B::type_tag(), "talk", b_talk.clone())
        .unwrap();
    registry
        .set_implementation(B::type_tag(), "walk", Method::constant("B walks"))
        .unwrap();
    registry
        .set_implementation(B::type_tag(), "getFullName", Method::new(|this, _| full_name(this)))
        .unwrap();

    registry
        .set_implementation(C::type_tag(), "talk", c_talk.clone())
        .unwrap();
    registry
        .set_implementation(C::type_tag(), "walk", Method::constant("C rolls"))
        .unwrap();
    registry
        .set_implementation(
            C::type_tag(),
            "getFullName",
            Method::new(|this, _| {
                let c = this.downcast_ref::<C>().ok_or("not a C")?;
                Ok(format!("unit-{}", c.serial).into())
            }),
        )
        .unwrap();

    Fixture {
        registry,
        a_talk,
        b_talk,
        c_talk,
        default_impl: Method::constant("default"),
        data_impl: Method::constant("data"),
    }
}

pub fn a(first: &str, last: &str) -> Value {
    Value::instance(A {
        first: first.to_string(),
        last: last.to_string(),
    })
}

pub fn b(first: &str, last: &str) -> Value {
    Value::instance(B {
        first: first.to_string(),
        last: last.to_string(),
    })
}

/// One value of every primitive kind, plus `null`.
pub fn primitives() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::from(true),
        Value::from(4.5),
        Value::from(1_i128 << 100),
        Value::from("plain string"),
        Value::from(mimic::Symbol::new(Some("sym"))),
    ]
}
