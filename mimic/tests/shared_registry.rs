//! A process-wide registry shared between threads.

use lazy_static::lazy_static;
use mimic::{Class, InterfaceRegistry, Method, Predicate, SharedRegistry, Value};
use std::thread;

mod common;
use common::{A, B, C, METHODS, a, b};

lazy_static! {
    static ref REGISTRY: SharedRegistry = InterfaceRegistry::with_methods(METHODS)
        .expect("valid method names")
        .into();
}

#[test]
fn test_threads_register_then_dispatch() {
    let handles: Vec<_> = [
        (A::type_tag(), "A talks"),
        (B::type_tag(), "B talks"),
        (C::type_tag(), "C beeps"),
    ]
    .into_iter()
    .map(|(tag, said)| {
        thread::spawn(move || {
            REGISTRY
                .set_implementation(tag, "talk", Method::constant(said))
                .unwrap();
        })
    })
    .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let fallback = Method::constant("default");
    let data = Method::constant("data");
    let readers: Vec<_> = (0..4)
        .map(|i| {
            let fallback = fallback.clone();
            let data = data.clone();
            thread::spawn(move || {
                let receiver = if i % 2 == 0 {
                    a("Alice", "Liddell")
                } else {
                    b("Bob", "Builder")
                };
                REGISTRY
                    .call(&receiver, "talk", &[], &fallback, &data)
                    .unwrap()
            })
        })
        .collect();

    let said: Vec<Value> = readers.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        said,
        [
            Value::from("A talks"),
            Value::from("B talks"),
            Value::from("A talks"),
            Value::from("B talks"),
        ]
    );
}

#[test]
fn test_shared_classification() {
    let shared: SharedRegistry = InterfaceRegistry::with_methods(METHODS).unwrap().into();
    shared
        .set_is_object_instance(
            B::type_tag(),
            Predicate::new(|v| v.as_record().is_some_and(|r| r.contains_key("last"))),
        )
        .unwrap();

    let record = Value::from(mimic::Record::new().with("last", "Builder"));
    assert!(shared.class_of_object(&record).unwrap().is::<B>());
    assert!(shared.is_object_instance(&record, B::type_tag()).unwrap());
    assert_eq!(
        shared.with(|r| r.registered_types().collect::<Vec<_>>()).unwrap(),
        [B::type_tag()]
    );
}
