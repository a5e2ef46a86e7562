use mimic::{
    Class, INSTANCE_PREDICATE, Interface, InterfaceError, InterfaceRegistry, Method, Predicate,
    RegistryBuilder, Value,
};

mod common;
use common::{A, METHODS};

#[test]
fn test_accepts_exactly_declared_names() {
    let declared_sets: [&[&str]; 4] = [
        &[],
        &["talk"],
        &METHODS,
        &["talk", "talk", "walk", ""],
    ];
    let probes = ["talk", "walk", "getFullName", "fly", "TALK", "", INSTANCE_PREDICATE];

    for declared in declared_sets {
        let mut registry = InterfaceRegistry::with_methods(declared.iter().copied()).unwrap();
        for probe in probes {
            let result = registry.set_implementation(A::type_tag(), probe, Method::constant(0));
            if declared.contains(&probe) || probe == INSTANCE_PREDICATE {
                assert!(result.is_ok(), "{probe} should be accepted by {declared:?}");
            } else {
                assert!(
                    matches!(result, Err(InterfaceError::InvalidArgument(_))),
                    "{probe} should be rejected by {declared:?}"
                );
            }
        }
    }
}

#[test]
fn test_interface_is_shared_and_frozen() {
    let iface = Interface::new(METHODS).unwrap();
    let first = InterfaceRegistry::new(iface.clone());
    let second = InterfaceRegistry::new(iface.clone());
    assert_eq!(first.interface(), second.interface());
    assert_eq!(iface.len(), METHODS.len() + 1);
    assert_eq!(iface.predicate_name(), INSTANCE_PREDICATE);
}

#[test]
fn test_empty_method_name_is_declared() {
    let mut registry = InterfaceRegistry::with_methods(["talk", ""]).unwrap();
    assert!(registry.interface().contains(""));
    registry
        .set_implementation(A::type_tag(), "", Method::constant("anonymous"))
        .unwrap();
    assert!(registry.implements(&A::type_tag(), ""));

    let err = registry
        .set_implementation(A::type_tag(), " ", Method::constant(0))
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_registration_through_class_values() {
    let mut registry = InterfaceRegistry::with_methods(METHODS).unwrap();
    registry
        .set_implementation(Value::class::<A>(), "walk", Method::constant("A walks"))
        .unwrap();
    registry
        .set_is_object_instance(&Value::class::<A>(), Predicate::new(|_| false))
        .unwrap();
    assert!(registry.implements(&A::type_tag(), "walk"));
    assert!(registry.implements(&A::type_tag(), INSTANCE_PREDICATE));

    let err = registry
        .set_is_object_instance(&Value::from(42), Predicate::new(|_| true))
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_builder_round() {
    let registry = RegistryBuilder::new(Interface::new(METHODS).unwrap())
        .implement(A::type_tag(), "talk", Method::constant("hi"))
        .implement(A::type_tag(), "walk", Method::constant("step"))
        .predicate(A::type_tag(), Predicate::new(|v| v.as_record().is_some()))
        .build()
        .unwrap();

    let table = registry.method_table(&A::type_tag()).unwrap();
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        [INSTANCE_PREDICATE, "talk", "walk"]
    );
    assert!(!table.contains("getFullName"));
}
