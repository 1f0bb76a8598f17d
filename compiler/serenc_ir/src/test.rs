use strum::IntoEnumIterator;

use crate::{
    builtin::CompareKind,
    declaration::{Declaration, DeclarationKind, Origin, Owner, Visibility},
    r#type::{Primitive, Type},
    Declarations, Store, CORE_MODULE_PATH,
};

#[test]
fn builtins_are_registered_up_front() {
    let store = Store::new();

    let numeric_count = Primitive::iter().filter(|x| x.is_numeric()).count();
    let floating_count =
        Primitive::iter().filter(|x| x.is_floating_point()).count();
    let expected = CompareKind::iter().count() * numeric_count
        + floating_count
        + 8;

    assert_eq!(store.known_builtins().len(), expected);

    // the first registered builtin is `less` over the first numeric operand
    let first = store.known_builtins()[0];
    assert_eq!(store.simple_name(first), "less");
    assert_eq!(
        store.kind(first).signature().unwrap().parameters,
        vec![
            Type::Primitive(Primitive::Int8),
            Type::Primitive(Primitive::Int8)
        ]
    );

    for &id in store.known_builtins() {
        let declaration = store.get(id).unwrap();

        assert_eq!(declaration.origin, Origin::Source);
        assert_eq!(declaration.visibility, Visibility::Public);
        assert_eq!(declaration.owner, Owner::Module(store.core_module()));
        assert!(declaration.kind.is_callable());
    }
}

#[test]
fn duplicate_module_path_is_rejected() {
    let mut store = Store::new();

    let first = store.add_module("app").unwrap();
    let error = store.add_module("app").unwrap_err();

    assert_eq!(error.path, "app");
    assert_eq!(error.existing, first);

    // the core module path is taken by `Store::new` itself
    assert!(store.add_module(CORE_MODULE_PATH).is_err());
}

#[test]
fn owner_walk_terminates_at_a_module() {
    let mut store = Store::new();
    let module = store.add_module("app").unwrap();

    let class = store.insert(Declaration::new(
        "Session".to_string(),
        DeclarationKind::Class,
        Owner::Module(module),
        Origin::Source,
        Visibility::Public,
    ));
    let field = store.insert(Declaration::new(
        "token".to_string(),
        DeclarationKind::Field,
        Owner::Declaration(class),
        Origin::Source,
        Visibility::Private,
    ));

    let mut owner = store.owner_of(field);
    let mut steps = 0;
    while let Owner::Declaration(parent) = owner {
        owner = store.owner_of(parent);
        steps += 1;
    }

    assert_eq!(steps, 1);
    assert_eq!(owner, Owner::Module(module));
}

#[test]
fn exported_predicate_follows_visibility() {
    let mut store = Store::new();
    let module = store.add_module("app").unwrap();

    for (visibility, expected) in [
        (Visibility::Public, true),
        (Visibility::Internal, false),
        (Visibility::Private, false),
    ] {
        let id = store.insert(Declaration::new(
            "value".to_string(),
            DeclarationKind::Property { extension_receiver: None },
            Owner::Module(module),
            Origin::Source,
            visibility,
        ));

        assert_eq!(store.is_exported(id), expected);
    }
}
