use serenc_ir::{
    Declaration, DeclarationId, DeclarationKind, FunctionSignature, Origin,
    Owner, Primitive, Store, Type, Visibility,
};

use crate::{symbol_name, uniq_hash, Error};

fn function(
    store: &mut Store,
    owner: Owner,
    name: &str,
    parameters: Vec<Type>,
    return_type: Type,
) -> DeclarationId {
    store.insert(Declaration::new(
        name.to_string(),
        DeclarationKind::Function(FunctionSignature::new(
            parameters,
            return_type,
            None,
        )),
        owner,
        Origin::Source,
        Visibility::Public,
    ))
}

fn int32() -> Type { Type::Primitive(Primitive::Int32) }

fn text() -> Type { Type::Primitive(Primitive::Text) }

#[test]
fn function_names_spell_owner_signature_and_return() {
    let mut store = Store::new();
    let module = store.add_module("app").unwrap();

    let compute = function(
        &mut store,
        Owner::Module(module),
        "compute",
        vec![int32()],
        Type::Primitive(Primitive::Int64),
    );

    assert_eq!(
        symbol_name(&store, compute).unwrap().0,
        "sfun:app::#compute(int32):int64"
    );
}

#[test]
fn names_are_deterministic() {
    let build = || {
        let mut store = Store::new();
        let module = store.add_module("app").unwrap();
        let id = function(
            &mut store,
            Owner::Module(module),
            "compute",
            vec![int32(), text()],
            int32(),
        );
        symbol_name(&store, id).unwrap()
    };

    assert_eq!(build(), build());
}

#[test]
fn overloads_differing_in_parameters_get_distinct_names() {
    let mut store = Store::new();
    let module = store.add_module("app").unwrap();

    let by_int =
        function(&mut store, Owner::Module(module), "compute", vec![int32()], int32());
    let by_text =
        function(&mut store, Owner::Module(module), "compute", vec![text()], int32());

    let first = symbol_name(&store, by_int).unwrap();
    let second = symbol_name(&store, by_text).unwrap();

    assert_ne!(first, second);
    assert_ne!(uniq_hash(&first), uniq_hash(&second));
}

#[test]
fn extension_receiver_distinguishes_same_named_functions() {
    let mut store = Store::new();
    let module = store.add_module("app").unwrap();

    let member =
        function(&mut store, Owner::Module(module), "size", Vec::new(), int32());
    let extension = store.insert(Declaration::new(
        "size".to_string(),
        DeclarationKind::Function(FunctionSignature::new(
            Vec::new(),
            int32(),
            Some(Type::Named("Buffer".to_string())),
        )),
        Owner::Module(module),
        Origin::Source,
        Visibility::Public,
    ));

    assert_ne!(
        symbol_name(&store, member).unwrap(),
        symbol_name(&store, extension).unwrap()
    );
}

#[test]
fn extension_properties_with_distinct_receivers_get_distinct_names() {
    let mut store = Store::new();
    let module = store.add_module("app").unwrap();

    let on_a = store.insert(Declaration::new(
        "value".to_string(),
        DeclarationKind::Property {
            extension_receiver: Some(Type::Named("A".to_string())),
        },
        Owner::Module(module),
        Origin::Source,
        Visibility::Public,
    ));
    let on_b = store.insert(Declaration::new(
        "value".to_string(),
        DeclarationKind::Property {
            extension_receiver: Some(Type::Named("B".to_string())),
        },
        Owner::Module(module),
        Origin::Source,
        Visibility::Public,
    ));

    let first = symbol_name(&store, on_a).unwrap();
    let second = symbol_name(&store, on_b).unwrap();

    assert_eq!(first.0, "sprop:app::@A::value");
    assert_ne!(first, second);
    assert_ne!(uniq_hash(&first), uniq_hash(&second));
}

#[test]
fn nesting_under_distinct_overloads_yields_distinct_paths() {
    let mut store = Store::new();
    let module = store.add_module("app").unwrap();

    let f_int =
        function(&mut store, Owner::Module(module), "f", vec![int32()], int32());
    let f_text =
        function(&mut store, Owner::Module(module), "f", vec![text()], int32());

    let helper_in_int = function(
        &mut store,
        Owner::Declaration(f_int),
        "helper",
        Vec::new(),
        int32(),
    );
    let helper_in_text = function(
        &mut store,
        Owner::Declaration(f_text),
        "helper",
        Vec::new(),
        int32(),
    );

    let first = symbol_name(&store, helper_in_int).unwrap();
    let second = symbol_name(&store, helper_in_text).unwrap();

    assert_eq!(
        first.0,
        "sfun:app::<sfun:app::#f(int32):int32>::#helper():int32"
    );
    assert_ne!(first, second);
}

#[test]
fn class_members_use_kind_tag_prefixes() {
    let mut store = Store::new();
    let module = store.add_module("app").unwrap();

    let class = store.insert(Declaration::new(
        "Color".to_string(),
        DeclarationKind::Class,
        Owner::Module(module),
        Origin::Source,
        Visibility::Public,
    ));
    let entry = store.insert(Declaration::new(
        "Red".to_string(),
        DeclarationKind::EnumEntry,
        Owner::Declaration(class),
        Origin::Source,
        Visibility::Public,
    ));
    let field = store.insert(Declaration::new(
        "bits".to_string(),
        DeclarationKind::Field,
        Owner::Declaration(class),
        Origin::Source,
        Visibility::Public,
    ));

    assert_eq!(symbol_name(&store, class).unwrap().0, "sclass:app::Color");
    assert_eq!(
        symbol_name(&store, entry).unwrap().0,
        "senumentry:app::Color::Red"
    );
    assert_eq!(
        symbol_name(&store, field).unwrap().0,
        "sfield:app::Color::bits"
    );
}

#[test]
fn unit_scoped_kinds_are_unnameable() {
    let mut store = Store::new();
    let module = store.add_module("app").unwrap();

    let owner =
        function(&mut store, Owner::Module(module), "f", Vec::new(), int32());

    for kind in [
        DeclarationKind::Variable,
        DeclarationKind::TypeParameter,
        DeclarationKind::ValueParameter,
        DeclarationKind::AnonymousInitializer,
    ] {
        let expected = kind.kind_str();
        let id = store.insert(Declaration::new(
            "x".to_string(),
            kind,
            Owner::Declaration(owner),
            Origin::Source,
            Visibility::Private,
        ));

        assert_eq!(
            symbol_name(&store, id).unwrap_err(),
            Error::UnnameableDeclaration { kind: expected }
        );
    }
}

#[test]
fn hashing_the_same_name_twice_is_stable() {
    let mut store = Store::new();
    let module = store.add_module("app").unwrap();

    let id =
        function(&mut store, Owner::Module(module), "f", Vec::new(), int32());
    let name = symbol_name(&store, id).unwrap();

    assert_eq!(uniq_hash(&name), uniq_hash(&name));
}
