//! Registration of the compiler-known built-in operator declarations.
//!
//! The declaration table reserves the first block of identity indices for
//! these declarations, so their registration order here is part of the
//! serialization contract and must stay fixed.

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    declaration::{
        Declaration, DeclarationKind, FunctionSignature, Origin, Owner,
        Visibility,
    },
    r#type::{Primitive, Type},
    DeclarationId, Store,
};

/// The comparison operators registered per numeric operand type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    derive_more::Display,
)]
#[allow(missing_docs)]
pub enum CompareKind {
    #[display(fmt = "less")]
    Less,
    #[display(fmt = "less_or_equal")]
    LessOrEqual,
    #[display(fmt = "greater_or_equal")]
    GreaterOrEqual,
    #[display(fmt = "greater")]
    Greater,
}

fn operator(
    store: &mut Store,
    name: &str,
    signature: FunctionSignature,
) -> DeclarationId {
    let core = store.core_module();
    store.insert(Declaration::new(
        name.to_string(),
        DeclarationKind::Function(signature),
        Owner::Module(core),
        Origin::Source,
        Visibility::Public,
    ))
}

fn binary(operand: Type, result: Type) -> FunctionSignature {
    FunctionSignature::new(vec![operand.clone(), operand], result, None)
}

/// Registers every built-in operator declaration into the `store` and
/// returns their ids in the fixed enumeration order.
pub(crate) fn register(store: &mut Store) -> Vec<DeclarationId> {
    let mut ids = Vec::new();

    // comparison operators, one overload per numeric operand type
    for kind in CompareKind::iter() {
        for operand in Primitive::iter().filter(|x| x.is_numeric()) {
            ids.push(operator(
                store,
                &kind.to_string(),
                binary(
                    Type::Primitive(operand),
                    Type::Primitive(Primitive::Bool),
                ),
            ));
        }
    }

    // IEEE 754 equality is only meaningful for floating-point operands
    for operand in Primitive::iter().filter(|x| x.is_floating_point()) {
        ids.push(operator(
            store,
            "ieee_equals",
            binary(Type::Primitive(operand), Type::Primitive(Primitive::Bool)),
        ));
    }

    ids.push(operator(
        store,
        "reference_equals",
        binary(Type::Any, Type::Primitive(Primitive::Bool)),
    ));
    ids.push(operator(
        store,
        "structural_equals",
        binary(Type::Any, Type::Primitive(Primitive::Bool)),
    ));
    ids.push(operator(
        store,
        "not",
        FunctionSignature::new(
            vec![Type::Primitive(Primitive::Bool)],
            Type::Primitive(Primitive::Bool),
            None,
        ),
    ));
    ids.push(operator(
        store,
        "null_assertion_failure",
        FunctionSignature::new(Vec::new(), Type::Nothing, None),
    ));
    ids.push(operator(
        store,
        "unhandled_branch_failure",
        FunctionSignature::new(Vec::new(), Type::Nothing, None),
    ));
    ids.push(operator(
        store,
        "enum_value_of",
        FunctionSignature::new(
            vec![Type::Primitive(Primitive::Text)],
            Type::Any,
            None,
        ),
    ));
    ids.push(operator(
        store,
        "record_array_member_to_text",
        FunctionSignature::new(
            vec![Type::Any],
            Type::Primitive(Primitive::Text),
            None,
        ),
    ));
    ids.push(operator(
        store,
        "record_array_member_hash",
        FunctionSignature::new(
            vec![Type::Any],
            Type::Primitive(Primitive::Int64),
            None,
        ),
    ));

    ids
}
