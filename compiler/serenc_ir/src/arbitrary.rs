//! Arbitrary implementations for the declaration components.

use proptest::{
    collection::vec,
    option,
    prelude::{Arbitrary, BoxedStrategy, Just, Strategy},
    prop_oneof, sample,
};
use strum::IntoEnumIterator;

use crate::{
    declaration::{FunctionSignature, Origin, Visibility},
    r#type::{Primitive, Type},
};

impl Arbitrary for Primitive {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        sample::select(Self::iter().collect::<Vec<_>>()).boxed()
    }
}

impl Arbitrary for Type {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Primitive::arbitrary().prop_map(Self::Primitive),
            "[A-Z][a-zA-Z]{0,8}".prop_map(Self::Named),
            Just(Self::Any),
            Just(Self::Nothing),
        ]
        .boxed()
    }
}

impl Arbitrary for FunctionSignature {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (
            vec(Type::arbitrary(), 0..4),
            Type::arbitrary(),
            option::of(Type::arbitrary()),
        )
            .prop_map(|(parameters, return_type, extension_receiver)| {
                Self::new(parameters, return_type, extension_receiver)
            })
            .boxed()
    }
}

impl Arbitrary for Origin {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![Just(Self::Source), Just(Self::SyntheticOverride)].boxed()
    }
}

impl Arbitrary for Visibility {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Self::Public),
            Just(Self::Internal),
            Just(Self::Private),
        ]
        .boxed()
    }
}
