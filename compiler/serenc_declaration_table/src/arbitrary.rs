//! Arbitrary implementations for the identity value types.

use proptest::{
    option,
    prelude::{Arbitrary, BoxedStrategy, Strategy},
};
use serenc_ir::ModuleId;

use crate::{UniqId, UniqIdKey};

impl Arbitrary for UniqId {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (u64::arbitrary(), bool::arbitrary())
            .prop_map(|(index, is_local)| Self::new(index, is_local))
            .boxed()
    }
}

impl Arbitrary for UniqIdKey {
    type Strategy = BoxedStrategy<Self>;
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (option::of(ModuleId::arbitrary()), UniqId::arbitrary())
            .prop_map(|(module, uniq_id)| Self::new(module, uniq_id))
            .boxed()
    }
}
