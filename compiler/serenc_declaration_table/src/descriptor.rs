//! Contains the definition of [`DescriptorTable`].

use serenc_ir::DescriptorId;

use crate::{
    unique::{Conflict, UniqueMap},
    UniqId,
};

/// Ties front-end descriptors to identity indices minted elsewhere.
///
/// The serializer discovers some declarations twice: once as a declaration
/// in the store and once as a descriptor in the front-end's symbol table.
/// Recording the already-assigned index under the descriptor handle keeps
/// both views pointing at one identity without re-deriving the name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescriptorTable {
    descriptors: UniqueMap<DescriptorId, u64>,
}

impl DescriptorTable {
    /// Creates a new empty [`DescriptorTable`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Records the identity index of the declaration the descriptor refers
    /// to. Recording the same index again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Conflict`] when the descriptor was already recorded with a
    /// different index — a logic defect in identity assignment, treated by
    /// callers as unrecoverable for the session.
    pub fn record(
        &mut self,
        descriptor: DescriptorId,
        uniq_id: UniqId,
    ) -> Result<(), Conflict<u64>> {
        self.descriptors.insert_unique(descriptor, uniq_id.index)
    }

    /// Checks if the descriptor has been recorded.
    #[must_use]
    pub fn contains(&self, descriptor: DescriptorId) -> bool {
        self.descriptors.contains_key(&descriptor)
    }

    /// Returns the number of recorded descriptors.
    #[must_use]
    pub fn len(&self) -> usize { self.descriptors.len() }

    /// Returns `true` if no descriptor has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.descriptors.is_empty() }
}
