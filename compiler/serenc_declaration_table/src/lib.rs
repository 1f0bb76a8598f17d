//! Contains the definition of [`DeclarationTable`], the allocator of the
//! identities under which the compiled-module serializer references
//! declarations across translation units.
//!
//! Exported declarations receive a *global* identity derived from the hash
//! of their canonical mangled name, so every unit that references such a
//! declaration arrives at the same identity independently. Everything else
//! receives a *local* identity from a per-session counter: unique within
//! the current compilation, cheap to mint, and never compared against
//! global identities without also comparing the locality flag.

use std::collections::HashMap;

use derive_new::new;
use getset::Getters;
use serde::{Deserialize, Serialize};
use serenc_ir::{DeclarationId, Declarations, DescriptorId, ModuleId, Origin};
use serenc_mangle::{symbol_name, uniq_hash};

pub mod descriptor;
pub mod unique;

mod arbitrary;

pub use descriptor::DescriptorTable;

/// The identity of a declaration as persisted by the serializer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    new,
)]
pub struct UniqId {
    /// Unique within the set of identities ever minted by one
    /// [`DeclarationTable`] instance for a given locality class. Local and
    /// non-local identities may share numeric values.
    pub index: u64,

    /// Whether the identity is only meaningful within the compilation unit
    /// that minted it.
    pub is_local: bool,
}

/// A [`UniqId`] disambiguated by the module that minted it.
///
/// Local identity indices are only unique within one module's compilation,
/// so a key pairs them with that module. A non-local identity is globally
/// meaningful by construction and never carries one — the constructor
/// forces the module to `None` for them, which makes the derived equality
/// exactly the required partition: local keys compare module and identity,
/// non-local keys compare identity alone.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct UniqIdKey {
    uniq_id: UniqId,
    module: Option<ModuleId>,
}

impl UniqIdKey {
    /// Creates a new [`UniqIdKey`], discarding the module unless the
    /// identity is local.
    #[must_use]
    pub const fn new(module: Option<ModuleId>, uniq_id: UniqId) -> Self {
        Self { uniq_id, module: if uniq_id.is_local { module } else { None } }
    }

    /// Returns the identity of the key.
    #[must_use]
    pub const fn uniq_id(&self) -> UniqId { self.uniq_id }

    /// Returns the minting module of a local identity, `None` for
    /// non-local identities.
    #[must_use]
    pub const fn module(&self) -> Option<ModuleId> { self.module }
}

/// The error returned by [`DeclarationTable`] operations.
///
/// Every variant is a consistency violation: the session that produced it
/// is corrupt and must be aborted, not retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Two distinct declarations resolved to one identity — either the
    /// caller re-derived a name inconsistently, or two exported
    /// declarations collided in the 64-bit hash space. The collision is
    /// surfaced, not resolved.
    #[error(
        "identity {identity:?} is already assigned to {existing:?}, \
         rejecting {new:?}"
    )]
    IdentityConflict {
        /// The identity both declarations resolved to.
        identity: UniqId,

        /// The declaration the identity was first assigned to.
        existing: DeclarationId,

        /// The rejected declaration.
        new: DeclarationId,
    },

    /// A descriptor was recorded a second time with a different index.
    #[error(
        "descriptor {descriptor:?} is already recorded with index \
         {existing}, rejecting {new}"
    )]
    DescriptorConflict {
        /// The descriptor handle.
        descriptor: DescriptorId,

        /// The index the descriptor was first recorded with.
        existing: u64,

        /// The rejected index.
        new: u64,
    },

    /// Naming was requested for a declaration kind that has no naming
    /// rule.
    #[error(transparent)]
    Unnameable(#[from] serenc_mangle::Error),
}

/// Assigns an identity to every declaration of one compilation session.
///
/// Created once all built-in operator declarations are known and dropped at
/// session end; only the identities it minted outlive it, persisted by the
/// external serializer.
#[derive(Debug, Getters)]
pub struct DeclarationTable {
    forward: HashMap<DeclarationId, UniqId>,

    /// The identity-to-declaration view, kept for tooling; correctness
    /// never depends on it, but its write-once check is what surfaces a
    /// same-session hash collision.
    #[get = "pub"]
    reverse: unique::UniqueMap<UniqId, DeclarationId>,

    /// Human-readable descriptions of minted identities, for debugging
    /// only. Last write wins.
    #[get = "pub"]
    textual: HashMap<UniqId, String>,

    /// The descriptor cross-reference table.
    #[get = "pub"]
    descriptors: DescriptorTable,

    current_index: u64,
}

impl DeclarationTable {
    /// Creates a new [`DeclarationTable`] with the given built-in operator
    /// declarations pre-registered.
    ///
    /// The built-ins receive sequential non-local indices starting at 0 in
    /// iteration order, before anything else is indexed, so they keep
    /// small, stable indices independent of any particular compiled
    /// program.
    #[must_use]
    pub fn new(
        known_builtins: impl IntoIterator<Item = DeclarationId>,
    ) -> Self {
        let mut table = Self {
            forward: HashMap::new(),
            reverse: unique::UniqueMap::new(),
            textual: HashMap::new(),
            descriptors: DescriptorTable::new(),
            current_index: 0,
        };

        for builtin in known_builtins {
            let identity = UniqId::new(table.current_index, false);
            table.current_index += 1;
            table.forward.insert(builtin, identity);
        }

        log::debug!(
            "reserved {} identity indices for built-in declarations",
            table.current_index
        );

        table
    }

    /// Returns the identity of the declaration, minting one on first
    /// sight.
    ///
    /// Identity assignment is idempotent per declaration per table
    /// instance: repeated calls return the first identity unchanged. A
    /// declaration is classified local when the compiler synthesized it as
    /// an override, when the front-end does not export it, or when its
    /// kind has no meaning outside its defining unit; everything else
    /// receives the hash of its canonical mangled name as a global
    /// identity.
    ///
    /// # Errors
    ///
    /// See [`IndexError`].
    pub fn index_of<D: Declarations + ?Sized>(
        &mut self,
        source: &D,
        declaration: DeclarationId,
    ) -> Result<UniqId, IndexError> {
        if let Some(existing) = self.forward.get(&declaration) {
            return Ok(*existing);
        }

        let kind = source.kind(declaration);
        let is_local = source.origin(declaration) == Origin::SyntheticOverride
            || !source.is_exported(declaration)
            || kind.is_unit_scoped();

        let (identity, mangled) = if is_local {
            let identity = UniqId::new(self.current_index, true);
            self.current_index += 1;
            (identity, None)
        } else {
            let mangled = symbol_name(source, declaration)?;
            (UniqId::new(uniq_hash(&mangled), false), Some(mangled))
        };

        self.forward.insert(declaration, identity);

        self.reverse.insert_unique(identity, declaration).map_err(
            |conflict| IndexError::IdentityConflict {
                identity,
                existing: conflict.existing,
                new: conflict.new,
            },
        )?;

        let description = match &mangled {
            Some(name) => format!(
                "{name} {} `{}`",
                kind.kind_str(),
                source.simple_name(declaration)
            ),
            None => format!(
                "{} `{}`",
                kind.kind_str(),
                source.simple_name(declaration)
            ),
        };
        self.textual.insert(identity, description);

        log::trace!(
            "minted {identity:?} for {} `{}`",
            kind.kind_str(),
            source.simple_name(declaration)
        );

        Ok(identity)
    }

    /// Records the identity index that canonically belongs to the
    /// declaration the descriptor refers to.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::DescriptorConflict`] when the descriptor was
    /// already recorded with a different index.
    pub fn record_descriptor(
        &mut self,
        descriptor: DescriptorId,
        uniq_id: UniqId,
    ) -> Result<(), IndexError> {
        self.descriptors.record(descriptor, uniq_id).map_err(|conflict| {
            IndexError::DescriptorConflict {
                descriptor,
                existing: conflict.existing,
                new: conflict.new,
            }
        })
    }

    /// Returns the number of declarations that have been assigned an
    /// identity, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize { self.forward.len() }

    /// Returns `true` if no declaration has been assigned an identity.
    ///
    /// Only possible for a table constructed over an empty built-in set.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.forward.is_empty() }
}
