//! Contains the definition of [`Declaration`] and its classifying
//! components.

use derive_new::new;
use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};
use serenc_arena::ID;

use crate::{r#type::Type, Module};

/// Describes where a declaration came from.
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
pub enum Origin {
    /// Written by the user in a source file.
    Source,

    /// An override member introduced by the compiler rather than written by
    /// the user. Never visible outside the unit that synthesized it.
    SyntheticOverride,
}

/// The visibility of a declaration as determined by the front-end.
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
pub enum Visibility {
    /// Visible and linkable from other translation units.
    Public,

    /// Visible within the current compilation only.
    Internal,

    /// Visible within the enclosing declaration only.
    Private,
}

/// The parent link of a declaration.
///
/// Every declaration has exactly one owner, and following owners always
/// terminates at a [`Module`] (the top-level unit).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumAsInner,
    Serialize,
    Deserialize,
)]
pub enum Owner {
    /// The declaration is a top-level member of the module.
    Module(ID<Module>),

    /// The declaration is nested inside another declaration.
    Declaration(ID<Declaration>),
}

/// The callable signature of a function or constructor declaration.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize, new,
)]
pub struct FunctionSignature {
    /// The types of the value parameters, in declaration order.
    pub parameters: Vec<Type>,

    /// The return type.
    pub return_type: Type,

    /// The receiver type when the callable is an extension, `None` for
    /// ordinary members and free functions.
    pub extension_receiver: Option<Type>,
}

/// An enumeration of the different kinds of declarations the front-end
/// produces.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumAsInner,
    Serialize,
    Deserialize,
)]
#[allow(missing_docs)]
pub enum DeclarationKind {
    Function(FunctionSignature),
    Constructor(FunctionSignature),
    Property {
        /// The receiver type when the property is an extension.
        extension_receiver: Option<Type>,
    },
    Class,
    Field,
    EnumEntry,
    Variable,
    TypeParameter,
    ValueParameter,
    AnonymousInitializer,
}

impl DeclarationKind {
    /// Gets the description string of the kind.
    #[must_use]
    pub const fn kind_str(&self) -> &'static str {
        match self {
            Self::Function(_) => "function",
            Self::Constructor(_) => "constructor",
            Self::Property { .. } => "property",
            Self::Class => "class",
            Self::Field => "field",
            Self::EnumEntry => "enum entry",
            Self::Variable => "variable",
            Self::TypeParameter => "type parameter",
            Self::ValueParameter => "value parameter",
            Self::AnonymousInitializer => "anonymous initializer",
        }
    }

    /// Checks if this kind of declaration carries a callable signature.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_) | Self::Constructor(_))
    }

    /// Checks if this kind of declaration only has meaning inside the unit
    /// that declares it, regardless of visibility.
    #[must_use]
    pub const fn is_unit_scoped(&self) -> bool {
        matches!(
            self,
            Self::Variable
                | Self::TypeParameter
                | Self::ValueParameter
                | Self::AnonymousInitializer
        )
    }

    /// Returns the callable signature of the kind, if it has one.
    #[must_use]
    pub const fn signature(&self) -> Option<&FunctionSignature> {
        match self {
            Self::Function(signature) | Self::Constructor(signature) => {
                Some(signature)
            }
            _ => None,
        }
    }
}

/// A named program entity produced by front-end analysis.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize, new,
)]
pub struct Declaration {
    /// The simple name of the declaration.
    pub name: String,

    /// The kind of the declaration.
    pub kind: DeclarationKind,

    /// The parent link of the declaration.
    pub owner: Owner,

    /// Where the declaration came from.
    pub origin: Origin,

    /// The visibility of the declaration.
    pub visibility: Visibility,
}
