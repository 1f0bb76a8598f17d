//! Contains the definition of the [`Type`] references appearing in
//! declaration signatures.

use std::fmt;

use enum_as_inner::EnumAsInner;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Contains all primitive types in the language.
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
    derive_more::Display,
    EnumIter,
)]
#[allow(missing_docs)]
pub enum Primitive {
    #[display(fmt = "int8")]
    Int8,
    #[display(fmt = "int16")]
    Int16,
    #[display(fmt = "int32")]
    Int32,
    #[display(fmt = "int64")]
    Int64,
    #[display(fmt = "uint8")]
    Uint8,
    #[display(fmt = "uint16")]
    Uint16,
    #[display(fmt = "uint32")]
    Uint32,
    #[display(fmt = "uint64")]
    Uint64,
    #[display(fmt = "float32")]
    Float32,
    #[display(fmt = "float64")]
    Float64,
    #[display(fmt = "bool")]
    Bool,
    #[display(fmt = "text")]
    Text,
}

impl Primitive {
    /// Checks if the primitive type is an integer or floating-point number.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Bool | Self::Text)
    }

    /// Checks if the primitive type is a floating-point number.
    #[must_use]
    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }
}

/// A reference to a type appearing in a declaration signature.
///
/// The identity core never inspects type structure; it only renders type
/// references into signature tokens, so a named reference is kept as its
/// qualified spelling.
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
pub enum Type {
    /// A primitive type.
    Primitive(Primitive),

    /// A named type, spelled with its qualified path.
    Named(String),

    /// The top type every value belongs to.
    Any,

    /// The bottom type of expressions that never produce a value.
    Nothing,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(primitive) => primitive.fmt(f),
            Self::Named(path) => f.write_str(path),
            Self::Any => f.write_str("any"),
            Self::Nothing => f.write_str("nothing"),
        }
    }
}
