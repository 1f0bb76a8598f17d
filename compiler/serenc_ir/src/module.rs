//! Contains the definition of [`Module`].

use serde::{Deserialize, Serialize};

/// One independently compiled translation unit.
///
/// Declarations of a module may be referenced from other units via the
/// global identities derived from their mangled names.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Module {
    /// The `::`-separated qualified path of the module, e.g.
    /// `seren::collections`. The root path is the empty string.
    pub path: String,
}
