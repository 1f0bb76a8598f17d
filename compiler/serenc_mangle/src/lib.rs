//! Derives the canonical mangled names of declarations.
//!
//! A mangled name is deterministic across process runs and collision
//! resistant across distinct declarations of one compiled program: the
//! declaration kind contributes a tag prefix, the ownership chain
//! contributes a fully-qualified owner path, and callable declarations
//! contribute a signature token so that overloads sharing a simple name
//! stay distinguishable. The 64-bit hash of the mangled name is what the
//! declaration table uses as the global identity index of an exported
//! declaration.

use std::{
    fmt::Write,
    hash::Hasher,
};

use derive_more::Deref;
use rustc_hash::FxHasher;
use serenc_ir::{
    DeclarationId, DeclarationKind, Declarations, FunctionSignature, Owner,
};

/// The canonical mangled name of a declaration.
///
/// Kept as a newtype so mangled names are not confused with plain display
/// names.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Deref,
    derive_more::Display,
)]
#[display(fmt = "{}", _0)]
pub struct MangledName(pub String);

/// The error returned by [`symbol_name`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    thiserror::Error,
    displaydoc::Display,
)]
pub enum Error {
    /// the declaration kind `{kind}` has no canonical symbol name
    UnnameableDeclaration {
        /// The description string of the offending kind.
        kind: &'static str,
    },
}

/// Derives the canonical mangled name of the given declaration.
///
/// # Errors
///
/// Returns [`Error::UnnameableDeclaration`] for kinds that only have
/// meaning inside their defining unit (variables, type and value
/// parameters, anonymous initializers) — those never receive a name-derived
/// identity.
pub fn symbol_name<D: Declarations + ?Sized>(
    source: &D,
    declaration: DeclarationId,
) -> Result<MangledName, Error> {
    let prefix = owner_prefix(source, declaration);
    let name = source.simple_name(declaration);

    match source.kind(declaration) {
        DeclarationKind::Function(signature)
        | DeclarationKind::Constructor(signature) => Ok(MangledName(
            function_name(&prefix, name, signature),
        )),

        DeclarationKind::Property { extension_receiver } => {
            let mut mangled = format!("sprop:{prefix}");
            if let Some(receiver) = extension_receiver {
                write!(mangled, "@{receiver}::").unwrap();
            }
            mangled.push_str(name);
            Ok(MangledName(mangled))
        }

        DeclarationKind::Class => Ok(MangledName(format!(
            "sclass:{prefix}{name}"
        ))),

        DeclarationKind::Field => Ok(MangledName(format!(
            "sfield:{prefix}{name}"
        ))),

        DeclarationKind::EnumEntry => Ok(MangledName(format!(
            "senumentry:{prefix}{name}"
        ))),

        kind @ (DeclarationKind::Variable
        | DeclarationKind::TypeParameter
        | DeclarationKind::ValueParameter
        | DeclarationKind::AnonymousInitializer) => {
            Err(Error::UnnameableDeclaration { kind: kind.kind_str() })
        }
    }
}

/// Hashes a mangled name into the 64-bit global identity index space.
///
/// The hash is seedless and therefore stable across process runs; collision
/// probability between distinct exported declarations is accepted as
/// negligible and is not mitigated here.
#[must_use]
pub fn uniq_hash(name: &MangledName) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(name.as_bytes());
    hasher.finish()
}

/// The `sfun:` form shared by functions and constructors:
/// `sfun:OWNER::#name@Receiver(param;param):return`.
fn function_name(
    owner_prefix: &str,
    name: &str,
    signature: &FunctionSignature,
) -> String {
    let mut mangled = format!("sfun:{owner_prefix}#{name}");

    if let Some(receiver) = &signature.extension_receiver {
        write!(mangled, "@{receiver}").unwrap();
    }

    mangled.push('(');
    for (position, parameter) in signature.parameters.iter().enumerate() {
        if position != 0 {
            mangled.push(';');
        }
        write!(mangled, "{parameter}").unwrap();
    }
    mangled.push(')');

    write!(mangled, ":{}", signature.return_type).unwrap();

    mangled
}

/// Renders the fully-qualified owner path of the declaration, with a
/// trailing `::` separator unless the path is empty.
fn owner_prefix<D: Declarations + ?Sized>(
    source: &D,
    declaration: DeclarationId,
) -> String {
    let path = owner_path(source, source.owner_of(declaration));

    if path.is_empty() {
        path
    } else {
        path + "::"
    }
}

/// Walks the ownership chain to the root module.
///
/// A module contributes its own qualified path. A declaration ancestor
/// contributes a disambiguated segment: callables appear in the bracketed
/// full-signature form rather than by simple name, because two different
/// functions may share one — without this, a declaration nested inside the
/// overload `f(int32)` and one nested inside an unrelated `f(text)` would
/// end up with identical paths.
fn owner_path<D: Declarations + ?Sized>(source: &D, owner: Owner) -> String {
    match owner {
        Owner::Module(module) => source.module_path(module).to_string(),

        Owner::Declaration(ancestor) => {
            let prefix = owner_path(source, source.owner_of(ancestor));
            let segment = path_segment(source, ancestor);

            if prefix.is_empty() {
                segment
            } else {
                format!("{prefix}::{segment}")
            }
        }
    }
}

fn path_segment<D: Declarations + ?Sized>(
    source: &D,
    declaration: DeclarationId,
) -> String {
    match source.kind(declaration) {
        DeclarationKind::Function(signature)
        | DeclarationKind::Constructor(signature) => {
            let prefix = owner_prefix(source, declaration);
            format!(
                "<{}>",
                function_name(
                    &prefix,
                    source.simple_name(declaration),
                    signature
                )
            )
        }

        _ => source.simple_name(declaration).to_string(),
    }
}

#[cfg(test)]
mod test;
