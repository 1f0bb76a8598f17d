//! Contains the declaration model the identity core consumes: modules,
//! declarations and their classifying components, the arena-backed
//! [`Store`], and the narrow [`Declarations`] capability trait through
//! which the namer and the declaration table observe the front-end.

use getset::CopyGetters;
use serenc_arena::{Arena, Map, ID};

pub mod builtin;
pub mod declaration;
pub mod module;
pub mod r#type;

mod arbitrary;

pub use declaration::{
    Declaration, DeclarationKind, FunctionSignature, Origin, Owner,
    Visibility,
};
pub use module::Module;
pub use r#type::{Primitive, Type};

/// The id of a [`Declaration`] inside a [`Store`].
pub type DeclarationId = ID<Declaration>;

/// The id of a [`Module`] inside a [`Store`].
pub type ModuleId = ID<Module>;

/// An opaque marker for the front-end's descriptor representation of a
/// declaration.
///
/// The front-end describes some declarations twice: once as a declaration
/// in this store and once as a descriptor in its own symbol table.
/// [`ID<Descriptor>`] is the handle under which the second representation
/// is cross-referenced; this core never looks inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Descriptor {}

/// The id of a front-end [`Descriptor`].
pub type DescriptorId = ID<Descriptor>;

/// The qualified path of the core module holding the built-in operator
/// declarations.
pub const CORE_MODULE_PATH: &str = "seren";

/// The error returned by [`Store::add_module`] when the path is already
/// registered.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error,
)]
#[error("the module path `{path}` is already registered")]
pub struct DuplicateModule {
    /// The rejected path.
    pub path: String,

    /// The module already registered under the path.
    pub existing: ModuleId,
}

/// The capabilities a declaration source must supply to the identity core.
///
/// The namer and the declaration table only observe declarations through
/// this trait, so any tree-shaped or arena-backed declaration store can
/// drive them.
///
/// Every method panics when given an id that was not produced by this
/// source.
pub trait Declarations {
    /// Returns the simple name of the declaration.
    fn simple_name(&self, declaration: DeclarationId) -> &str;

    /// Returns the kind of the declaration.
    fn kind(&self, declaration: DeclarationId) -> &DeclarationKind;

    /// Returns the parent link of the declaration.
    fn owner_of(&self, declaration: DeclarationId) -> Owner;

    /// Returns the origin classification of the declaration.
    fn origin(&self, declaration: DeclarationId) -> Origin;

    /// Checks if the declaration is visible and linkable outside its
    /// defining unit.
    fn is_exported(&self, declaration: DeclarationId) -> bool;

    /// Returns the qualified path of the module.
    fn module_path(&self, module: ModuleId) -> &str;
}

/// The arena-backed container of every module and declaration known to the
/// current compilation session.
#[derive(Debug, CopyGetters)]
pub struct Store {
    modules: Map<Module>,
    declarations: Arena<Declaration>,
    builtins: Vec<DeclarationId>,

    /// The module holding the built-in operator declarations.
    #[get_copy = "pub"]
    core_module: ModuleId,
}

impl Store {
    /// Creates a new [`Store`] with the core module and every built-in
    /// operator declaration already registered.
    #[must_use]
    pub fn new() -> Self {
        let mut store = Self {
            modules: Map::new(),
            declarations: Arena::new(),
            builtins: Vec::new(),
            core_module: ID::new(0),
        };

        store.core_module = store.add_module(CORE_MODULE_PATH).unwrap();
        store.builtins = builtin::register(&mut store);

        store
    }

    /// Registers a new module under the given qualified path.
    ///
    /// # Errors
    ///
    /// See [`DuplicateModule`].
    pub fn add_module(
        &mut self,
        path: impl Into<String>,
    ) -> Result<ModuleId, DuplicateModule> {
        let path = path.into();

        self.modules
            .insert(path.clone(), Module { path })
            .map_err(|(existing, module)| DuplicateModule {
                path: module.path,
                existing,
            })
    }

    /// Inserts a new declaration and returns its id.
    pub fn insert(&mut self, declaration: Declaration) -> DeclarationId {
        self.declarations.insert(declaration)
    }

    /// Returns the built-in operator declarations in their fixed
    /// registration order.
    #[must_use]
    pub fn known_builtins(&self) -> &[DeclarationId] { &self.builtins }

    /// Returns the declaration with the given id.
    #[must_use]
    pub fn get(&self, declaration: DeclarationId) -> Option<&Declaration> {
        self.declarations.get(declaration)
    }

    /// Returns the module with the given id.
    #[must_use]
    pub fn get_module(&self, module: ModuleId) -> Option<&Module> {
        self.modules.get(module)
    }

    /// Returns the id of the module registered under the given path.
    #[must_use]
    pub fn module_id(&self, path: &str) -> Option<ModuleId> {
        self.modules.get_id(path)
    }
}

impl Default for Store {
    fn default() -> Self { Self::new() }
}

impl Declarations for Store {
    fn simple_name(&self, declaration: DeclarationId) -> &str {
        &self.declarations[declaration].name
    }

    fn kind(&self, declaration: DeclarationId) -> &DeclarationKind {
        &self.declarations[declaration].kind
    }

    fn owner_of(&self, declaration: DeclarationId) -> Owner {
        self.declarations[declaration].owner
    }

    fn origin(&self, declaration: DeclarationId) -> Origin {
        self.declarations[declaration].origin
    }

    fn is_exported(&self, declaration: DeclarationId) -> bool {
        self.declarations[declaration].visibility == Visibility::Public
    }

    fn module_path(&self, module: ModuleId) -> &str {
        &self.modules[module].path
    }
}

#[cfg(test)]
mod test;
