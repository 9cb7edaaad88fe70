//! The type-library container.

use std::collections::HashMap;

use crate::types::{EnumDef, StructDef};

/// A fully resolved DL type library.
///
/// Holds the library's enums and struct types along with `type_order`, the
/// resolver-computed dependency order in which struct types must be
/// emitted. Both collections preserve insertion order so that every
/// iteration that can reach generated output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct TypeLibrary {
    /// Library name. Used to key the generated header's include guard.
    pub name: String,
    /// Emission order over struct type names. A type embedding another by
    /// value appears after its dependency; the resolver guarantees this and
    /// the emitters do not re-derive it.
    pub type_order: Vec<String>,
    enums: Vec<EnumDef>,
    enum_map: HashMap<String, usize>,
    types: Vec<StructDef>,
    type_map: HashMap<String, usize>,
}

impl TypeLibrary {
    /// Creates a new empty library.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_order: Vec::new(),
            enums: Vec::new(),
            enum_map: HashMap::new(),
            types: Vec::new(),
            type_map: HashMap::new(),
        }
    }

    /// Adds an enum definition.
    pub fn add_enum(&mut self, def: EnumDef) {
        let index = self.enums.len();
        self.enum_map.insert(def.name.clone(), index);
        self.enums.push(def);
    }

    /// Adds a struct type definition.
    pub fn add_type(&mut self, def: StructDef) {
        let index = self.types.len();
        self.type_map.insert(def.name.clone(), index);
        self.types.push(def);
    }

    /// Looks up an enum by name.
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&EnumDef> {
        self.enum_map.get(name).map(|&idx| &self.enums[idx])
    }

    /// Looks up a struct type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&StructDef> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if an enum with the given name exists.
    #[must_use]
    pub fn has_enum(&self, name: &str) -> bool {
        self.enum_map.contains_key(name)
    }

    /// Returns true if a struct type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Iterates the enums in insertion order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.enums.iter()
    }

    /// Iterates the struct types in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &StructDef> {
        self.types.iter()
    }

    /// Number of enums.
    #[must_use]
    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    /// Number of struct types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}
