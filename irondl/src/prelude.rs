//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```
//! use irondl::prelude::*;
//! ```

// Type-library model
pub use irondl_typelib::{
    ElemType, EnumDef, EnumValue, LibraryError, Member, MemberKind, MemberLayout, PerWidth,
    ScalarType, StructDef, TypeLayout, TypeLibrary, validate_library,
};

// Code generation
pub use irondl_codegen::{CodegenError, EmitConfig, Generator, ScalarMap, generate};
