//! # IronDL Typelib
//!
//! Resolved DL type-library model.
//!
//! This crate provides:
//! - Type definitions for resolved struct types, enums, and members
//! - Per-pointer-width layout annotations (32-bit and 64-bit)
//! - The `TypeLibrary` container with dependency-ordered emission order
//! - Resolver-side consistency validation
//!
//! Everything here is produced by the resolver and consumed read-only by
//! the code generators in `irondl-codegen`.

pub mod error;
pub mod library;
pub mod types;
pub mod validation;

pub use error::LibraryError;
pub use library::TypeLibrary;
pub use types::{
    ElemType, EnumDef, EnumValue, Member, MemberKind, MemberLayout, PerWidth, ScalarType,
    StructDef, TypeLayout,
};
pub use validation::validate_library;
