//! # IronDL
//!
//! C++ POD header generation backend for DL type libraries.
//!
//! IronDL is the emission half of a DL (data-description language) schema
//! compiler: a resolver hands it a fully resolved type library (struct
//! types, enums, and members, each annotated with size, alignment, and
//! offset computed independently for 32-bit and 64-bit pointer targets)
//! and IronDL projects it into a single C++ header usable directly as
//! plain-old-data by native code on either target.
//!
//! ## Quick Start
//!
//! ```
//! use irondl::prelude::*;
//!
//! let mut library = TypeLibrary::new("game_types");
//! let mut pod = StructDef::new(
//!     "health",
//!     0x0000_0001,
//!     TypeLayout::new(PerWidth::same(4), PerWidth::same(4)),
//! );
//! pod.add_member(Member::new(
//!     "current",
//!     MemberKind::Scalar(ScalarType::Uint32),
//!     MemberLayout::new(PerWidth::same(4), PerWidth::same(4), PerWidth::same(0)),
//! ));
//! library.add_type(pod);
//! library.type_order.push("health".to_string());
//!
//! let header = Generator::new(&library).generate().unwrap();
//! assert!(header.contains("#define health_TYPE_ID (0x00000001)"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`typelib`] - Resolved type-library model and validation
//! - [`codegen`] - C++ header generation

pub mod prelude;

/// Resolved type-library model and validation.
pub mod typelib {
    pub use irondl_typelib::*;
}

/// C++ header generation from resolved type libraries.
pub mod codegen {
    pub use irondl_codegen::*;
}

// Re-export commonly used items at the crate root
pub use irondl_codegen::{CodegenError, EmitConfig, Generator, ScalarMap, generate};
pub use irondl_typelib::{
    ElemType, EnumDef, EnumValue, LibraryError, Member, MemberKind, MemberLayout, PerWidth,
    ScalarType, StructDef, TypeLayout, TypeLibrary, validate_library,
};
