//! # IronDL Codegen
//!
//! C++ POD header generation from resolved DL type libraries.
//!
//! This crate provides:
//! - Exhaustive projection of every member-type variant onto a C++
//!   declaration shape
//! - Dual-width (32-bit / 64-bit) layout diagnostics in the emitted header
//! - Include-guard, primitive-typedef, and user-code boilerplate assembly
//! - An explicit [`EmitConfig`] in place of process-wide state

pub mod config;
pub mod cpp;
pub mod error;
pub mod generator;

pub use config::{EmitConfig, ScalarMap};
pub use error::CodegenError;
pub use generator::Generator;

use irondl_typelib::TypeLibrary;

/// Generates a C++ header from a resolved type library.
///
/// # Arguments
/// * `library` - The resolved type library
/// * `config` - Emission configuration
///
/// # Returns
/// The generated header as a string.
///
/// # Errors
/// Returns `CodegenError` on a resolver-contract violation.
pub fn generate(library: &TypeLibrary, config: &EmitConfig) -> Result<String, CodegenError> {
    Generator::with_config(library, config.clone()).generate()
}
