//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
///
/// Every variant is a resolver-contract violation: emission is aborted and
/// no partial output is produced. There are no user-recoverable errors at
/// this layer.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A `type_order` entry names a type the library does not define.
    #[error("unknown type '{name}' in type_order")]
    UnknownType {
        /// The unmatched type name.
        name: String,
    },
}
