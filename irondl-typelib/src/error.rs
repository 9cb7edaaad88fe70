//! Error types for type-library validation.

use thiserror::Error;

/// Error type for library consistency checks.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type or enum).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Duplicate type identifier.
    #[error("typeid 0x{typeid:08X} is shared by types '{first}' and '{second}'")]
    DuplicateTypeId {
        /// The shared identifier.
        typeid: u32,
        /// First type carrying it.
        first: String,
        /// Second type carrying it.
        second: String,
    },

    /// A `type_order` entry does not name a known type.
    #[error("type_order entry '{name}' does not match any type in the library")]
    UnknownOrderEntry {
        /// The unmatched name.
        name: String,
    },

    /// A type is missing from, or repeated in, `type_order`.
    #[error("type '{name}' must appear exactly once in type_order")]
    OrderCoverage {
        /// The type name.
        name: String,
    },

    /// A member references a type or enum the library does not define.
    #[error("member '{member}' of type '{owner}' references unknown {kind} '{name}'")]
    UnknownReference {
        /// Owning type name.
        owner: String,
        /// Member name.
        member: String,
        /// Kind of reference (type or enum).
        kind: String,
        /// Referenced name.
        name: String,
    },

    /// A by-value embedding appears before its dependency in `type_order`.
    #[error("type '{name}' embeds '{dependency}' by value but is ordered before it")]
    OrderViolation {
        /// Embedding type name.
        name: String,
        /// Embedded dependency name.
        dependency: String,
    },

    /// A bitfield member has an invalid storage type or bit width.
    #[error("bitfield '{member}' of type '{owner}': {message}")]
    InvalidBitfield {
        /// Owning type name.
        owner: String,
        /// Member name.
        member: String,
        /// What is wrong.
        message: String,
    },
}
