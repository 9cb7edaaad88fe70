//! C++ target backend.
//!
//! All C++ syntax lives in this directory: scalar and type-name spelling,
//! member declaration shapes, struct/enum declarations, and header
//! assembly. The emission walk itself does not depend on the target; a
//! second target language would be a sibling module implementing its own
//! spellings and shapes.

pub mod enums;
pub mod header;
pub mod members;
pub mod names;
pub mod structs;

pub use enums::generate_enum;
pub use header::HeaderGenerator;
pub use members::MemberEmitter;
pub use structs::StructGenerator;
