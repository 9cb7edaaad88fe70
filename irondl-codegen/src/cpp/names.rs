//! C++ spelling of DL type names.

use irondl_typelib::ElemType;

use crate::config::ScalarMap;

/// Returns the C++ spelling of an element type.
///
/// Named types are kind-qualified (`struct X` / `enum X`): C puts both in
/// a single flat tag namespace, and the qualifier keeps a struct and an
/// enum with the same short name from colliding.
#[must_use]
pub fn elem_spelling(elem: &ElemType, scalars: &ScalarMap) -> String {
    match elem {
        ElemType::Struct(name) => format!("struct {name}"),
        ElemType::Enum(name) => format!("enum {name}"),
        ElemType::Scalar(scalar) => scalars.spelling(*scalar).to_string(),
    }
}
