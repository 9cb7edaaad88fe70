//! Type-library consistency checks.
//!
//! These checks belong to the resolver side of the pipeline: the code
//! generators consume a library as-is and assume it already passed here.
//! They exist so a resolver (or a test fixture) can verify the invariants
//! the generators rely on: unique names and typeids, resolvable
//! references, and a `type_order` that really is a topological order over
//! by-value embeddings.

use std::collections::{HashMap, HashSet};

use crate::error::LibraryError;
use crate::library::TypeLibrary;
use crate::types::{ElemType, Member, MemberKind, StructDef};

/// Validates a resolved library for internal consistency.
///
/// # Errors
/// Returns the first `LibraryError` found.
pub fn validate_library(library: &TypeLibrary) -> Result<(), LibraryError> {
    validate_unique_names(library)?;
    validate_unique_typeids(library)?;
    validate_references(library)?;
    validate_type_order(library)?;
    Ok(())
}

/// Checks that type and enum names are unique within their collections.
fn validate_unique_names(library: &TypeLibrary) -> Result<(), LibraryError> {
    let mut seen = HashSet::new();
    for def in library.types() {
        if !seen.insert(def.name.as_str()) {
            return Err(LibraryError::DuplicateDefinition {
                kind: "type".to_string(),
                name: def.name.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for def in library.enums() {
        if !seen.insert(def.name.as_str()) {
            return Err(LibraryError::DuplicateDefinition {
                kind: "enum".to_string(),
                name: def.name.clone(),
            });
        }
    }

    Ok(())
}

/// Checks that every typeid is unique within the library.
fn validate_unique_typeids(library: &TypeLibrary) -> Result<(), LibraryError> {
    let mut seen: HashMap<u32, &str> = HashMap::new();
    for def in library.types() {
        if let Some(first) = seen.insert(def.typeid, &def.name) {
            return Err(LibraryError::DuplicateTypeId {
                typeid: def.typeid,
                first: first.to_string(),
                second: def.name.clone(),
            });
        }
    }
    Ok(())
}

/// Checks that every struct/enum reference resolves and every bitfield is
/// well-formed.
fn validate_references(library: &TypeLibrary) -> Result<(), LibraryError> {
    for def in library.types() {
        for member in &def.members {
            validate_member(library, def, member)?;
        }
    }
    Ok(())
}

fn validate_member(
    library: &TypeLibrary,
    owner: &StructDef,
    member: &Member,
) -> Result<(), LibraryError> {
    match &member.kind {
        MemberKind::Struct(name) => check_type_ref(library, owner, member, name),
        MemberKind::Enum(name) => check_enum_ref(library, owner, member, name),
        MemberKind::InlineArray { elem, .. }
        | MemberKind::Pointer(elem)
        | MemberKind::Array(elem) => match elem {
            ElemType::Struct(name) => check_type_ref(library, owner, member, name),
            ElemType::Enum(name) => check_enum_ref(library, owner, member, name),
            ElemType::Scalar(_) => Ok(()),
        },
        MemberKind::Bitfield { storage, bits } => {
            if !storage.is_integer() {
                return Err(LibraryError::InvalidBitfield {
                    owner: owner.name.clone(),
                    member: member.name.clone(),
                    message: format!("storage type '{}' is not an integer", storage.name()),
                });
            }
            let storage_bits = storage.integer_bits().unwrap_or(0);
            if *bits == 0 || *bits > storage_bits {
                return Err(LibraryError::InvalidBitfield {
                    owner: owner.name.clone(),
                    member: member.name.clone(),
                    message: format!("bit width {bits} does not fit {}", storage.name()),
                });
            }
            Ok(())
        }
        MemberKind::Scalar(_) | MemberKind::StringArray => Ok(()),
    }
}

fn check_type_ref(
    library: &TypeLibrary,
    owner: &StructDef,
    member: &Member,
    name: &str,
) -> Result<(), LibraryError> {
    if library.has_type(name) {
        Ok(())
    } else {
        Err(LibraryError::UnknownReference {
            owner: owner.name.clone(),
            member: member.name.clone(),
            kind: "type".to_string(),
            name: name.to_string(),
        })
    }
}

fn check_enum_ref(
    library: &TypeLibrary,
    owner: &StructDef,
    member: &Member,
    name: &str,
) -> Result<(), LibraryError> {
    if library.has_enum(name) {
        Ok(())
    } else {
        Err(LibraryError::UnknownReference {
            owner: owner.name.clone(),
            member: member.name.clone(),
            kind: "enum".to_string(),
            name: name.to_string(),
        })
    }
}

/// Checks that `type_order` covers every type exactly once and respects
/// by-value embedding dependencies.
///
/// Pointer and dynamic-array references do not constrain the order: the
/// generated header declares them through elaborated type specifiers, which
/// C and C++ accept for incomplete types.
fn validate_type_order(library: &TypeLibrary) -> Result<(), LibraryError> {
    let mut remaining: HashSet<&str> = library.types().map(|t| t.name.as_str()).collect();

    let mut emitted: HashSet<&str> = HashSet::new();
    for name in &library.type_order {
        let Some(def) = library.get_type(name) else {
            return Err(LibraryError::UnknownOrderEntry { name: name.clone() });
        };
        if !remaining.remove(name.as_str()) {
            return Err(LibraryError::OrderCoverage { name: name.clone() });
        }

        for member in &def.members {
            if !member.kind.embeds_by_value() {
                continue;
            }
            let dependency = match &member.kind {
                MemberKind::Struct(dep) => Some(dep.as_str()),
                MemberKind::InlineArray {
                    elem: ElemType::Struct(dep),
                    ..
                } => Some(dep.as_str()),
                _ => None,
            };
            if let Some(dep) = dependency {
                if !emitted.contains(dep) {
                    return Err(LibraryError::OrderViolation {
                        name: def.name.clone(),
                        dependency: dep.to_string(),
                    });
                }
            }
        }

        emitted.insert(name.as_str());
    }

    if let Some(missing) = remaining.into_iter().next() {
        return Err(LibraryError::OrderCoverage {
            name: missing.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        EnumDef, Member, MemberKind, MemberLayout, PerWidth, ScalarType, TypeLayout,
    };

    fn simple_layout() -> TypeLayout {
        TypeLayout::new(PerWidth::same(4), PerWidth::same(4))
    }

    fn scalar_member(name: &str) -> Member {
        Member::new(
            name,
            MemberKind::Scalar(ScalarType::Uint32),
            MemberLayout::default(),
        )
    }

    #[test]
    fn test_valid_library() {
        let mut lib = TypeLibrary::new("ok");
        let mut inner = StructDef::new("inner", 1, simple_layout());
        inner.add_member(scalar_member("v"));
        let mut outer = StructDef::new("outer", 2, simple_layout());
        outer.add_member(Member::new(
            "nested",
            MemberKind::Struct("inner".to_string()),
            MemberLayout::default(),
        ));
        lib.add_type(inner);
        lib.add_type(outer);
        lib.type_order = vec!["inner".to_string(), "outer".to_string()];

        assert!(validate_library(&lib).is_ok());
    }

    #[test]
    fn test_duplicate_typeid_detected() {
        let mut lib = TypeLibrary::new("dup");
        lib.add_type(StructDef::new("a", 7, simple_layout()));
        lib.add_type(StructDef::new("b", 7, simple_layout()));
        lib.type_order = vec!["a".to_string(), "b".to_string()];

        assert!(matches!(
            validate_library(&lib),
            Err(LibraryError::DuplicateTypeId { typeid: 7, .. })
        ));
    }

    #[test]
    fn test_unknown_reference_detected() {
        let mut lib = TypeLibrary::new("bad_ref");
        let mut def = StructDef::new("a", 1, simple_layout());
        def.add_member(Member::new(
            "missing",
            MemberKind::Enum("nope".to_string()),
            MemberLayout::default(),
        ));
        lib.add_type(def);
        lib.type_order = vec!["a".to_string()];

        assert!(matches!(
            validate_library(&lib),
            Err(LibraryError::UnknownReference { .. })
        ));
    }

    #[test]
    fn test_order_violation_on_value_embedding() {
        let mut lib = TypeLibrary::new("cycleish");
        let mut outer = StructDef::new("outer", 1, simple_layout());
        outer.add_member(Member::new(
            "nested",
            MemberKind::Struct("inner".to_string()),
            MemberLayout::default(),
        ));
        lib.add_type(outer);
        lib.add_type(StructDef::new("inner", 2, simple_layout()));
        lib.type_order = vec!["outer".to_string(), "inner".to_string()];

        assert!(matches!(
            validate_library(&lib),
            Err(LibraryError::OrderViolation { .. })
        ));
    }

    #[test]
    fn test_pointer_does_not_constrain_order() {
        let mut lib = TypeLibrary::new("ptrs");
        let mut first = StructDef::new("first", 1, simple_layout());
        first.add_member(Member::new(
            "next",
            MemberKind::Pointer(ElemType::Struct("second".to_string())),
            MemberLayout::default(),
        ));
        lib.add_type(first);
        lib.add_type(StructDef::new("second", 2, simple_layout()));
        lib.type_order = vec!["first".to_string(), "second".to_string()];

        assert!(validate_library(&lib).is_ok());
    }

    #[test]
    fn test_order_coverage() {
        let mut lib = TypeLibrary::new("partial");
        lib.add_type(StructDef::new("a", 1, simple_layout()));
        lib.add_type(StructDef::new("b", 2, simple_layout()));
        lib.type_order = vec!["a".to_string()];

        assert!(matches!(
            validate_library(&lib),
            Err(LibraryError::OrderCoverage { .. })
        ));
    }

    #[test]
    fn test_bitfield_storage_checked() {
        let mut lib = TypeLibrary::new("bits");
        let mut def = StructDef::new("flags", 1, simple_layout());
        def.add_member(Member::new(
            "fp_bits",
            MemberKind::Bitfield {
                storage: ScalarType::Fp32,
                bits: 3,
            },
            MemberLayout::default(),
        ));
        lib.add_type(def);
        lib.type_order = vec!["flags".to_string()];

        assert!(matches!(
            validate_library(&lib),
            Err(LibraryError::InvalidBitfield { .. })
        ));

        let mut lib = TypeLibrary::new("bits");
        let mut def = StructDef::new("flags", 1, simple_layout());
        def.add_member(Member::new(
            "too_wide",
            MemberKind::Bitfield {
                storage: ScalarType::Uint8,
                bits: 9,
            },
            MemberLayout::default(),
        ));
        lib.add_type(def);
        lib.type_order = vec!["flags".to_string()];

        assert!(matches!(
            validate_library(&lib),
            Err(LibraryError::InvalidBitfield { .. })
        ));
    }

    #[test]
    fn test_enum_library() {
        let mut lib = TypeLibrary::new("enums");
        lib.add_enum(EnumDef::new("state"));
        let mut def = StructDef::new("machine", 1, simple_layout());
        def.add_member(Member::new(
            "state",
            MemberKind::Enum("state".to_string()),
            MemberLayout::default(),
        ));
        lib.add_type(def);
        lib.type_order = vec!["machine".to_string()];

        assert!(validate_library(&lib).is_ok());
    }
}
