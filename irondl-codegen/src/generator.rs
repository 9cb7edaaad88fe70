//! Top-level generation facade.

use irondl_typelib::TypeLibrary;

use crate::config::EmitConfig;
use crate::cpp::HeaderGenerator;
use crate::error::CodegenError;

/// Generates a C++ header from a resolved type library.
///
/// A pure transform: one library in, one text buffer out. Persisting the
/// buffer is the driver's job.
pub struct Generator<'a> {
    library: &'a TypeLibrary,
    config: EmitConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(library: &'a TypeLibrary) -> Self {
        Self {
            library,
            config: EmitConfig::default(),
        }
    }

    /// Creates a generator with an explicit configuration.
    #[must_use]
    pub fn with_config(library: &'a TypeLibrary, config: EmitConfig) -> Self {
        Self { library, config }
    }

    /// Generates the header document.
    ///
    /// # Errors
    /// Returns `CodegenError` on a resolver-contract violation; the whole
    /// emission is aborted and no partial output is produced.
    pub fn generate(&self) -> Result<String, CodegenError> {
        tracing::debug!(
            library = %self.library.name,
            enums = self.library.enum_count(),
            types = self.library.type_count(),
            "emitting C++ header"
        );
        HeaderGenerator::new(self.library, &self.config).generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irondl_typelib::{
        ElemType, Member, MemberKind, MemberLayout, PerWidth, ScalarType, StructDef, TypeLayout,
    };

    fn pointer_heavy_library() -> TypeLibrary {
        let mut lib = TypeLibrary::new("nodes");

        let mut node = StructDef::new(
            "node",
            0x1234_ABCD,
            TypeLayout::new(PerWidth::new(12, 24), PerWidth::new(4, 8)),
        );
        node.add_member(Member::new(
            "next",
            MemberKind::Pointer(ElemType::Struct("node".to_string())),
            MemberLayout::new(PerWidth::new(4, 8), PerWidth::new(4, 8), PerWidth::same(0)),
        ));
        node.add_member(Member::new(
            "children",
            MemberKind::Array(ElemType::Struct("node".to_string())),
            MemberLayout::new(PerWidth::new(8, 12), PerWidth::new(4, 8), PerWidth::new(4, 8)),
        ));
        node.add_member(Member::new(
            "tags",
            MemberKind::array(ElemType::Scalar(ScalarType::Str)),
            MemberLayout::new(
                PerWidth::new(8, 12),
                PerWidth::new(4, 8),
                PerWidth::new(12, 20),
            ),
        ));
        lib.add_type(node);
        lib.type_order = vec!["node".to_string()];
        lib
    }

    #[test]
    fn test_emission_is_idempotent() {
        let lib = pointer_heavy_library();
        let generator = Generator::new(&lib);

        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_verbose_diagnostics_track_pointer_width_delta() {
        let lib = pointer_heavy_library();
        let text = Generator::new(&lib).generate().unwrap();

        // The pointer member is 4 bytes on 32-bit and 8 on 64-bit.
        assert!(text.contains("// 32bit: size 4, align 4, offset 0"));
        assert!(text.contains("// 64bit: size 8, align 8, offset 0"));
        // The dynamic-array member reports its own per-width figures.
        assert!(text.contains("// 32bit: size 8, align 4, offset 4"));
        assert!(text.contains("// 64bit: size 12, align 8, offset 8"));
    }

    #[test]
    fn test_string_array_never_uses_generic_shape() {
        let lib = pointer_heavy_library();
        let text = Generator::new(&lib).generate().unwrap();

        // The generic container for node children…
        assert!(text.contains("struct node* data;"));
        // …and the specialized string container, side by side.
        assert!(text.contains("const char** data;"));
    }

    #[test]
    fn test_quiet_emission_has_no_layout_comments() {
        let lib = pointer_heavy_library();
        let text = Generator::with_config(&lib, EmitConfig::new().with_verbose(false))
            .generate()
            .unwrap();

        assert!(!text.contains("// 32bit:"));
        assert!(!text.contains("// 64bit:"));
        // The struct-level layout comment is not gated by verbosity.
        assert!(text.contains("// size32 12, size64 24, align32 4, align64 8"));
    }
}
