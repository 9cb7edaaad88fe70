//! Struct declaration emission.

use irondl_typelib::{ScalarType, StructDef};

use crate::config::EmitConfig;
use crate::cpp::members::MemberEmitter;

/// Generator for struct type declarations.
pub struct StructGenerator<'a> {
    config: &'a EmitConfig,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(config: &'a EmitConfig) -> Self {
        Self { config }
    }

    /// Generates one struct declaration.
    ///
    /// The type identifier is emitted twice on purpose: once as a
    /// preprocessor constant usable from C, and once as an in-struct
    /// constant reachable from C++ code. An explicit alignment directive is
    /// emitted only when the schema author pinned the alignment
    /// (`useralign`); it carries the 32-bit alignment value.
    #[must_use]
    pub fn generate(&self, def: &StructDef) -> String {
        let mut output = String::new();

        if let Some(comment) = &def.comment {
            output.push_str(&format!("// {comment}\n"));
        }

        output.push_str(&format!(
            "#define {}_TYPE_ID (0x{:08X})\n\n",
            def.name, def.typeid
        ));

        let layout = &def.layout;
        output.push_str(&format!(
            "// size32 {}, size64 {}, align32 {}, align64 {}\n",
            layout.size.ptr32, layout.size.ptr64, layout.align.ptr32, layout.align.ptr64
        ));

        if def.useralign {
            output.push_str(&format!(
                "struct IRONDL_ALIGN({}) {}\n",
                layout.align.ptr32, def.name
            ));
        } else {
            output.push_str(&format!("struct {}\n", def.name));
        }
        output.push_str("{\n");

        output.push_str("#ifdef __cplusplus\n");
        output.push_str(&format!(
            "    const static {} TYPE_ID = 0x{:08X};\n",
            self.config.scalars.spelling(ScalarType::Uint32),
            def.typeid
        ));
        output.push_str("#endif // __cplusplus\n");

        let emitter = MemberEmitter::new(self.config);
        for member in &def.members {
            output.push('\n');
            for line in emitter.emit(member) {
                if line.is_empty() {
                    output.push('\n');
                } else {
                    output.push_str("    ");
                    output.push_str(&line);
                    output.push('\n');
                }
            }
        }

        output.push_str("};\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irondl_typelib::{
        ElemType, Member, MemberKind, MemberLayout, PerWidth, TypeLayout,
    };

    fn quiet_config() -> EmitConfig {
        EmitConfig::new().with_verbose(false)
    }

    fn layout(size32: u32, size64: u32, align32: u32, align64: u32) -> TypeLayout {
        TypeLayout::new(PerWidth::new(size32, size64), PerWidth::new(align32, align64))
    }

    #[test]
    fn test_typeid_hex_padding() {
        let config = quiet_config();
        let generator = StructGenerator::new(&config);

        let low = StructDef::new("low", 0x0000_0001, layout(4, 4, 4, 4));
        let text = generator.generate(&low);
        assert!(text.contains("#define low_TYPE_ID (0x00000001)"));
        assert!(text.contains("const static uint32_t TYPE_ID = 0x00000001;"));

        let high = StructDef::new("high", 0xFFFF_FFFE, layout(4, 4, 4, 4));
        let text = generator.generate(&high);
        assert!(text.contains("#define high_TYPE_ID (0xFFFFFFFE)"));
        assert!(text.contains("const static uint32_t TYPE_ID = 0xFFFFFFFE;"));
    }

    #[test]
    fn test_layout_comment_reports_both_widths() {
        let config = quiet_config();
        let def = StructDef::new("holder", 1, layout(8, 16, 4, 8));
        let text = StructGenerator::new(&config).generate(&def);
        assert!(text.contains("// size32 8, size64 16, align32 4, align64 8"));
    }

    #[test]
    fn test_useralign_gates_the_directive() {
        let config = quiet_config();
        let generator = StructGenerator::new(&config);

        // Non-default computed alignment alone must not produce a directive.
        let natural = StructDef::new("natural", 1, layout(32, 32, 16, 16));
        let text = generator.generate(&natural);
        assert!(!text.contains("IRONDL_ALIGN"));
        assert!(text.contains("struct natural\n"));

        let pinned = StructDef::new("pinned", 2, layout(32, 32, 16, 16)).with_useralign();
        let text = generator.generate(&pinned);
        assert!(text.contains("struct IRONDL_ALIGN(16) pinned\n"));
    }

    #[test]
    fn test_members_are_blank_line_separated_and_indented() {
        let config = quiet_config();
        let mut def = StructDef::new("pair", 1, layout(8, 8, 4, 4));
        def.add_member(Member::new(
            "a",
            MemberKind::Scalar(ScalarType::Int32),
            MemberLayout::default(),
        ));
        def.add_member(Member::new(
            "b",
            MemberKind::Scalar(ScalarType::Int32),
            MemberLayout::default(),
        ));

        let text = StructGenerator::new(&config).generate(&def);
        assert!(text.contains("#endif // __cplusplus\n\n    int32_t a;\n\n    int32_t b;\n};\n"));
    }

    #[test]
    fn test_struct_comment_emitted_first() {
        let config = quiet_config();
        let def =
            StructDef::new("doc", 1, layout(4, 4, 4, 4)).with_comment("carried from the schema");
        let text = StructGenerator::new(&config).generate(&def);
        assert!(text.starts_with("// carried from the schema\n#define doc_TYPE_ID"));
    }

    #[test]
    fn test_container_member_nests_under_struct_indent() {
        let config = quiet_config();
        let mut def = StructDef::new("holder", 1, layout(8, 12, 4, 8));
        def.add_member(Member::new(
            "items",
            MemberKind::Array(ElemType::Scalar(ScalarType::Uint8)),
            MemberLayout::default(),
        ));

        let text = StructGenerator::new(&config).generate(&def);
        assert!(text.contains("    struct\n    {\n        uint8_t* data;"));
        assert!(text.contains("    } items;\n"));
    }
}
