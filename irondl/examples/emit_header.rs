//! Builds a small resolved type library by hand and prints the emitted
//! C++ header.
//!
//! Run with:
//! ```sh
//! cargo run --example emit_header
//! ```

use irondl::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let mut library = TypeLibrary::new("example.lib");

    let mut state = EnumDef::new("entity_state").with_comment("lifecycle of a spawned entity");
    state.add_value(EnumValue::new("SPAWNED", 0));
    state.add_value(EnumValue::new("ACTIVE", 10));
    state.add_value(EnumValue::new("DESTROYED", 3));
    library.add_enum(state);

    let mut vec3 = StructDef::new(
        "vec3",
        0x0000_0010,
        TypeLayout::new(PerWidth::same(12), PerWidth::same(4)),
    );
    for (i, axis) in ["x", "y", "z"].into_iter().enumerate() {
        vec3.add_member(Member::new(
            axis,
            MemberKind::Scalar(ScalarType::Fp32),
            MemberLayout::new(
                PerWidth::same(4),
                PerWidth::same(4),
                PerWidth::same(i as u32 * 4),
            ),
        ));
    }
    library.add_type(vec3);

    let mut entity = StructDef::new(
        "entity",
        0x0000_0011,
        TypeLayout::new(PerWidth::new(36, 56), PerWidth::new(4, 8)),
    )
    .with_comment("a spawned game entity")
    .with_useralign();
    entity.add_member(Member::new(
        "position",
        MemberKind::Struct("vec3".to_string()),
        MemberLayout::new(PerWidth::same(12), PerWidth::same(4), PerWidth::same(0)),
    ));
    entity.add_member(Member::new(
        "state",
        MemberKind::Enum("entity_state".to_string()),
        MemberLayout::new(PerWidth::same(4), PerWidth::same(4), PerWidth::same(12)),
    ));
    entity.add_member(
        Member::new(
            "parent",
            MemberKind::Pointer(ElemType::Struct("entity".to_string())),
            MemberLayout::new(PerWidth::new(4, 8), PerWidth::new(4, 8), PerWidth::new(16, 16)),
        )
        .with_comment("spawn parent, if any"),
    );
    entity.add_member(Member::new(
        "children",
        MemberKind::array(ElemType::Struct("entity".to_string())),
        MemberLayout::new(
            PerWidth::new(8, 12),
            PerWidth::new(4, 8),
            PerWidth::new(20, 24),
        ),
    ));
    entity.add_member(Member::new(
        "tags",
        MemberKind::array(ElemType::Scalar(ScalarType::Str)),
        MemberLayout::new(
            PerWidth::new(8, 12),
            PerWidth::new(4, 8),
            PerWidth::new(28, 40),
        ),
    ));
    library.add_type(entity);

    library.type_order = vec!["vec3".to_string(), "entity".to_string()];

    validate_library(&library).expect("resolver output must be consistent");

    let config = EmitConfig::new().with_user_code("#include \"engine_prelude.h\"");
    match generate(&library, &config) {
        Ok(header) => print!("{header}"),
        Err(err) => eprintln!("emission failed: {err}"),
    }
}
