//! Enum declaration emission.

use irondl_typelib::EnumDef;

/// Generates one enum declaration.
///
/// Values are emitted exactly as the schema declares them, in order. The
/// emitter never auto-increments or sorts: explicit values may be sparse or
/// reused deliberately to keep the ABI stable across schema revisions.
#[must_use]
pub fn generate_enum(def: &EnumDef) -> String {
    let mut output = String::new();

    if let Some(comment) = &def.comment {
        output.push_str(&format!("// {comment}\n"));
    }

    output.push_str(&format!("enum {}\n{{\n", def.name));

    let values: Vec<String> = def
        .values
        .iter()
        .map(|v| format!("    {} = {}", v.name, v.value))
        .collect();
    if !values.is_empty() {
        output.push_str(&values.join(",\n"));
        output.push('\n');
    }

    output.push_str("};\n");
    output
}
