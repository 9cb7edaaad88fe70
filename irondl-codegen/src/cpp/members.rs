//! Member declaration emission.
//!
//! One member in, one block of declaration lines out. Every
//! [`MemberKind`] variant maps to exactly one declaration shape; the match
//! below is exhaustive, so a new variant fails to compile until it is given
//! a shape here.

use irondl_typelib::{Member, MemberKind, ScalarType};

use crate::config::EmitConfig;
use crate::cpp::names::elem_spelling;

/// Emitter for member field declarations.
pub struct MemberEmitter<'a> {
    config: &'a EmitConfig,
}

impl<'a> MemberEmitter<'a> {
    /// Creates a new member emitter.
    #[must_use]
    pub fn new(config: &'a EmitConfig) -> Self {
        Self { config }
    }

    /// Emits the declaration lines for one member.
    ///
    /// Lines are unindented; the struct generator indents them to the
    /// nesting level of the enclosing declaration. With `config.verbose`
    /// set, two diagnostic comment lines report the resolved layout for
    /// each pointer width, followed by the member's own comment if present.
    #[must_use]
    pub fn emit(&self, member: &Member) -> Vec<String> {
        let mut lines = Vec::new();

        if self.config.verbose {
            let l = &member.layout;
            lines.push(format!(
                "// 32bit: size {}, align {}, offset {}",
                l.size.ptr32, l.align.ptr32, l.offset.ptr32
            ));
            lines.push(format!(
                "// 64bit: size {}, align {}, offset {}",
                l.size.ptr64, l.align.ptr64, l.offset.ptr64
            ));
        }

        if let Some(comment) = &member.comment {
            lines.push(format!("// {comment}"));
        }

        lines.extend(self.declaration(member));
        lines
    }

    fn declaration(&self, member: &Member) -> Vec<String> {
        let scalars = &self.config.scalars;
        let name = &member.name;

        match &member.kind {
            MemberKind::Struct(type_name) => {
                vec![format!("struct {type_name} {name};")]
            }
            MemberKind::Enum(enum_name) => {
                vec![format!("enum {enum_name} {name};")]
            }
            MemberKind::Scalar(scalar) => {
                vec![format!("{} {name};", scalars.spelling(*scalar))]
            }
            MemberKind::InlineArray { elem, count } => {
                vec![format!("{} {name}[{count}];", elem_spelling(elem, scalars))]
            }
            MemberKind::Pointer(elem) => {
                vec![format!("const {}* {name};", elem_spelling(elem, scalars))]
            }
            MemberKind::Bitfield { storage, bits } => {
                vec![format!("{} {name} : {bits};", scalars.spelling(*storage))]
            }
            MemberKind::Array(elem) => self.array_container(&elem_spelling(elem, scalars), name),
            MemberKind::StringArray => self.string_array_container(name),
        }
    }

    /// The generic dynamic-array container: data pointer plus count, with
    /// an unchecked index-operator pair so consuming code reads the same
    /// whether compiled for 32-bit or 64-bit pointers.
    fn array_container(&self, elem: &str, name: &str) -> Vec<String> {
        let count_type = self.config.scalars.spelling(ScalarType::Uint32);
        vec![
            "struct".to_string(),
            "{".to_string(),
            format!("    {elem}* data;"),
            format!("    {count_type} count;"),
            String::new(),
            "#ifdef __cplusplus".to_string(),
            format!("          {elem}& operator[](unsigned int index)       {{ return data[index]; }}"),
            format!("    const {elem}& operator[](unsigned int index) const {{ return data[index]; }}"),
            "#endif // __cplusplus".to_string(),
            format!("}} {name};"),
        ]
    }

    /// The string dynamic-array container. The element is a pointer to
    /// string data, not a value embedding, so the declaration differs from
    /// the generic container with a string element.
    fn string_array_container(&self, name: &str) -> Vec<String> {
        let scalars = &self.config.scalars;
        let string_type = scalars.spelling(ScalarType::Str);
        let count_type = scalars.spelling(ScalarType::Uint32);
        vec![
            "struct".to_string(),
            "{".to_string(),
            format!("    {string_type}* data;"),
            format!("    {count_type} count;"),
            String::new(),
            "#ifdef __cplusplus".to_string(),
            format!("    {string_type}& operator[](unsigned int index)       {{ return data[index]; }}"),
            format!("    {string_type}& operator[](unsigned int index) const {{ return data[index]; }}"),
            "#endif // __cplusplus".to_string(),
            format!("}} {name};"),
        ]
    }
}
