//! Header document assembly.
//!
//! Produces the complete emitted unit: include guard, primitive-typedef
//! boilerplate, the verbatim user-code region, all enums, then all structs
//! in `type_order`. Emission is single-pass with no forward declarations;
//! correctness rests on `type_order` being a valid topological order, which
//! is the resolver's contract.

use irondl_typelib::TypeLibrary;

use crate::config::EmitConfig;
use crate::cpp::enums::generate_enum;
use crate::cpp::structs::StructGenerator;
use crate::error::CodegenError;

/// Fixed-width primitive aliases plus the alignment macro, conditionally
/// compiled per toolchain. MSVC predates `<stdint.h>` in the C++ dialects
/// DL targets, so the names are typedef'd there; GCC and Clang get the
/// real header. The block makes every generated header self-contained.
const STD_TYPES: &str = "\
#if defined(_MSC_VER)

    #ifndef IRONDL_STD_TYPES_DEFINED
    #define IRONDL_STD_TYPES_DEFINED
        typedef signed   __int8  int8_t;
        typedef signed   __int16 int16_t;
        typedef signed   __int32 int32_t;
        typedef signed   __int64 int64_t;
        typedef unsigned __int8  uint8_t;
        typedef unsigned __int16 uint16_t;
        typedef unsigned __int32 uint32_t;
        typedef unsigned __int64 uint64_t;
    #endif // IRONDL_STD_TYPES_DEFINED

    #define IRONDL_ALIGN(x) __declspec(align(x))

#elif defined(__GNUC__)
    #include <stdint.h>

    #define IRONDL_ALIGN(x) __attribute__((aligned(x)))
#endif
";

/// Marker emitted when no user code is configured.
const USER_CODE_MARKER: &str = "// USER CODE";

/// Returns the include-guard stem for a library name: upper-cased, with
/// every non-alphanumeric character normalized to `_`.
#[must_use]
pub fn include_guard(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Generator for the complete header document.
pub struct HeaderGenerator<'a> {
    library: &'a TypeLibrary,
    config: &'a EmitConfig,
}

impl<'a> HeaderGenerator<'a> {
    /// Creates a new header generator.
    #[must_use]
    pub fn new(library: &'a TypeLibrary, config: &'a EmitConfig) -> Self {
        Self { library, config }
    }

    /// Generates the header document.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownType` if a `type_order` entry does not
    /// name a type in the library. The fault aborts the whole emission; no
    /// partial output is returned.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = String::new();
        let guard = include_guard(&self.library.name);

        output.push_str("/* Generated from a DL type library. Do not edit by hand. */\n\n");
        output.push_str(&format!("#ifndef {guard}_H_INCLUDED\n"));
        output.push_str(&format!("#define {guard}_H_INCLUDED\n\n"));

        output.push_str(STD_TYPES);
        output.push('\n');

        match &self.config.user_code {
            Some(code) => {
                output.push_str(code);
                if !code.ends_with('\n') {
                    output.push('\n');
                }
            }
            None => {
                output.push_str(USER_CODE_MARKER);
                output.push('\n');
            }
        }
        output.push('\n');

        for def in self.library.enums() {
            output.push_str(&generate_enum(def));
            output.push('\n');
        }

        let structs = StructGenerator::new(self.config);
        for name in &self.library.type_order {
            let def = self
                .library
                .get_type(name)
                .ok_or_else(|| CodegenError::UnknownType { name: name.clone() })?;
            output.push_str(&structs.generate(def));
            output.push('\n');
        }

        output.push_str(&format!("#endif // {guard}_H_INCLUDED\n"));
        Ok(output)
    }
}
