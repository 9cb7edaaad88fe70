//! Emission configuration.
//!
//! Verbosity, the user-code region, and the scalar-spelling table travel
//! here as an explicit value the caller threads into the generator; nothing
//! is read from process-wide state.

use irondl_typelib::ScalarType;

/// C++ spellings for the DL builtin scalars.
///
/// Defaults to the `<stdint.h>` fixed-width names, `float`/`double`, and
/// `const char*` for strings. Individual spellings can be overridden, e.g.
/// to point at an engine's own typedefs.
#[derive(Debug, Clone)]
pub struct ScalarMap {
    names: [String; ScalarType::ALL.len()],
}

impl Default for ScalarMap {
    fn default() -> Self {
        Self {
            names: [
                "int8_t".to_string(),
                "int16_t".to_string(),
                "int32_t".to_string(),
                "int64_t".to_string(),
                "uint8_t".to_string(),
                "uint16_t".to_string(),
                "uint32_t".to_string(),
                "uint64_t".to_string(),
                "float".to_string(),
                "double".to_string(),
                "const char*".to_string(),
            ],
        }
    }
}

impl ScalarMap {
    /// Returns the C++ spelling for a scalar.
    #[must_use]
    pub fn spelling(&self, scalar: ScalarType) -> &str {
        &self.names[scalar as usize]
    }

    /// Overrides the spelling for a scalar.
    pub fn set_spelling(&mut self, scalar: ScalarType, spelling: impl Into<String>) {
        self.names[scalar as usize] = spelling.into();
    }
}

/// Configuration for one emission run.
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Emit per-member diagnostic comments with 32-bit and 64-bit size,
    /// alignment, and offset.
    pub verbose: bool,
    /// Contents of the header's verbatim user-code region. When unset, a
    /// `// USER CODE` marker is emitted instead.
    pub user_code: Option<String>,
    /// Scalar spelling table.
    pub scalars: ScalarMap,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            verbose: true,
            user_code: None,
            scalars: ScalarMap::default(),
        }
    }
}

impl EmitConfig {
    /// Creates a configuration with the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the verbosity flag.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the user-code region contents.
    #[must_use]
    pub fn with_user_code(mut self, user_code: impl Into<String>) -> Self {
        self.user_code = Some(user_code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spellings() {
        let map = ScalarMap::default();
        assert_eq!(map.spelling(ScalarType::Int8), "int8_t");
        assert_eq!(map.spelling(ScalarType::Uint64), "uint64_t");
        assert_eq!(map.spelling(ScalarType::Fp32), "float");
        assert_eq!(map.spelling(ScalarType::Fp64), "double");
        assert_eq!(map.spelling(ScalarType::Str), "const char*");
    }

    #[test]
    fn test_spelling_override() {
        let mut map = ScalarMap::default();
        map.set_spelling(ScalarType::Uint32, "engine_u32");
        assert_eq!(map.spelling(ScalarType::Uint32), "engine_u32");
        assert_eq!(map.spelling(ScalarType::Int32), "int32_t");
    }

    #[test]
    fn test_config_builders() {
        let config = EmitConfig::new()
            .with_verbose(false)
            .with_user_code("#include \"game_types.h\"");
        assert!(!config.verbose);
        assert_eq!(config.user_code.as_deref(), Some("#include \"game_types.h\""));

        let config = EmitConfig::default();
        assert!(config.verbose);
        assert!(config.user_code.is_none());
    }
}
