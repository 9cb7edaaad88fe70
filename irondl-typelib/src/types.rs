//! Resolved type definitions.
//!
//! This module contains the data structures representing a resolved DL type
//! library: struct types, enums, members, and their per-pointer-width
//! layouts. All layout figures (size, alignment, offset) are computed by the
//! resolver for 32-bit and 64-bit targets independently and carried here
//! verbatim.

/// DL builtin scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// 32-bit floating point.
    Fp32,
    /// 64-bit floating point.
    Fp64,
    /// Read-only string.
    Str,
}

impl ScalarType {
    /// All scalar types, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Fp32,
        Self::Fp64,
        Self::Str,
    ];

    /// Returns the DL schema name of the scalar.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Fp32 => "fp32",
            Self::Fp64 => "fp64",
            Self::Str => "string",
        }
    }

    /// Parses a scalar type from its DL schema name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int8" => Some(Self::Int8),
            "int16" => Some(Self::Int16),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "uint8" => Some(Self::Uint8),
            "uint16" => Some(Self::Uint16),
            "uint32" => Some(Self::Uint32),
            "uint64" => Some(Self::Uint64),
            "fp32" => Some(Self::Fp32),
            "fp64" => Some(Self::Fp64),
            "string" => Some(Self::Str),
            _ => None,
        }
    }

    /// Returns true if this is a signed integer type.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    /// Returns true if this is an unsigned integer type.
    #[must_use]
    pub const fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64
        )
    }

    /// Returns true if this is an integer type of either signedness.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    /// Returns true if this is a floating point type.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Fp32 | Self::Fp64)
    }

    /// Returns the bit width of an integer scalar, or None for
    /// floating-point and string types.
    #[must_use]
    pub const fn integer_bits(&self) -> Option<u32> {
        match self {
            Self::Int8 | Self::Uint8 => Some(8),
            Self::Int16 | Self::Uint16 => Some(16),
            Self::Int32 | Self::Uint32 => Some(32),
            Self::Int64 | Self::Uint64 => Some(64),
            Self::Fp32 | Self::Fp64 | Self::Str => None,
        }
    }
}

/// A value tracked independently per target pointer width.
///
/// The resolver computes every size, alignment, and offset twice, once for
/// 32-bit pointers and once for 64-bit pointers. The two figures are never
/// mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerWidth {
    /// Value on a 32-bit pointer target.
    pub ptr32: u32,
    /// Value on a 64-bit pointer target.
    pub ptr64: u32,
}

impl PerWidth {
    /// Creates a pair from per-width values.
    #[must_use]
    pub const fn new(ptr32: u32, ptr64: u32) -> Self {
        Self { ptr32, ptr64 }
    }

    /// Creates a pair with the same value on both widths, for
    /// pointer-free data.
    #[must_use]
    pub const fn same(value: u32) -> Self {
        Self {
            ptr32: value,
            ptr64: value,
        }
    }
}

/// Size and alignment of a struct type, per pointer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeLayout {
    /// Total size in bytes.
    pub size: PerWidth,
    /// Required alignment in bytes.
    pub align: PerWidth,
}

impl TypeLayout {
    /// Creates a type layout.
    #[must_use]
    pub const fn new(size: PerWidth, align: PerWidth) -> Self {
        Self { size, align }
    }
}

/// Size, alignment, and offset of a member within its owning struct,
/// per pointer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberLayout {
    /// Member size in bytes.
    pub size: PerWidth,
    /// Member alignment in bytes.
    pub align: PerWidth,
    /// Byte offset from the start of the owning struct.
    pub offset: PerWidth,
}

impl MemberLayout {
    /// Creates a member layout.
    #[must_use]
    pub const fn new(size: PerWidth, align: PerWidth, offset: PerWidth) -> Self {
        Self {
            size,
            align,
            offset,
        }
    }
}

/// Element type of arrays and pointers.
///
/// Struct and enum references carry the referenced type's name; the
/// definition itself lives in the owning [`TypeLibrary`](crate::TypeLibrary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElemType {
    /// A named struct type.
    Struct(String),
    /// A named enum type.
    Enum(String),
    /// A builtin scalar.
    Scalar(ScalarType),
}

impl ElemType {
    /// Returns the name of a referenced struct type, if any.
    #[must_use]
    pub fn struct_name(&self) -> Option<&str> {
        match self {
            Self::Struct(name) => Some(name),
            _ => None,
        }
    }
}

/// Member type variants.
///
/// This is a closed set: the emitter matches on it exhaustively, so an
/// unhandled variant is a compile error rather than a runtime fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    /// A named struct embedded by value.
    Struct(String),
    /// A named enum embedded by value.
    Enum(String),
    /// A builtin scalar.
    Scalar(ScalarType),
    /// Fixed-length embedded array, length known at schema time.
    InlineArray {
        /// Element type.
        elem: ElemType,
        /// Element count.
        count: u32,
    },
    /// A read-only reference to a value stored elsewhere. Never owning.
    Pointer(ElemType),
    /// A sub-word field sharing storage with adjacent bitfields.
    Bitfield {
        /// Integer scalar providing the storage unit.
        storage: ScalarType,
        /// Width in bits, taken from the schema as-is.
        bits: u32,
    },
    /// Runtime-length sequence: data pointer plus count.
    Array(ElemType),
    /// Runtime-length sequence of strings: array of string pointers plus
    /// count. Kept distinct from [`MemberKind::Array`] because the element
    /// representation differs.
    StringArray,
}

impl MemberKind {
    /// Creates a dynamic-array member kind, normalizing a string element to
    /// the dedicated [`MemberKind::StringArray`] variant.
    #[must_use]
    pub fn array(elem: ElemType) -> Self {
        match elem {
            ElemType::Scalar(ScalarType::Str) => Self::StringArray,
            other => Self::Array(other),
        }
    }

    /// Returns true if the member embeds a struct or enum by value, which
    /// constrains emission order.
    #[must_use]
    pub fn embeds_by_value(&self) -> bool {
        matches!(
            self,
            Self::Struct(_)
                | Self::Enum(_)
                | Self::InlineArray {
                    elem: ElemType::Struct(_) | ElemType::Enum(_),
                    ..
                }
        )
    }
}

/// A member field of a struct type.
#[derive(Debug, Clone)]
pub struct Member {
    /// Member name.
    pub name: String,
    /// Doc comment carried into the generated header.
    pub comment: Option<String>,
    /// Member type variant.
    pub kind: MemberKind,
    /// Resolved layout within the owning struct.
    pub layout: MemberLayout,
}

impl Member {
    /// Creates a new member.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: MemberKind, layout: MemberLayout) -> Self {
        Self {
            name: name.into(),
            comment: None,
            kind,
            layout,
        }
    }

    /// Sets the doc comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A resolved struct type.
#[derive(Debug, Clone)]
pub struct StructDef {
    /// Type name.
    pub name: String,
    /// Doc comment carried into the generated header.
    pub comment: Option<String>,
    /// Members in declaration order.
    pub members: Vec<Member>,
    /// Stable 32-bit type identifier, used for runtime type checks by
    /// consumers of the generated code.
    pub typeid: u32,
    /// True if the schema author pinned the alignment explicitly.
    pub useralign: bool,
    /// Resolved size and alignment, per pointer width.
    pub layout: TypeLayout,
}

impl StructDef {
    /// Creates a new struct type.
    #[must_use]
    pub fn new(name: impl Into<String>, typeid: u32, layout: TypeLayout) -> Self {
        Self {
            name: name.into(),
            comment: None,
            members: Vec::new(),
            typeid,
            useralign: false,
            layout,
        }
    }

    /// Sets the doc comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Marks the alignment as author-pinned.
    #[must_use]
    pub fn with_useralign(mut self) -> Self {
        self.useralign = true;
        self
    }

    /// Adds a member.
    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }
}

/// A resolved enum type.
#[derive(Debug, Clone)]
pub struct EnumDef {
    /// Type name.
    pub name: String,
    /// Doc comment carried into the generated header.
    pub comment: Option<String>,
    /// Values in declaration order. Values are explicit in the schema and
    /// never auto-assigned.
    pub values: Vec<EnumValue>,
}

impl EnumDef {
    /// Creates a new enum type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            values: Vec::new(),
        }
    }

    /// Sets the doc comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Adds a value.
    pub fn add_value(&mut self, value: EnumValue) {
        self.values.push(value);
    }

    /// Looks up a value by name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// A single enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    /// Name emitted into the generated header.
    pub name: String,
    /// Explicit value. May be sparse or reused across schema revisions for
    /// ABI stability.
    pub value: u32,
}

impl EnumValue {
    /// Creates a new enum value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
