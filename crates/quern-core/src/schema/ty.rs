use crate::{Error, Result};

/// Abstract column types, from the generic SQL-abstraction layer's point of
/// view.
///
/// This is a closed set: one variant per portable type family, with the
/// family's modifiers (bit width, signedness, fixed length, precision)
/// carried inline. The engine spelling for each variant is produced by
/// [`Type::engine_spelling`]; the reverse direction lives in
/// [`TypeRegistry::reverse_lookup`](crate::TypeRegistry::reverse_lookup).
///
/// Declaration rules are structural where possible: `unsigned` exists only on
/// the integer family, and a fixed-length string cannot be expressed without
/// its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Stored as an unsigned 8-bit integer; the engine has no boolean type.
    Boolean,

    /// Integer family. `bits` must be one of 8, 16, 32, 64.
    Integer { bits: u8, unsigned: bool },

    /// Float family. `bits` must be 32 or 64.
    Float { bits: u8 },

    /// Decimal. With an explicit `(precision, scale)` this is a true
    /// fixed-precision column; without one it degrades to a 64-bit float.
    Decimal { precision: Option<(u32, u32)> },

    /// Variable-length string
    String,

    /// Fixed-length string of exactly `n` bytes
    FixedString(u32),

    /// Calendar date
    Date,

    /// Calendar date and time
    DateTime,

    /// Array with a uniform element type
    Array(Box<Type>),
}

/// The coarse value category used to select literal-rendering rules when a
/// value of this type crosses the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindKind {
    /// No engine counterpart; binding a null is always an error.
    Null,

    /// Rendered as a bare numeral (integer, float and decimal families).
    Integer,

    /// Rendered as `0` or `1`.
    Boolean,

    /// Rendered as a quoted string literal.
    Text,

    /// Rendered as a bracketed list.
    Array,
}

impl Type {
    /// The engine-native spelling of this type, as it appears in DDL.
    pub fn engine_spelling(&self) -> String {
        match self {
            Type::Boolean => "UInt8".to_string(),
            Type::Integer { bits, unsigned } => {
                format!("{}Int{}", if *unsigned { "U" } else { "" }, bits)
            }
            Type::Float { bits } => format!("Float{}", bits),
            Type::Decimal { precision: None } => "Float64".to_string(),
            Type::Decimal {
                precision: Some((precision, scale)),
            } => format!("Decimal({}, {})", precision, scale),
            Type::String => "String".to_string(),
            Type::FixedString(len) => format!("FixedString({})", len),
            Type::Date => "Date".to_string(),
            Type::DateTime => "DateTime".to_string(),
            Type::Array(elem) => format!("Array({})", elem.engine_spelling()),
        }
    }

    /// The wire binding kind for values of this type.
    pub fn bind_kind(&self) -> BindKind {
        match self {
            Type::Boolean => BindKind::Boolean,
            Type::Integer { .. } | Type::Float { .. } | Type::Decimal { .. } => BindKind::Integer,
            Type::String | Type::FixedString(_) | Type::Date | Type::DateTime => BindKind::Text,
            Type::Array(_) => BindKind::Array,
        }
    }

    /// True for the integer family, signed or unsigned.
    pub fn is_integer(&self) -> bool {
        matches!(self, Type::Integer { .. })
    }

    /// True for types that can version rows in a replacing merge table:
    /// integers, dates and datetimes.
    pub fn is_version_capable(&self) -> bool {
        matches!(self, Type::Integer { .. } | Type::Date | Type::DateTime)
    }

    /// Validates the inline modifiers of this type.
    pub fn validate(&self) -> Result<()> {
        match self {
            Type::Integer { bits, .. } if !matches!(bits, 8 | 16 | 32 | 64) => Err(
                Error::configuration(format!("invalid integer bit width {}", bits)),
            ),
            Type::Float { bits } if !matches!(bits, 32 | 64) => Err(Error::configuration(
                format!("invalid float bit width {}", bits),
            )),
            Type::FixedString(0) => Err(Error::configuration(
                "fixed-length string requires a non-zero length",
            )),
            Type::Array(elem) => elem.validate(),
            _ => Ok(()),
        }
    }
}
