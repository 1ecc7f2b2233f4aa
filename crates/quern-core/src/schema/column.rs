use super::Type;
use crate::stmt::Value;

/// A column declaration inside a table intent.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The abstract column type.
    pub ty: Type,

    /// Whether the column was declared nullable. The engine surface has no
    /// NULL, so a `true` here is rejected when the table is rendered.
    pub nullable: bool,

    /// Default expression, if any.
    pub default: Option<DefaultExpr>,
}

/// A column default.
///
/// The set is closed so a default can never smuggle arbitrary SQL text into a
/// rendered statement: it is either a literal value or one of the engine's
/// two clock expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultExpr {
    /// A literal value; strings render quoted, numerals render bare.
    Literal(Value),

    /// The engine's current-timestamp expression, `now()`.
    Now,

    /// The engine's current-date expression, `today()`.
    Today,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            default: None,
        }
    }

    /// Sets the column default.
    pub fn with_default(mut self, default: DefaultExpr) -> Self {
        self.default = Some(default);
        self
    }
}
