use crate::Result;

/// A value crossing the statement surface: a bind parameter on the way in, or
/// a result cell on the way out.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value. Valid in results; always rejected as a bind parameter.
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// A list of values
    List(Vec<Value>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// True for values that render as bare numerals.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::I64(_) | Self::F64(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn to_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            value => crate::bail!("cannot convert {} to bool", value.kind_name()),
        }
    }

    pub fn to_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            value => crate::bail!("cannot convert {} to i64", value.kind_name()),
        }
    }

    pub fn to_string_value(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            value => crate::bail!("cannot convert {} to String", value.kind_name()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the value's variant, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::List(_) => "List",
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::I64(src.into())
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.into())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<Vec<Value>> for Value {
    fn from(src: Vec<Value>) -> Self {
        Self::List(src)
    }
}

/// Conversion from a `FORMAT JSON` response cell.
///
/// JSON numbers that fit a signed 64-bit integer become [`Value::I64`]; all
/// other numbers become [`Value::F64`]. Objects have no value-model
/// counterpart and are carried as their JSON text.
impl From<serde_json::Value> for Value {
    fn from(src: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match src {
            Json::Null => Self::Null,
            Json::Bool(v) => Self::Bool(v),
            Json::Number(v) => match v.as_i64() {
                Some(v) => Self::I64(v),
                None => Self::F64(v.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(v) => Self::String(v),
            Json::Array(items) => Self::List(items.into_iter().map(Value::from).collect()),
            value @ Json::Object(_) => Self::String(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_json_cells() {
        let cases = [
            (serde_json::json!(null), Value::Null),
            (serde_json::json!(true), Value::Bool(true)),
            (serde_json::json!(42), Value::I64(42)),
            (serde_json::json!(1.5), Value::F64(1.5)),
            (serde_json::json!("hello"), Value::String("hello".into())),
            (
                serde_json::json!([1, 2]),
                Value::List(vec![Value::I64(1), Value::I64(2)]),
            ),
        ];

        for (json, expected) in cases {
            assert_eq!(Value::from(json), expected);
        }
    }

    #[test]
    fn conversion_failure_names_kind() {
        let err = Value::String("x".into()).to_i64().unwrap_err();
        assert_eq!(err.to_string(), "cannot convert String to i64");
    }
}
