//! Textual parameter binding.
//!
//! The engine has no protocol-level prepared statements; binding is a pure
//! text transform from a stored template plus an ordered key→value table to
//! one finished SQL string. Bindings substitute in the order the caller
//! bound them, not template order: each binding replaces the first matching
//! placeholder occurrence in the current working text, and an unmatched key
//! is silently inert.
//!
//! Known sharp edge, preserved deliberately: because later bindings scan
//! text that earlier substitutions already produced, a bound string value
//! containing placeholder-like characters (a literal `?`, or `:name` text)
//! can be matched by a later binding. Downstream behavior depends on these
//! first-occurrence semantics; do not "fix" them here.

use crate::serializer::literal;

use quern_core::schema::BindKind;
use quern_core::stmt::Value;
use quern_core::{Error, Result};

use std::borrow::Cow;

/// A statement template plus its bound parameters.
///
/// Re-entrant per execution: every [`render`](Self::render) starts from the
/// stored template, so rebinding and re-rendering the same template is
/// supported.
#[derive(Debug, Clone)]
pub struct Binder {
    template: String,
    bindings: Vec<Binding>,
}

#[derive(Debug, Clone)]
struct Binding {
    key: ParamKey,
    literal: String,
}

/// A placeholder key: positional (`?`) or named (`:name`). One statement's
/// keys must be uniformly one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKey {
    /// 1-based positional index. The index identifies the binding for
    /// rebinding purposes; substitution order is bind order.
    Position(usize),

    /// Named placeholder, matched as `:name`.
    Name(String),
}

impl ParamKey {
    fn token(&self) -> Cow<'_, str> {
        match self {
            ParamKey::Position(_) => Cow::Borrowed("?"),
            ParamKey::Name(name) => Cow::Owned(format!(":{}", name)),
        }
    }
}

impl From<usize> for ParamKey {
    fn from(index: usize) -> Self {
        ParamKey::Position(index)
    }
}

impl From<&str> for ParamKey {
    fn from(name: &str) -> Self {
        ParamKey::Name(name.into())
    }
}

impl Binder {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            bindings: Vec::new(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Binds a value, inferring its wire kind.
    pub fn bind(&mut self, key: impl Into<ParamKey>, value: impl Into<Value>) -> Result<()> {
        self.bind_inner(key.into(), value.into(), None)
    }

    /// Binds a value with an explicit wire kind, which wins over inference.
    pub fn bind_typed(
        &mut self,
        key: impl Into<ParamKey>,
        value: impl Into<Value>,
        kind: BindKind,
    ) -> Result<()> {
        self.bind_inner(key.into(), value.into(), Some(kind))
    }

    /// Drops all bindings, keeping the template.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    fn bind_inner(&mut self, key: ParamKey, value: Value, kind: Option<BindKind>) -> Result<()> {
        if let Some(existing) = self.bindings.first() {
            if std::mem::discriminant(&existing.key) != std::mem::discriminant(&key) {
                return Err(Error::binding(
                    "cannot mix named and positional parameters in one statement",
                ));
            }
        }

        let literal = render_param(&value, kind)?;

        match self.bindings.iter_mut().find(|binding| binding.key == key) {
            Some(binding) => binding.literal = literal,
            None => self.bindings.push(Binding { key, literal }),
        }

        Ok(())
    }

    /// Produces the final SQL string by substituting each binding, in bind
    /// order, into the stored template.
    pub fn render(&self) -> String {
        let mut sql = self.template.clone();

        for binding in &self.bindings {
            let token = binding.key.token();
            if let Some(at) = sql.find(token.as_ref()) {
                sql.replace_range(at..at + token.len(), &binding.literal);
            }
        }

        sql
    }
}

/// Renders one value as an engine literal, for callers that quote outside a
/// template (the connection facade's `quote`).
pub fn quote(value: &Value) -> Result<String> {
    render_param(value, None)
}

fn infer_kind(value: &Value) -> BindKind {
    match value {
        Value::Null => BindKind::Null,
        Value::Bool(_) => BindKind::Boolean,
        Value::I64(_) | Value::F64(_) => BindKind::Integer,
        Value::String(_) => BindKind::Text,
        Value::List(_) => BindKind::Array,
    }
}

fn render_param(value: &Value, kind: Option<BindKind>) -> Result<String> {
    let kind = kind.unwrap_or_else(|| infer_kind(value));

    if value.is_null() || matches!(kind, BindKind::Null) {
        return Err(Error::binding(
            "cannot bind a NULL value; the engine has no NULL literal on this surface",
        ));
    }

    let mut out = String::new();
    match kind {
        BindKind::Null => unreachable!(),
        BindKind::Boolean => match value {
            Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
            Value::I64(n) => out.push(if *n != 0 { '1' } else { '0' }),
            other => {
                return Err(Error::binding(format!(
                    "cannot bind {} as a boolean",
                    other.kind_name()
                )))
            }
        },
        BindKind::Integer => match value {
            Value::I64(_) | Value::F64(_) => literal::render_value(value, &mut out),
            Value::Bool(b) => out.push(if *b { '1' } else { '0' }),
            Value::String(s) if s.parse::<f64>().is_ok() => out.push_str(s),
            other => {
                return Err(Error::binding(format!(
                    "cannot bind {} as a numeral",
                    other.kind_name()
                )))
            }
        },
        BindKind::Text => {
            let text = match value {
                Value::String(s) => Cow::Borrowed(s.as_str()),
                Value::I64(n) => Cow::Owned(n.to_string()),
                Value::F64(n) => Cow::Owned(n.to_string()),
                Value::Bool(b) => Cow::Borrowed(if *b { "1" } else { "0" }),
                other => {
                    return Err(Error::binding(format!(
                        "cannot bind {} as text",
                        other.kind_name()
                    )))
                }
            };
            out.push_str(&literal::quote_string(&text));
        }
        BindKind::Array => match value {
            Value::List(items) => render_array(items, &mut out)?,
            other => {
                return Err(Error::binding(format!(
                    "cannot bind {} as an array",
                    other.kind_name()
                )))
            }
        },
    }

    Ok(out)
}

/// Renders a homogeneous array literal. Numeric arrays emit bare numerals;
/// string arrays emit quoted members; anything else is rejected.
fn render_array(items: &[Value], out: &mut String) -> Result<()> {
    let all_numeric = items.iter().all(Value::is_numeric);
    let all_string = items.iter().all(|item| matches!(item, Value::String(_)));

    if !all_numeric && !all_string {
        return Err(Error::binding(
            "array parameters must be homogeneous: all-numeric or all-string",
        ));
    }

    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        literal::render_value(item, out);
    }
    out.push(']');

    Ok(())
}
