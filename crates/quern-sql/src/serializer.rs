#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::Ident;

pub mod literal;

// Fragment serializers
mod column_def;
mod create_table;
mod statement;
mod ty;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string.
///
/// All validation happens while constructing the [`Statement`], so
/// serialization itself is a pure rendering pass and cannot fail.
#[derive(Debug, Default)]
pub struct Serializer;

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Self {
        Self
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };
        stmt.to_sql(&mut fmt);

        ret
    }
}
