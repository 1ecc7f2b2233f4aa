use super::{literal, Formatter, Ident, ToSql};

use crate::stmt::ColumnDef;
use quern_core::schema::DefaultExpr;

impl ToSql for &ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);
        let ty = &self.ty;

        fmt!(f, name " " ty);

        if let Some(default) = &self.default {
            fmt!(f, " DEFAULT ");
            match default {
                DefaultExpr::Literal(value) => literal::render_value(value, f.dst),
                DefaultExpr::Now => f.dst.push_str("now()"),
                DefaultExpr::Today => f.dst.push_str("today()"),
            }
        }
    }
}
