use super::{Comma, Formatter, Ident, ToSql};

use crate::stmt::{CreateTable, EngineClause};

impl ToSql for &CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = &self.name;
        let columns = Comma(&self.columns);
        let engine = &self.engine;

        fmt!(
            f, "CREATE TABLE " name " (" columns ") ENGINE = " engine
        );
    }
}

impl ToSql for &EngineClause {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            EngineClause::Plain(family) => fmt!(f, *family),
            EngineClause::Merge {
                family,
                partition,
                order_by,
                granularity,
                trailing,
            } => {
                let family = *family;
                let partition = Ident(partition);
                let keys = Comma(order_by.iter().map(Ident));
                let granularity = *granularity;

                fmt!(f, family "(" partition ", (" keys "), " granularity);

                if let Some(trailing) = trailing {
                    let trailing = Ident(trailing);
                    fmt!(f, ", " trailing);
                }

                fmt!(f, ")");
            }
        }
    }
}
