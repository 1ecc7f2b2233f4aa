use super::{Formatter, ToSql};

use quern_core::schema::Type;

impl ToSql for &Type {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.engine_spelling());
    }
}
