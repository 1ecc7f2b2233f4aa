use super::{Formatter, Ident, Period, ToSql};

use crate::stmt::{AlterAction, Name, Statement};

impl ToSql for &Name {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let segments = Period(self.0.iter().map(Ident));

        fmt!(f, segments);
    }
}

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::CreateDatabase(stmt) => {
                let name = &stmt.name;
                fmt!(f, "CREATE DATABASE " name);
            }
            Statement::DropDatabase(stmt) => {
                let name = &stmt.name;
                fmt!(f, "DROP DATABASE " name);
            }
            Statement::CreateTable(stmt) => fmt!(f, stmt),
            Statement::AlterTable(stmt) => {
                let name = &stmt.name;
                fmt!(f, "ALTER TABLE " name " ");
                match &stmt.action {
                    AlterAction::AddColumn(column) => fmt!(f, "ADD COLUMN " column),
                    AlterAction::ModifyColumn(column) => fmt!(f, "MODIFY COLUMN " column),
                    AlterAction::DropColumn(column) => {
                        let column = Ident(column);
                        fmt!(f, "DROP COLUMN " column);
                    }
                }
            }
            Statement::DropTable(stmt) => {
                let name = &stmt.name;
                if stmt.if_exists {
                    fmt!(f, "DROP TABLE IF EXISTS " name);
                } else {
                    fmt!(f, "DROP TABLE " name);
                }
            }
            Statement::CreateView(stmt) => {
                let name = &stmt.name;
                let query = &stmt.query[..];
                fmt!(f, "CREATE VIEW " name " AS " query);
            }
            Statement::DropView(stmt) => {
                let name = &stmt.name;
                fmt!(f, "DROP VIEW " name);
            }
            Statement::ShowDatabases => fmt!(f, "SHOW DATABASES FORMAT JSON"),
            Statement::ListTables => fmt!(
                f,
                "SELECT name FROM system.tables WHERE database != 'system' AND engine != 'View' FORMAT JSON"
            ),
            Statement::ListViews => fmt!(
                f,
                "SELECT name FROM system.tables WHERE database != 'system' AND engine = 'View' FORMAT JSON"
            ),
            Statement::DescribeTable(stmt) => {
                // The introspection grammar takes the table name as a
                // single-quoted string, not an identifier.
                let table = stmt.table.replace('\'', "''");
                let table = &table[..];
                fmt!(f, "DESCRIBE TABLE '" table "' FORMAT JSON");
            }
        }
    }
}
