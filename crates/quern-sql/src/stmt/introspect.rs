use super::Statement;

/// A `DESCRIBE TABLE` request. The table name renders single-quoted, the one
/// place the engine's introspection grammar departs from identifier quoting.
#[derive(Debug, Clone)]
pub struct DescribeTable {
    pub table: String,
}

impl Statement {
    /// Lists the databases on the server.
    pub fn show_databases() -> Self {
        Statement::ShowDatabases
    }

    /// Lists base tables, excluding the engine's internal system catalog and
    /// view entries.
    pub fn list_tables() -> Self {
        Statement::ListTables
    }

    /// Lists views, excluding the engine's internal system catalog.
    pub fn list_views() -> Self {
        Statement::ListViews
    }

    /// Describes a table's columns.
    pub fn describe_table(table: &str) -> Self {
        Statement::DescribeTable(DescribeTable {
            table: table.into(),
        })
    }
}
