use super::{Name, Statement};

/// A statement to drop a table.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// Name of the table
    pub name: Name,

    /// When true, generates a `DROP TABLE IF EXISTS` statement.
    pub if_exists: bool,
}

impl Statement {
    /// Drops a table.
    pub fn drop_table(name: &str) -> Self {
        DropTable {
            name: Name::from(name),
            if_exists: false,
        }
        .into()
    }

    /// Drops a table if it exists.
    pub fn drop_table_if_exists(name: &str) -> Self {
        DropTable {
            name: Name::from(name),
            if_exists: true,
        }
        .into()
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}
