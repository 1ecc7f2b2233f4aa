use super::Column;

/// The change set for one table, as computed by the host framework's
/// schema-diffing engine.
///
/// The adapter does not diff schemas itself; it only renders a diff into
/// engine-correct DDL. Renamed columns are carried so the renderer can reject
/// them explicitly rather than dropping them on the floor.
#[derive(Debug, Clone, Default)]
pub struct TableDiff {
    /// Name of the table being altered.
    pub table: String,

    /// Columns to add.
    pub added: Vec<Column>,

    /// Columns whose declaration changed.
    pub changed: Vec<ColumnChange>,

    /// Names of columns to drop.
    pub dropped: Vec<String>,

    /// Columns the host framework wants renamed. The engine cannot rename
    /// columns; any entry here makes the diff unrenderable.
    pub renamed: Vec<RenamedColumn>,
}

/// A changed column: the new declaration, plus whether the default is the
/// only thing that changed.
#[derive(Debug, Clone)]
pub struct ColumnChange {
    /// The column's new declaration.
    pub column: Column,

    /// True when the declaration differs only in its default expression.
    pub default_only: bool,
}

#[derive(Debug, Clone)]
pub struct RenamedColumn {
    pub from: String,
    pub to: String,
}

impl TableDiff {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.changed.is_empty()
            && self.dropped.is_empty()
            && self.renamed.is_empty()
    }
}
