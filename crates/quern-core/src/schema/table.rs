use super::Column;

/// Storage engine families the adapter can create tables for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// In-memory table, lost on server restart.
    Memory,

    /// Minimal log engine.
    TinyLog,

    /// Log engine with concurrent-read support.
    Log,

    /// The base merge engine: partitioned by date, sorted by the ordering
    /// key.
    MergeTree,

    /// Merge engine that deduplicates rows sharing an ordering key,
    /// optionally tie-breaking on a version column.
    ReplacingMergeTree,

    /// Merge engine that collapses rows sharing an ordering key by summing
    /// numeric columns.
    SummingMergeTree,

    /// Merge engine that cancels row pairs via a sign column.
    CollapsingMergeTree,
}

impl Engine {
    /// Engine-native name, as it appears after `ENGINE =`.
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Memory => "Memory",
            Engine::TinyLog => "TinyLog",
            Engine::Log => "Log",
            Engine::MergeTree => "MergeTree",
            Engine::ReplacingMergeTree => "ReplacingMergeTree",
            Engine::SummingMergeTree => "SummingMergeTree",
            Engine::CollapsingMergeTree => "CollapsingMergeTree",
        }
    }

    /// True for engines that require a partition date column and an ordering
    /// key.
    pub fn is_merge_family(&self) -> bool {
        matches!(
            self,
            Engine::MergeTree
                | Engine::ReplacingMergeTree
                | Engine::SummingMergeTree
                | Engine::CollapsingMergeTree
        )
    }
}

/// Engine-specific table options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions {
    /// Ordering key. Required (non-empty) for the merge family.
    pub order_by: Vec<String>,

    /// Explicit partition date column. When absent, a sole Date column is
    /// adopted, or a default one is synthesized.
    pub event_date_column: Option<String>,

    /// Index granularity for the merge family. Defaults to 8192.
    pub index_granularity: Option<u32>,

    /// Version column for [`Engine::ReplacingMergeTree`].
    pub version_column: Option<String>,

    /// Sign column for [`Engine::CollapsingMergeTree`].
    pub sign_column: Option<String>,
}

/// A table-creation intent: everything the dialect renderer needs to emit a
/// `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// Column declarations, in physical order
    pub columns: Vec<Column>,

    /// Storage engine family
    pub engine: Engine,

    /// Engine-specific options
    pub options: TableOptions,
}

impl Table {
    pub fn new(name: impl Into<String>, engine: Engine) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            engine,
            options: TableOptions::default(),
        }
    }

    /// Appends a column declaration.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }
}
