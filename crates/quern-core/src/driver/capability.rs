/// Describes what the storage engine can and cannot do.
///
/// The connection facade consults this to refuse operations up front instead
/// of sending SQL the engine would reject unpredictably.
#[derive(Debug)]
pub struct Capability {
    /// Supports transaction begin/commit/rollback.
    pub transactions: bool,

    /// Supports savepoints. Implies `transactions`.
    pub savepoints: bool,

    /// Supports row-level UPDATE and DELETE statements.
    pub row_mutations: bool,

    /// Supports TRUNCATE TABLE.
    pub truncate: bool,

    /// Has an identity-column concept and reports last-insert ids.
    pub last_insert_id: bool,

    /// Reports the number of rows affected by a write statement. When false,
    /// the adapter reports a fixed count of 1 per write.
    pub affected_rows: bool,

    /// Columns may hold NULL on this statement surface.
    pub nullable_columns: bool,
}

impl Capability {
    /// ClickHouse capabilities.
    pub const CLICKHOUSE: Self = Self {
        transactions: false,
        savepoints: false,
        row_mutations: false,
        truncate: false,
        last_insert_id: false,
        affected_rows: false,
        nullable_columns: false,
    };
}
