use crate::stmt::Value;
use crate::{Error, RemoteKind, Result};

use serde::Deserialize;

/// The raw tabular payload of one engine response: a shared column list and
/// one value vector per row, column order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowBlock {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// The result of dispatching one statement.
#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by a write operation
    Count(u64),

    /// Rows returned by a read operation
    Block(RowBlock),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn block(block: RowBlock) -> Self {
        Self {
            rows: Rows::Block(block),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }
}

#[derive(Deserialize)]
struct Envelope {
    meta: Vec<ColumnMeta>,
    #[serde(default)]
    data: Vec<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Deserialize)]
struct ColumnMeta {
    name: String,
}

impl RowBlock {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Parses the engine's `FORMAT JSON` response envelope.
    ///
    /// Cell order follows the `meta` section, not the JSON object order, so
    /// column order survives transports that reorder object keys. Cells a row
    /// omits come back as [`Value::Null`].
    pub fn from_json(body: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(body)
            .map_err(|err| Error::remote(RemoteKind::Other, err))?;

        let columns: Vec<String> = envelope.meta.into_iter().map(|meta| meta.name).collect();

        let rows = envelope
            .data
            .into_iter()
            .map(|mut object| {
                columns
                    .iter()
                    .map(|column| {
                        object
                            .remove(column)
                            .map(Value::from)
                            .unwrap_or(Value::Null)
                    })
                    .collect()
            })
            .collect();

        Ok(Self { columns, rows })
    }
}
