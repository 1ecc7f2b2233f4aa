use indexmap::IndexMap;
use quern_core::driver::RowBlock;
use quern_core::stmt::Value;
use quern_core::{Error, Result};

/// The output container convention a row is projected into at consumption
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchShape {
    /// Values in column order.
    Positional,

    /// Column name to value, in column order.
    Associative,

    /// One mixed-key container: the positional entries, then the associative
    /// entries. An index key and a same-named string key coexist by design.
    Both,

    /// A [`Record`] with field access by name.
    Record,

    /// The first two columns as a key/value pair. Requires at least two
    /// columns.
    KeyPair,
}

/// A key in the [`FetchShape::Both`] projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKey {
    Index(usize),
    Name(String),
}

/// One row, projected into the requested shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    Positional(Vec<Value>),
    Associative(IndexMap<String, Value>),
    Both(Vec<(EntryKey, Value)>),
    Record(Record),
    KeyPair(Value, Value),
}

/// A row as a generic object: ordered fields with access by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(Value::I64(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One materialized engine response behind a forward-only cursor.
///
/// A row-returning statement materializes its rows; a write statement
/// materializes a fixed row count of 1, since the engine does not report
/// affected rows.
#[derive(Debug)]
pub struct ResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    cursor: usize,
    write_result: bool,
}

impl ResultSet {
    pub(crate) fn from_block(block: RowBlock) -> Self {
        Self {
            columns: block.columns,
            rows: block.rows,
            cursor: 0,
            write_result: false,
        }
    }

    /// The result of a statement that returns no rows.
    pub(crate) fn written() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            cursor: 0,
            write_result: true,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows for a row-returning statement; always 1 for a write
    /// statement.
    pub fn row_count(&self) -> u64 {
        if self.write_result {
            1
        } else {
            self.rows.len() as u64
        }
    }

    /// Fetches the next row in the requested shape. Returns `None` once the
    /// cursor is exhausted, and deterministically after [`free`](Self::free).
    pub fn fetch_one(&mut self, shape: FetchShape) -> Result<Option<Fetched>> {
        if matches!(shape, FetchShape::KeyPair) && self.column_count() < 2 {
            return Err(Error::binding(
                "key-pair fetch requires at least two columns",
            ));
        }

        if self.cursor >= self.rows.len() {
            return Ok(None);
        }

        let row = std::mem::take(&mut self.rows[self.cursor]);
        self.cursor += 1;

        self.project(row, shape).map(Some)
    }

    /// Drains the remaining rows in the requested shape.
    pub fn fetch_all(&mut self, shape: FetchShape) -> Result<Vec<Fetched>> {
        let mut all = Vec::with_capacity(self.rows.len().saturating_sub(self.cursor));
        while let Some(fetched) = self.fetch_one(shape)? {
            all.push(fetched);
        }
        Ok(all)
    }

    /// Releases the materialized rows. Subsequent fetches return empty.
    pub fn free(&mut self) {
        self.rows.clear();
        self.cursor = 0;
    }

    fn project(&self, row: Vec<Value>, shape: FetchShape) -> Result<Fetched> {
        Ok(match shape {
            FetchShape::Positional => Fetched::Positional(row),
            FetchShape::Associative => Fetched::Associative(self.zip(row)),
            FetchShape::Both => {
                let mut entries = Vec::with_capacity(row.len() * 2);
                for (index, value) in row.iter().enumerate() {
                    entries.push((EntryKey::Index(index), value.clone()));
                }
                for (name, value) in self.columns.iter().zip(row) {
                    entries.push((EntryKey::Name(name.clone()), value));
                }
                Fetched::Both(entries)
            }
            FetchShape::Record => Fetched::Record(Record {
                fields: self.zip(row),
            }),
            FetchShape::KeyPair => {
                let mut values = row.into_iter();
                match (values.next(), values.next()) {
                    (Some(key), Some(value)) => Fetched::KeyPair(key, value),
                    _ => {
                        return Err(Error::binding(
                            "key-pair fetch requires at least two columns",
                        ))
                    }
                }
            }
        })
    }

    fn zip(&self, row: Vec<Value>) -> IndexMap<String, Value> {
        self.columns.iter().cloned().zip(row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ResultSet {
        ResultSet::from_block(RowBlock::new(
            vec!["id".into(), "payload".into()],
            vec![
                vec![Value::I64(1), Value::String("a".into())],
                vec![Value::I64(2), Value::String("b".into())],
            ],
        ))
    }

    #[test]
    fn positional_and_associative_shapes() {
        let mut result = sample();

        let row = result.fetch_one(FetchShape::Positional).unwrap().unwrap();
        assert_eq!(
            row,
            Fetched::Positional(vec![Value::I64(1), Value::String("a".into())])
        );

        let row = result.fetch_one(FetchShape::Associative).unwrap().unwrap();
        let Fetched::Associative(fields) = row else {
            panic!("wrong shape: {row:?}");
        };
        assert_eq!(fields.get("id"), Some(&Value::I64(2)));
        assert_eq!(fields.get("payload"), Some(&Value::String("b".into())));
    }

    #[test]
    fn both_shape_prepends_positional_entries() {
        let mut result = sample();

        let row = result.fetch_one(FetchShape::Both).unwrap().unwrap();
        assert_eq!(
            row,
            Fetched::Both(vec![
                (EntryKey::Index(0), Value::I64(1)),
                (EntryKey::Index(1), Value::String("a".into())),
                (EntryKey::Name("id".into()), Value::I64(1)),
                (EntryKey::Name("payload".into()), Value::String("a".into())),
            ])
        );
    }

    #[test]
    fn record_shape_reads_by_name() {
        let mut result = sample();

        let row = result.fetch_one(FetchShape::Record).unwrap().unwrap();
        let Fetched::Record(record) = row else {
            panic!("wrong shape: {row:?}");
        };
        assert_eq!(record.get_i64("id"), Some(1));
        assert_eq!(record.get_str("payload"), Some("a"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn key_pair_takes_the_first_two_columns() {
        let mut result = sample();

        let row = result.fetch_one(FetchShape::KeyPair).unwrap().unwrap();
        assert_eq!(
            row,
            Fetched::KeyPair(Value::I64(1), Value::String("a".into()))
        );
    }

    #[test]
    fn key_pair_on_single_column_fails_at_fetch_time() {
        let mut result = ResultSet::from_block(RowBlock::new(
            vec!["id".into()],
            vec![vec![Value::I64(1)]],
        ));

        let err = result.fetch_one(FetchShape::KeyPair).unwrap_err();
        assert!(err.is_binding());
    }

    #[test]
    fn drained_and_freed_results_fetch_empty() {
        let mut result = sample();

        let all = result.fetch_all(FetchShape::Associative).unwrap();
        assert_eq!(all.len(), 2);
        assert!(result.fetch_one(FetchShape::Positional).unwrap().is_none());

        let mut result = sample();
        result.free();
        assert!(result.fetch_one(FetchShape::Positional).unwrap().is_none());
        assert_eq!(result.row_count(), 0);
    }

    #[test]
    fn write_results_report_one_row() {
        let result = ResultSet::written();
        assert_eq!(result.row_count(), 1);
        assert_eq!(result.column_count(), 0);
    }
}
