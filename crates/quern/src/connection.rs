use crate::{Config, FetchShape, Fetched, ResultSet, Statement};

use quern_core::driver::{Capability, Client, Response, Rows};
use quern_core::schema::{Table, TableDiff, Type, TypeRegistry};
use quern_core::stmt::Value;
use quern_core::{Error, Result};
use quern_sql as sql;

/// A single logical connection to the engine.
///
/// One statement at a time, synchronous request/response per call: each call
/// is one atomic render-then-send-then-materialize sequence. Operations the
/// engine structurally cannot perform are refused here, before any network
/// dispatch, with an error naming the operation.
#[derive(Debug)]
pub struct Connection {
    client: Box<dyn Client>,
    config: Option<Config>,
    types: TypeRegistry,
    serializer: sql::Serializer,
}

/// One column of a described table.
#[derive(Debug, Clone)]
pub struct ColumnDescription {
    pub name: String,

    /// Engine-native type spelling, as reported by the engine.
    pub native: String,

    /// Abstract type recovered through the registry's reverse lookup, when
    /// the spelling is known.
    pub ty: Option<Type>,

    /// Default expression reported by the engine, if any.
    pub default: Option<String>,
}

impl Connection {
    pub fn new(client: Box<dyn Client>) -> Self {
        Self {
            client,
            config: None,
            types: TypeRegistry::with_defaults(),
            serializer: sql::Serializer::new(),
        }
    }

    /// Creates a connection whose identity is parsed from a `clickhouse://`
    /// URL. The client is expected to point at the same endpoint.
    pub fn from_url(url: &str, client: Box<dyn Client>) -> Result<Self> {
        let config = Config::parse(url)?;
        Ok(Self {
            config: Some(config),
            ..Self::new(client)
        })
    }

    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn capability(&self) -> &'static Capability {
        &Capability::CLICKHOUSE
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    /// Runs a caller-issued statement and materializes its result.
    pub async fn query(&self, sql: &str) -> Result<ResultSet> {
        self.run(sql).await
    }

    /// Runs a caller-issued statement and reports its row count: the number
    /// of returned rows for a read, always 1 for a write.
    pub async fn execute(&self, sql: &str) -> Result<u64> {
        Ok(self.run(sql).await?.row_count())
    }

    /// Prepares a statement template for parameter binding.
    pub fn prepare(&self, template: &str) -> Statement<'_> {
        Statement::new(self, template)
    }

    /// Quotes a value per the engine's lexical rules.
    pub fn quote(&self, value: &Value) -> Result<String> {
        sql::binder::quote(value)
    }

    /// Quotes an identifier per the engine's lexical rules.
    pub fn quote_identifier(&self, name: &str) -> String {
        sql::serializer::literal::quote_string(name)
    }

    pub(crate) async fn run(&self, sql_text: &str) -> Result<ResultSet> {
        let response = self.dispatch(sql_text).await?;

        Ok(match response.rows {
            Rows::Block(block) => ResultSet::from_block(block),
            Rows::Count(_) => ResultSet::written(),
        })
    }

    async fn dispatch(&self, sql_text: &str) -> Result<Response> {
        match leading_keyword(sql_text) {
            keyword if keyword.eq_ignore_ascii_case("UPDATE") => {
                return Err(Error::unsupported("update"))
            }
            keyword if keyword.eq_ignore_ascii_case("DELETE") => {
                return Err(Error::unsupported("delete"))
            }
            keyword if keyword.eq_ignore_ascii_case("TRUNCATE") => {
                return Err(Error::unsupported("truncate"))
            }
            _ => {}
        }

        if is_read(sql_text) {
            tracing::debug!(sql = sql_text, "dispatching read statement");
            let block = self.client.read(sql_text).await?;
            Ok(Response::block(block))
        } else {
            tracing::debug!(sql = sql_text, "dispatching write statement");
            self.client.write(sql_text).await?;
            // The engine reports no affected-row count; a write is one unit
            // of work.
            Ok(Response::count(1))
        }
    }

    async fn run_ddl(&self, stmt: &sql::Statement) -> Result<()> {
        self.run(&self.serializer.serialize(stmt)).await?;
        Ok(())
    }

    // Schema operations

    pub async fn create_table(&self, table: &Table) -> Result<()> {
        self.run_ddl(&sql::Statement::create_table(table)?).await
    }

    pub async fn drop_table(&self, name: &str, if_exists: bool) -> Result<()> {
        let stmt = if if_exists {
            sql::Statement::drop_table_if_exists(name)
        } else {
            sql::Statement::drop_table(name)
        };
        self.run_ddl(&stmt).await
    }

    /// Applies an externally computed table diff, one ALTER statement per
    /// action.
    pub async fn alter_table(&self, diff: &TableDiff) -> Result<()> {
        for stmt in sql::Statement::alter_table(diff)? {
            self.run_ddl(&stmt).await?;
        }
        Ok(())
    }

    pub async fn create_database(&self, name: &str) -> Result<()> {
        self.run_ddl(&sql::Statement::create_database(name)).await
    }

    pub async fn drop_database(&self, name: &str) -> Result<()> {
        self.run_ddl(&sql::Statement::drop_database(name)).await
    }

    pub async fn create_view(&self, name: &str, query: &str) -> Result<()> {
        self.run_ddl(&sql::Statement::create_view(name, query)).await
    }

    pub async fn drop_view(&self, name: &str) -> Result<()> {
        self.run_ddl(&sql::Statement::drop_view(name)).await
    }

    // Introspection

    pub async fn list_databases(&self) -> Result<Vec<String>> {
        self.first_column(&sql::Statement::show_databases()).await
    }

    pub async fn list_tables(&self) -> Result<Vec<String>> {
        self.first_column(&sql::Statement::list_tables()).await
    }

    pub async fn list_views(&self) -> Result<Vec<String>> {
        self.first_column(&sql::Statement::list_views()).await
    }

    /// Describes a table's columns, recovering abstract types through the
    /// registry where the engine spelling is known.
    pub async fn describe_table(&self, name: &str) -> Result<Vec<ColumnDescription>> {
        let stmt = sql::Statement::describe_table(name);
        let mut result = self.run(&self.serializer.serialize(&stmt)).await?;

        let mut columns = Vec::new();
        while let Some(fetched) = result.fetch_one(FetchShape::Record)? {
            let Fetched::Record(record) = fetched else {
                continue;
            };
            let Some(name) = record.get_str("name") else {
                continue;
            };
            let native = record.get_str("type").unwrap_or_default().to_string();

            columns.push(ColumnDescription {
                name: name.to_string(),
                ty: self.types.reverse_lookup(&native),
                native,
                default: record
                    .get_str("default_expression")
                    .filter(|default| !default.is_empty())
                    .map(str::to_string),
            });
        }

        Ok(columns)
    }

    async fn first_column(&self, stmt: &sql::Statement) -> Result<Vec<String>> {
        let mut result = self.run(&self.serializer.serialize(stmt)).await?;

        let mut names = Vec::new();
        while let Some(fetched) = result.fetch_one(FetchShape::Positional)? {
            let Fetched::Positional(row) = fetched else {
                continue;
            };
            if let Some(Value::String(name)) = row.into_iter().next() {
                names.push(name);
            }
        }
        Ok(names)
    }

    // Capability gate. Every refusal is raised before any network dispatch
    // and carries the operation's name.

    pub fn begin_transaction(&self) -> Result<()> {
        Err(Error::unsupported("begin-transaction"))
    }

    pub fn commit(&self) -> Result<()> {
        Err(Error::unsupported("commit"))
    }

    pub fn rollback(&self) -> Result<()> {
        Err(Error::unsupported("rollback"))
    }

    pub fn create_savepoint(&self, _name: &str) -> Result<()> {
        Err(Error::unsupported("savepoint"))
    }

    pub fn release_savepoint(&self, _name: &str) -> Result<()> {
        Err(Error::unsupported("release-savepoint"))
    }

    pub fn rollback_to_savepoint(&self, _name: &str) -> Result<()> {
        Err(Error::unsupported("rollback-to-savepoint"))
    }

    pub fn set_transaction_isolation(&self, _level: &str) -> Result<()> {
        Err(Error::unsupported("set-transaction-isolation"))
    }

    pub fn transaction_isolation(&self) -> Result<String> {
        Err(Error::unsupported("transaction-isolation"))
    }

    pub fn last_insert_id(&self) -> Result<u64> {
        Err(Error::unsupported("last-insert-id"))
    }

    pub fn truncate_table(&self, _name: &str) -> Result<()> {
        Err(Error::unsupported("truncate"))
    }

    pub fn error_code(&self) -> Result<String> {
        Err(Error::unsupported("error-code"))
    }

    pub fn error_info(&self) -> Result<String> {
        Err(Error::unsupported("error-info"))
    }
}

fn leading_keyword(sql: &str) -> &str {
    sql.trim_start().split_whitespace().next().unwrap_or("")
}

/// A statement is a read when it begins with SELECT, SHOW or DESCRIBE;
/// everything else dispatches on the write entry point.
fn is_read(sql: &str) -> bool {
    let keyword = leading_keyword(sql);
    ["SELECT", "SHOW", "DESCRIBE"]
        .iter()
        .any(|read| keyword.eq_ignore_ascii_case(read))
}
