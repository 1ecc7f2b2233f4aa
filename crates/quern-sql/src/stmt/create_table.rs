use super::{ColumnDef, Name, Statement};

use quern_core::schema::{Column, DefaultExpr, Engine, Table, TableOptions, Type};
use quern_core::{Error, Result};

/// The engine's default index granularity.
pub const DEFAULT_INDEX_GRANULARITY: u32 = 8192;

/// The name of the partition date column synthesized when a merge-family
/// table declares no Date column of its own.
pub const DEFAULT_EVENT_DATE_COLUMN: &str = "EventDate";

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions, partition column resolved and in physical order
    pub columns: Vec<ColumnDef>,

    /// Rendered after `ENGINE =`
    pub engine: EngineClause,
}

/// The engine clause of a CREATE TABLE statement.
#[derive(Debug, Clone)]
pub enum EngineClause {
    /// `ENGINE = <family>`
    Plain(&'static str),

    /// `ENGINE = <family>(<partition>, (<keys>), <granularity>[, <column>])`
    Merge {
        family: &'static str,
        partition: String,
        order_by: Vec<String>,
        granularity: u32,
        /// Version column (replacing) or sign column (collapsing).
        trailing: Option<String>,
    },
}

impl Statement {
    /// Builds a CREATE TABLE statement from a table intent.
    ///
    /// All merge-family invariants are enforced here, before any SQL exists:
    /// partition date column resolution and synthesis, ordering-key presence,
    /// and version/sign column typing.
    pub fn create_table(table: &Table) -> Result<Self> {
        let mut columns = table.columns.clone();

        let engine = if table.engine.is_merge_family() {
            let partition = resolve_partition_column(&mut columns, &table.options)?;

            if table.options.order_by.is_empty() {
                return Err(Error::configuration(format!(
                    "engine {} requires a non-empty ordering key",
                    table.engine.name()
                )));
            }
            for key in &table.options.order_by {
                if !columns.iter().any(|column| column.name == *key) {
                    return Err(Error::configuration(format!(
                        "ordering key references unknown column `{}`",
                        key
                    )));
                }
            }

            let granularity = table
                .options
                .index_granularity
                .unwrap_or(DEFAULT_INDEX_GRANULARITY);
            if granularity == 0 {
                return Err(Error::configuration("index granularity must be positive"));
            }

            EngineClause::Merge {
                family: table.engine.name(),
                partition,
                order_by: table.options.order_by.clone(),
                granularity,
                trailing: resolve_trailing_column(table.engine, &columns, &table.options)?,
            }
        } else {
            EngineClause::Plain(table.engine.name())
        };

        let columns = columns
            .iter()
            .map(ColumnDef::from_declaration)
            .collect::<Result<Vec<_>>>()?;

        Ok(CreateTable {
            name: Name::from(&table.name[..]),
            columns,
            engine,
        }
        .into())
    }
}

/// Resolves the partition date column for a merge-family table.
///
/// An explicit option wins and must name a Date column; if the named column
/// does not exist it is synthesized under that name. With no option, a sole
/// Date column is adopted; zero Date columns synthesize the default; two or
/// more are ambiguous.
fn resolve_partition_column(columns: &mut Vec<Column>, options: &TableOptions) -> Result<String> {
    if let Some(name) = &options.event_date_column {
        return match columns.iter().find(|column| column.name == *name) {
            Some(column) if column.ty == Type::Date => Ok(name.clone()),
            Some(column) => Err(Error::configuration(format!(
                "partition date column `{}` must be a Date, found {}",
                name,
                column.ty.engine_spelling()
            ))),
            None => {
                columns.insert(0, synthesized_date_column(name));
                Ok(name.clone())
            }
        };
    }

    let mut dates = columns.iter().filter(|column| column.ty == Type::Date);
    match (dates.next(), dates.next()) {
        (Some(column), None) => Ok(column.name.clone()),
        (None, _) => {
            columns.insert(0, synthesized_date_column(DEFAULT_EVENT_DATE_COLUMN));
            Ok(DEFAULT_EVENT_DATE_COLUMN.to_string())
        }
        (Some(_), Some(_)) => Err(Error::configuration(
            "more than one Date column; set the partition date column explicitly",
        )),
    }
}

fn synthesized_date_column(name: &str) -> Column {
    Column::new(name, Type::Date).with_default(DefaultExpr::Today)
}

/// Resolves the optional fourth engine-constructor argument: the version
/// column for the replacing family, the sign column for the collapsing
/// family.
fn resolve_trailing_column(
    engine: Engine,
    columns: &[Column],
    options: &TableOptions,
) -> Result<Option<String>> {
    if options.version_column.is_some() && engine != Engine::ReplacingMergeTree {
        return Err(Error::configuration(format!(
            "a version column is only valid for ReplacingMergeTree, not {}",
            engine.name()
        )));
    }
    if options.sign_column.is_some() && engine != Engine::CollapsingMergeTree {
        return Err(Error::configuration(format!(
            "a sign column is only valid for CollapsingMergeTree, not {}",
            engine.name()
        )));
    }

    match engine {
        Engine::ReplacingMergeTree => {
            let Some(name) = &options.version_column else {
                return Ok(None);
            };
            let column = find_column(columns, name, "version")?;
            if !column.ty.is_version_capable() {
                return Err(Error::configuration(format!(
                    "version column `{}` must be an integer, Date or DateTime, found {}",
                    name,
                    column.ty.engine_spelling()
                )));
            }
            Ok(Some(name.clone()))
        }
        Engine::CollapsingMergeTree => {
            let Some(name) = &options.sign_column else {
                return Err(Error::configuration(
                    "CollapsingMergeTree requires a sign column",
                ));
            };
            let column = find_column(columns, name, "sign")?;
            let signed_int8 = Type::Integer {
                bits: 8,
                unsigned: false,
            };
            if column.ty != signed_int8 {
                return Err(Error::configuration(format!(
                    "sign column `{}` must be an Int8, found {}",
                    name,
                    column.ty.engine_spelling()
                )));
            }
            Ok(Some(name.clone()))
        }
        _ => Ok(None),
    }
}

fn find_column<'a>(columns: &'a [Column], name: &str, role: &str) -> Result<&'a Column> {
    columns
        .iter()
        .find(|column| column.name == name)
        .ok_or_else(|| Error::configuration(format!("{} column `{}` does not exist", role, name)))
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
