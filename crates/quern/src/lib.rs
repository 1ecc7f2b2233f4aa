mod config;
pub use config::Config;

mod connection;
pub use connection::{ColumnDescription, Connection};

mod result;
pub use result::{EntryKey, FetchShape, Fetched, Record, ResultSet};

mod statement;
pub use statement::Statement;

pub use quern_core::{
    async_trait,
    driver::{Capability, Client, Response, RowBlock, Rows},
    schema::{
        BindKind, Column, ColumnChange, DefaultExpr, Engine, RenamedColumn, Table, TableDiff,
        TableOptions, Type, TypeRegistry,
    },
    stmt::Value,
    Error, RemoteKind, Result,
};
pub use quern_sql::ParamKey;
