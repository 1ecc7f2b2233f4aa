use super::Statement;

use quern_core::{Error, Result};

/// DDL forms the engine has no grammar for.
///
/// These constructors mirror the supported ones so a caller driving the
/// renderer from generic schema operations gets a typed refusal carrying the
/// operation name instead of malformed SQL.
impl Statement {
    pub fn create_index(_table: &str, _index: &str) -> Result<Statement> {
        Err(Error::unsupported("create-index"))
    }

    pub fn drop_index(_table: &str, _index: &str) -> Result<Statement> {
        Err(Error::unsupported("drop-index"))
    }

    pub fn create_foreign_key(_table: &str, _constraint: &str) -> Result<Statement> {
        Err(Error::unsupported("foreign-key"))
    }

    pub fn create_unique_constraint(_table: &str, _constraint: &str) -> Result<Statement> {
        Err(Error::unsupported("unique-constraint"))
    }

    pub fn create_check_constraint(_table: &str, _constraint: &str) -> Result<Statement> {
        Err(Error::unsupported("check-constraint"))
    }

    pub fn rename_column(_table: &str, _from: &str, _to: &str) -> Result<Statement> {
        Err(Error::unsupported("rename-column"))
    }

    pub fn truncate_table(_table: &str) -> Result<Statement> {
        Err(Error::unsupported("truncate"))
    }
}
