use super::{ColumnDef, Name, Statement};

use quern_core::schema::{TableDiff, Type};
use quern_core::{Error, Result};

/// A statement to alter a table. One action per statement.
#[derive(Debug, Clone)]
pub struct AlterTable {
    /// Name of the table being altered.
    pub name: Name,

    /// The alteration to apply.
    pub action: AlterAction,
}

/// The action to perform in an ALTER TABLE statement.
#[derive(Debug, Clone)]
pub enum AlterAction {
    AddColumn(ColumnDef),
    ModifyColumn(ColumnDef),
    DropColumn(String),
}

impl Statement {
    /// Renders an externally computed table diff into ALTER TABLE
    /// statements, one action per statement.
    ///
    /// Renamed columns are rejected — the engine cannot express them. A
    /// changed column whose only change is its default and whose type maps
    /// to the engine's unconstrained string type is skipped: the engine has
    /// no default to change there, so the request is inert.
    pub fn alter_table(diff: &TableDiff) -> Result<Vec<Statement>> {
        if !diff.renamed.is_empty() {
            return Err(Error::unsupported("rename-column"));
        }

        let mut statements = Vec::new();
        let name = Name::from(&diff.table[..]);

        for column in &diff.added {
            statements.push(
                AlterTable {
                    name: name.clone(),
                    action: AlterAction::AddColumn(ColumnDef::from_declaration(column)?),
                }
                .into(),
            );
        }

        for change in &diff.changed {
            if change.default_only && change.column.ty == Type::String {
                continue;
            }
            statements.push(
                AlterTable {
                    name: name.clone(),
                    action: AlterAction::ModifyColumn(ColumnDef::from_declaration(
                        &change.column,
                    )?),
                }
                .into(),
            );
        }

        for dropped in &diff.dropped {
            statements.push(
                AlterTable {
                    name: name.clone(),
                    action: AlterAction::DropColumn(dropped.clone()),
                }
                .into(),
            );
        }

        Ok(statements)
    }
}

impl From<AlterTable> for Statement {
    fn from(value: AlterTable) -> Self {
        Self::AlterTable(value)
    }
}
