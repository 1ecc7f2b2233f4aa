use quern_core::schema::{Column, DefaultExpr, Type};
use quern_core::stmt::Value;
use quern_core::{Error, Result};

/// A validated column definition, ready to render.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: Type,
    pub default: Option<DefaultExpr>,
}

impl ColumnDef {
    /// Validates a column declaration and converts it into a renderable
    /// definition.
    pub(crate) fn from_declaration(column: &Column) -> Result<ColumnDef> {
        column.ty.validate()?;

        if column.nullable {
            return Err(Error::configuration(format!(
                "column `{}` is declared nullable; the engine has no NULL columns",
                column.name
            )));
        }

        if let Some(DefaultExpr::Literal(Value::Null)) = column.default {
            return Err(Error::configuration(format!(
                "column `{}` has a NULL default; the engine has no NULL literal",
                column.name
            )));
        }

        Ok(ColumnDef {
            name: column.name.clone(),
            ty: column.ty.clone(),
            default: column.default.clone(),
        })
    }
}
