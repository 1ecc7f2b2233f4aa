use crate::{Connection, ResultSet};

use quern_core::schema::BindKind;
use quern_core::stmt::Value;
use quern_core::Result;
use quern_sql::{Binder, ParamKey};

/// A prepared statement: a template plus bound parameters.
///
/// "Prepared" is textual, not protocol-level — executing renders the
/// template and bound values into one finished SQL string and dispatches it.
/// The statement can be rebound and executed again; every execution renders
/// from the original template.
#[derive(Debug)]
pub struct Statement<'a> {
    connection: &'a Connection,
    binder: Binder,
}

impl<'a> Statement<'a> {
    pub(crate) fn new(connection: &'a Connection, template: &str) -> Self {
        Self {
            connection,
            binder: Binder::new(template),
        }
    }

    /// Binds a value, inferring its wire kind.
    pub fn bind(&mut self, key: impl Into<ParamKey>, value: impl Into<Value>) -> Result<()> {
        self.binder.bind(key, value)
    }

    /// Binds a value with an explicit wire kind.
    pub fn bind_typed(
        &mut self,
        key: impl Into<ParamKey>,
        value: impl Into<Value>,
        kind: BindKind,
    ) -> Result<()> {
        self.binder.bind_typed(key, value, kind)
    }

    /// Drops all bindings, keeping the template.
    pub fn clear_bindings(&mut self) {
        self.binder.clear();
    }

    /// The SQL this statement would dispatch right now.
    pub fn render(&self) -> String {
        self.binder.render()
    }

    /// Renders and dispatches the statement, materializing its result.
    pub async fn execute(&self) -> Result<ResultSet> {
        self.connection.run(&self.render()).await
    }
}
