mod column;
pub use column::{Column, DefaultExpr};

mod diff;
pub use diff::{ColumnChange, RenamedColumn, TableDiff};

mod registry;
pub use registry::{Declared, TypeRegistry};

mod table;
pub use table::{Engine, Table, TableOptions};

mod ty;
pub use ty::{BindKind, Type};
