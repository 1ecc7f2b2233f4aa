pub mod binder;
pub use binder::{Binder, ParamKey};

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
