mod error;
pub use error::{Error, RemoteKind};

pub mod driver;
pub use driver::Client;

pub mod schema;
pub use schema::TypeRegistry;

pub mod stmt;

/// A Result type alias that uses Quern's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
