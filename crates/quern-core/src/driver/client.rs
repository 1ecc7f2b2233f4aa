use super::RowBlock;
use crate::{async_trait, Result};

use std::fmt::Debug;

/// The network collaborator that actually carries SQL to the engine.
///
/// The adapter hands a fully rendered statement string to exactly one of the
/// two entry points per call and never retries. Failures are reported as
/// remote execution errors (see [`Error::remote`](crate::Error::remote)).
/// Cancellation and timeouts live entirely behind this boundary.
#[async_trait]
pub trait Client: Debug + Send + Sync + 'static {
    /// Executes a row-returning statement (`SELECT`, `SHOW`, `DESCRIBE`).
    async fn read(&self, sql: &str) -> Result<RowBlock>;

    /// Executes a statement that returns no rows.
    async fn write(&self, sql: &str) -> Result<()>;
}
