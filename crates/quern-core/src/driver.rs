mod capability;
pub use capability::Capability;

mod client;
pub use client::Client;

mod response;
pub use response::{Response, RowBlock, Rows};
