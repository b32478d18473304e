//! Batch tools.

pub mod get;
pub mod list;

pub use get::{GetBatchParams, GetBatchTool};
pub use list::ListBatchesTool;
