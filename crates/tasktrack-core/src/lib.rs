//! Domain types and the storage trait for the task tracker.

pub mod error;
pub mod label;
pub mod memory;
pub mod store;
pub mod task;
pub mod user;

// Re-exports
pub use error::{Error, Result};
pub use label::{Label, TaskLabel};
pub use memory::MemoryStore;
pub use store::TaskStore;
pub use task::Task;
pub use user::User;
