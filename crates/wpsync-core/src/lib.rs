pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod manifest;
pub mod sync;
pub mod url_model;

pub use error::{Result, SyncError};
