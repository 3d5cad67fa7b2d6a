//! CLI command handlers, one per file.

mod completions;
mod status;
mod sync;

pub use completions::run_completions;
pub use status::run_status;
pub use sync::run_sync;
