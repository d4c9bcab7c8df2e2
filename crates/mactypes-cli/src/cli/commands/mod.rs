//! CLI command handlers, one per file.

mod alias;
mod completions;
mod file_url;
mod path;
mod units;
mod url;

pub use alias::run_alias;
pub use completions::run_completions;
pub use file_url::run_file_url;
pub use path::run_path;
pub use units::run_units;
pub use url::run_url;
