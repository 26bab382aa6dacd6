//! CLI command handlers, one file per subcommand.

mod check;
mod matches;
mod providers;

pub use check::{run_check, CheckOptions};
pub use matches::run_matches;
pub use providers::run_providers;
