pub mod args;
pub mod context;
pub mod processor;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, Args};
pub use processor::ProcessSummary;
pub use runner::{run, RunReport, Runner};
