use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for stencil.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the application to create, e.g. `My::App`.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory in which the application directory is created.
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Name of the application directory. Defaults to NAME with `::` replaced by `-`.
    #[arg(short, long)]
    pub directory: Option<String>,

    /// Skeleton directory to clone instead of the bundled one.
    #[arg(short, long, value_name = "DIR")]
    pub skel: Option<PathBuf>,

    /// Overwrite existing files without asking.
    #[arg(short, long)]
    pub overwrite: bool,

    /// Initialise a git repository and commit the generated files.
    #[arg(long)]
    pub git: bool,

    /// Remote URL added as `origin`. Requires `--git`.
    #[arg(long, value_name = "URL")]
    pub remote: Option<String>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
