use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk the skeleton directory. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to build file patterns. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to bootstrap git repository. Original error: {0}")]
    Git2Error(#[from] git2::Error),

    #[error("Cannot proceed: skeleton directory '{skeleton_dir}' does not exist.")]
    SkeletonDoesNotExistError { skeleton_dir: String },

    #[error("Invalid application name '{name}'. Expected segments like 'My::App'.")]
    InvalidAppNameError { name: String },

    #[error("Cannot read '{path}'. Original error: {e}")]
    ReadError { path: String, e: std::io::Error },

    #[error("Cannot create directory '{path}'. Original error: {e}")]
    CreateDirectoryError { path: String, e: std::io::Error },

    #[error("Cannot write '{path}'. Original error: {e}")]
    WriteError { path: String, e: std::io::Error },

    #[error("Cannot write manifest '{path}'. Original error: {e}")]
    ManifestError { path: String, e: std::io::Error },

    #[error("Cannot append to ignore list '{path}'. Original error: {e}")]
    IgnoreListError { path: String, e: std::io::Error },

    /// The overwrite decision for an existing file could not be obtained.
    #[error("Cannot read overwrite decision for '{path}'. Original error: {e}")]
    PromptError { path: String, e: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with stencil's `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
