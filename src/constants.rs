//! Constants used throughout stencil

/// Opening delimiter of a skeleton token, e.g. `[s% appname %s]`
pub const TOKEN_OPEN: &str = "[s%";

/// Closing delimiter of a skeleton token
pub const TOKEN_CLOSE: &str = "%s]";

/// Leading basename character that marks a skeleton file as executable
pub const EXECUTABLE_MARKER: char = '+';

/// Execute bits added for owner, group and other
pub const EXECUTABLE_BITS: u32 = 0o111;

/// Skeleton file stem replaced by the application's module path
pub const APP_FILE_PLACEHOLDER: &str = "AppFile";

/// Extension of the generated application module
pub const APP_FILE_EXTENSION: &str = "pm";

/// Name of the generated manifest, also its own first entry
pub const MANIFEST_FILENAME: &str = "MANIFEST";

/// Name of the ignore list the destination directory pattern is appended to
pub const IGNORE_LIST_FILENAME: &str = "MANIFEST.SKIP";

/// Skeleton bundled with the crate, used when no `--skel` is given
pub const DEFAULT_SKELETON_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/skeleton");

/// Version string exposed to skeletons as `generator_version`
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version-control metadata directories never copied from a skeleton
pub const VCS_DIRECTORIES: &[&str] = &[".git", ".hg", ".svn", ".bzr", "CVS"];

/// Files with these extensions are copied byte-for-byte and never rendered
pub const BINARY_EXTENSIONS: &[&str] = &[
    "png", "gif", "jpg", "jpeg", "ico", "bmp", "webp", "svg", "ttf", "otf", "woff",
    "woff2", "eot", "css", "js", "map", "gz", "zip", "tar", "pdf",
];

/// Token names available to every skeleton
pub mod context_keys {
    pub const APP_NAME: &str = "appname";
    pub const APP_FILE: &str = "appfile";
    pub const APP_DIR: &str = "appdir";
    pub const PERL_INTERPRETER: &str = "perl_interpreter";
    pub const CLEAN_FILES: &str = "cleanfiles";
    pub const GENERATOR_VERSION: &str = "generator_version";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
