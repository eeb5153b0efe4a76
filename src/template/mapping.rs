use crate::constants::EXECUTABLE_MARKER;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// One skeleton file and where it lands in the destination tree.
///
/// The executable marker is resolved when the mapping is created: `relative`
/// and `target` never carry it, `executable` records it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMapping {
    /// Absolute path of the skeleton file
    pub source: PathBuf,
    /// Destination path, always `output_root.join(relative)`
    pub target: PathBuf,
    /// Destination path relative to the output root
    pub relative: PathBuf,
    /// Whether permissions must be widened after writing
    pub executable: bool,
}

impl FileMapping {
    pub fn new<P: AsRef<Path>>(
        source: PathBuf,
        output_root: P,
        relative: PathBuf,
        executable: bool,
    ) -> Self {
        let target = output_root.as_ref().join(&relative);
        Self { source, target, relative, executable }
    }
}

/// Splits the executable marker off a basename. The rest of the name is
/// returned unchanged, whether or not it is valid Unicode.
///
/// # Returns
/// * `(&OsStr, bool)` - The basename without marker, and whether it was present
pub fn strip_executable_marker(file_name: &OsStr) -> (&OsStr, bool) {
    match file_name.to_str() {
        Some(name) => match name.strip_prefix(EXECUTABLE_MARKER) {
            Some(stripped) => (OsStr::new(stripped), true),
            None => (file_name, false),
        },
        None => strip_marker_bytes(file_name),
    }
}

#[cfg(unix)]
fn strip_marker_bytes(file_name: &OsStr) -> (&OsStr, bool) {
    use std::os::unix::ffi::OsStrExt;

    let mut buffer = [0; 4];
    let marker = EXECUTABLE_MARKER.encode_utf8(&mut buffer).as_bytes();
    match file_name.as_bytes().strip_prefix(marker) {
        Some(stripped) => (OsStr::from_bytes(stripped), true),
        None => (file_name, false),
    }
}

/// Names that are not valid Unicode keep their marker on this platform.
#[cfg(not(unix))]
fn strip_marker_bytes(file_name: &OsStr) -> (&OsStr, bool) {
    (file_name, false)
}
