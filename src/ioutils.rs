use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    fs::create_dir_all(dest_path).map_err(|e| Error::CreateDirectoryError {
        path: dest_path.display().to_string(),
        e,
    })
}

/// Writes the whole content, truncating any existing file. Parent
/// directories are created first.
pub fn write_file<P: AsRef<Path>>(content: &[u8], dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    fs::write(dest_path, content)
        .map_err(|e| Error::WriteError { path: dest_path.display().to_string(), e })
}

pub fn read_file<P: AsRef<Path>>(source_path: P) -> Result<Vec<u8>> {
    let source_path = source_path.as_ref();
    fs::read(source_path)
        .map_err(|e| Error::ReadError { path: source_path.display().to_string(), e })
}

/// Appends one line, creating the file when missing. Existing content is never truncated.
pub fn append_line<P: AsRef<Path>>(line: &str, dest_path: P) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(dest_path)?;
    writeln!(file, "{line}")
}

/// Adds execute permission for owner, group and other.
#[cfg(unix)]
pub fn make_executable<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    use crate::constants::EXECUTABLE_BITS;
    use std::os::unix::fs::PermissionsExt;

    let path = path.as_ref();
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | EXECUTABLE_BITS);
    fs::set_permissions(path, permissions)
}

/// Execute permission is not a file attribute on this platform.
#[cfg(not(unix))]
pub fn make_executable<P: AsRef<Path>>(_path: P) -> std::io::Result<()> {
    Ok(())
}
