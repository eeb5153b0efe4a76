use crate::{
    error::Result,
    ioutils::{create_dir_all, make_executable, read_file, write_file},
    template::operation::FileOperation,
};
use log::{debug, info, warn};
use std::path::Path;

/// Adds execute permission to a written file.
pub type PermissionSetter = fn(&Path) -> std::io::Result<()>;

/// Writes resolved file operations to disk.
///
/// Conflict policy is settled before an operation reaches this point, so
/// targets are always overwritten. Writes are whole-file and not atomic.
#[derive(Debug)]
pub struct Materializer {
    set_executable: PermissionSetter,
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Materializer {
    pub fn new() -> Self {
        Self::with_permission_setter(|path| make_executable(path))
    }

    /// Uses `set_executable` instead of the platform permission call.
    pub fn with_permission_setter(set_executable: PermissionSetter) -> Self {
        Self { set_executable }
    }

    /// Performs a single operation. Failing to create the parent directory or
    /// to write the file is fatal; failing to set the executable bit only
    /// logs a warning.
    pub fn materialize(&self, operation: &FileOperation) -> Result<()> {
        debug!("Materializing: {}", operation.error_context());
        let target = operation.target();

        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }

        match operation {
            FileOperation::Write { content, .. } => write_file(content.as_bytes(), target)?,
            FileOperation::Copy { source, .. } => write_file(&read_file(source)?, target)?,
        }

        if operation.executable() {
            if let Err(e) = (self.set_executable)(target) {
                warn!("Cannot make '{}' executable: {}", target.display(), e);
            }
        }

        info!("{}", operation.get_message());
        Ok(())
    }
}
