use std::path::PathBuf;

/// What the materializer has to do for one file that passed conflict resolution.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// Rendered text to write
    Write { target: PathBuf, content: String, executable: bool, target_exists: bool },
    /// Byte-for-byte copy of a render-ineligible file
    Copy { source: PathBuf, target: PathBuf, executable: bool, target_exists: bool },
}

impl FileOperation {
    pub fn target(&self) -> &PathBuf {
        match self {
            FileOperation::Write { target, .. } | FileOperation::Copy { target, .. } => {
                target
            }
        }
    }

    pub fn executable(&self) -> bool {
        match self {
            FileOperation::Write { executable, .. }
            | FileOperation::Copy { executable, .. } => *executable,
        }
    }

    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            FileOperation::Copy { source, target, .. } => {
                format!("copy '{}' -> '{}'", source.display(), target.display())
            }
            FileOperation::Write { target, .. } => {
                format!("write '{}'", target.display())
            }
        }
    }

    /// Gets a message describing the completed operation.
    pub fn get_message(&self) -> String {
        let suffix = match (self.target_exists(), self.executable()) {
            (true, true) => " (overwriting existing file, executable)",
            (true, false) => " (overwriting existing file)",
            (false, true) => " (executable)",
            (false, false) => "",
        };

        match self {
            FileOperation::Copy { source, target, .. } => format!(
                "Copying '{}' to '{}'{}",
                source.display(),
                target.display(),
                suffix
            ),
            FileOperation::Write { target, .. } => {
                format!("Writing to '{}'{}", target.display(), suffix)
            }
        }
    }

    fn target_exists(&self) -> bool {
        match self {
            FileOperation::Write { target_exists, .. }
            | FileOperation::Copy { target_exists, .. } => *target_exists,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_operation_logs_overwrite_message() {
        let source = PathBuf::from("/tmp/skel/style.css");
        let target = PathBuf::from("/tmp/out/style.css");
        let expected = format!(
            "Copying '{}' to '{}' (overwriting existing file)",
            &source.display(),
            &target.display()
        );

        let copy =
            FileOperation::Copy { source, target, executable: false, target_exists: true };
        assert_eq!(copy.get_message(), expected);
    }

    #[test]
    fn copy_operation_logs_basic_message() {
        let source = PathBuf::from("/tmp/skel/style.css");
        let target = PathBuf::from("/tmp/out/style.css");
        let expected =
            format!("Copying '{}' to '{}'", &source.display(), &target.display());

        let copy =
            FileOperation::Copy { source, target, executable: false, target_exists: false };
        assert_eq!(copy.get_message(), expected);
    }

    #[test]
    fn write_operation_mentions_executable() {
        let target = PathBuf::from("/tmp/out/bin/app.psgi");
        let expected = format!("Writing to '{}' (executable)", &target.display());

        let write = FileOperation::Write {
            target,
            content: String::new(),
            executable: true,
            target_exists: false,
        };
        assert_eq!(write.get_message(), expected);
        assert!(write.executable());
    }

    #[test]
    fn write_operation_overwrite_message() {
        let target = PathBuf::from("/tmp/out/config.yml");
        let expected =
            format!("Writing to '{}' (overwriting existing file)", &target.display());

        let write = FileOperation::Write {
            target,
            content: String::new(),
            executable: false,
            target_exists: true,
        };
        assert_eq!(write.get_message(), expected);
    }

    #[test]
    fn error_context_for_copy_includes_source_and_target() {
        let op = FileOperation::Copy {
            source: PathBuf::from("/skel/public/logo.png"),
            target: PathBuf::from("/out/public/logo.png"),
            executable: false,
            target_exists: false,
        };
        let context = op.error_context();
        assert!(context.contains("copy"));
        assert!(context.contains("/skel/public/logo.png"));
        assert!(context.contains("/out/public/logo.png"));
        assert_eq!(op.target(), &PathBuf::from("/out/public/logo.png"));
    }
}
