use crate::{
    constants::APP_FILE_PLACEHOLDER,
    error::{Error, Result},
    ignore::SkeletonFilters,
    template::mapping::{strip_executable_marker, FileMapping},
};
use log::debug;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Enumerates the regular files of a skeleton into `FileMapping`s.
///
/// Entries are visited sorted by file name at every level, so the resulting
/// order is the same on every platform and every run. Top-level
/// version-control directories are pruned without being descended into.
pub struct TreeWalker<'a> {
    skeleton_root: &'a Path,
    output_root: &'a Path,
    filters: &'a SkeletonFilters,
    /// `/`-separated module path replacing the `AppFile` placeholder stem, e.g. `My/App`
    app_file_stem: Option<&'a str>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(
        skeleton_root: &'a Path,
        output_root: &'a Path,
        filters: &'a SkeletonFilters,
    ) -> Self {
        Self { skeleton_root, output_root, filters, app_file_stem: None }
    }

    pub fn with_app_file_stem(mut self, app_file_stem: &'a str) -> Self {
        self.app_file_stem = Some(app_file_stem);
        self
    }

    /// Walks the whole skeleton. Nothing is written by this step, so a missing
    /// or unreadable skeleton aborts the run before any output exists.
    pub fn walk(&self) -> Result<Vec<FileMapping>> {
        if !self.skeleton_root.is_dir() {
            return Err(Error::SkeletonDoesNotExistError {
                skeleton_dir: self.skeleton_root.display().to_string(),
            });
        }

        let mut mappings = Vec::new();
        let entries = WalkDir::new(self.skeleton_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_vcs_entry(entry));

        for entry in entries {
            let entry = entry?;
            if !entry.file_type().is_file() {
                if entry.file_type().is_symlink() {
                    debug!("Skipping symlink '{}'", entry.path().display());
                }
                continue;
            }

            let relative = self.relative_path(entry.path())?;
            let mapping = self.map_entry(entry.path(), relative);
            debug!(
                "Mapped '{}' -> '{}' (executable: {})",
                mapping.source.display(),
                mapping.target.display(),
                mapping.executable
            );
            mappings.push(mapping);
        }

        Ok(mappings)
    }

    fn relative_path<'p>(&self, path: &'p Path) -> Result<&'p Path> {
        path.strip_prefix(self.skeleton_root).map_err(|e| Error::ProcessError {
            source_path: path.display().to_string(),
            e: e.to_string(),
        })
    }

    fn is_vcs_entry(&self, entry: &DirEntry) -> bool {
        // depth 0 is the skeleton root itself
        entry.depth() > 0
            && self
                .relative_path(entry.path())
                .map(|relative| self.filters.is_vcs_metadata(relative))
                .unwrap_or(false)
    }

    /// Builds the destination-relative path: parent directories are kept as
    /// is, the basename loses its executable marker and an `AppFile` stem is
    /// expanded into the module path.
    fn map_entry(&self, source: &Path, relative: &Path) -> FileMapping {
        let mut destination =
            relative.parent().map(Path::to_path_buf).unwrap_or_default();
        let (file_name, executable) =
            strip_executable_marker(relative.file_name().unwrap_or_default());

        match file_name.to_str().and_then(|name| self.expand_app_file(name)) {
            Some(expanded) => destination.extend(expanded),
            None => destination.push(file_name),
        }

        FileMapping::new(source.to_path_buf(), self.output_root, destination, executable)
    }

    fn expand_app_file(&self, file_name: &str) -> Option<Vec<String>> {
        let stem = self.app_file_stem?;
        let extension = file_name.strip_prefix(APP_FILE_PLACEHOLDER)?;
        if !extension.is_empty() && !extension.starts_with('.') {
            return None;
        }

        let mut segments: Vec<String> = stem.split('/').map(str::to_string).collect();
        if let Some(last) = segments.last_mut() {
            last.push_str(extension);
        }
        Some(segments)
    }
}
