use crate::{
    constants::{IGNORE_LIST_FILENAME, MANIFEST_FILENAME},
    error::{Error, Result},
    ext::PathExt,
    ioutils::append_line,
    template::mapping::FileMapping,
};
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Records materialized files in processing order and writes `MANIFEST`
/// once the run is done.
///
/// The manifest lists its own name first, then every file written during
/// this run. Files skipped on conflict are not listed.
#[derive(Debug)]
pub struct ManifestBuilder {
    output_root: PathBuf,
    entries: Vec<String>,
}

impl ManifestBuilder {
    pub fn new<P: AsRef<Path>>(output_root: P) -> Self {
        Self {
            output_root: output_root.as_ref().to_path_buf(),
            entries: vec![MANIFEST_FILENAME.to_string()],
        }
    }

    /// Records a materialized file. The self-entry is never duplicated.
    pub fn record(&mut self, mapping: &FileMapping) {
        let entry = mapping.relative.to_slash_string();
        if entry == MANIFEST_FILENAME {
            debug!("Skeleton provides its own {MANIFEST_FILENAME}, keeping a single entry");
            return;
        }
        self.entries.push(entry);
    }

    /// All lines of the manifest, self-entry included.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.output_root.join(MANIFEST_FILENAME)
    }

    pub fn ignore_list_path(&self) -> PathBuf {
        self.output_root.join(IGNORE_LIST_FILENAME)
    }

    /// Writes the manifest, replacing any previous one.
    pub fn write(&self) -> Result<PathBuf> {
        let path = self.manifest_path();
        let manifest_error =
            |e: std::io::Error| Error::ManifestError { path: path.display().to_string(), e };

        let mut writer = BufWriter::new(File::create(&path).map_err(manifest_error)?);
        for entry in &self.entries {
            writeln!(writer, "{entry}").map_err(manifest_error)?;
        }
        writer.flush().map_err(manifest_error)?;

        info!("Wrote {} with {} entries", path.display(), self.entries.len());
        Ok(path)
    }

    /// Appends `^<dir_name>-` to the ignore list so distribution archives named
    /// after the project are not picked up by a later build. The name is
    /// matched literally.
    pub fn append_ignore_entry(&self, dir_name: &str) -> Result<PathBuf> {
        let path = self.ignore_list_path();
        let line = format!("^{}-", regex::escape(dir_name));
        append_line(&line, &path).map_err(|e| Error::IgnoreListError {
            path: path.display().to_string(),
            e,
        })?;
        info!("Appended '{line}' to {}", path.display());
        Ok(path)
    }
}
