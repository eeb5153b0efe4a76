use crate::{
    constants::{BINARY_EXTENSIONS, VCS_DIRECTORIES},
    error::Result,
};
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Pattern sets deciding which skeleton files are skipped by the walker and
/// which ones are copied verbatim instead of rendered.
#[derive(Debug, Clone)]
pub struct SkeletonFilters {
    vcs: GlobSet,
    binary: GlobSet,
}

impl SkeletonFilters {
    pub fn new() -> Result<Self> {
        Ok(Self { vcs: build_vcs_globset()?, binary: build_binary_globset()? })
    }

    /// Whether `relative` (a path relative to the skeleton root) is a
    /// version-control metadata directory, or lies beneath one, at the top level.
    pub fn is_vcs_metadata<P: AsRef<Path>>(&self, relative: P) -> bool {
        self.vcs.is_match(relative.as_ref())
    }

    /// Whether a file should be decoded and rendered. Only the basename is
    /// inspected, case-insensitively.
    pub fn is_render_eligible<P: AsRef<Path>>(&self, path: P) -> bool {
        match path.as_ref().file_name() {
            Some(file_name) => !self.binary.is_match(file_name),
            None => false,
        }
    }
}

fn build_vcs_globset() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for dir in VCS_DIRECTORIES {
        for pattern in [dir.to_string(), format!("{dir}/**")] {
            debug!("Adding VCS pattern: {} to globset", pattern);
            builder.add(Glob::new(&pattern)?);
        }
    }
    Ok(builder.build()?)
}

fn build_binary_globset() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for extension in BINARY_EXTENSIONS {
        let glob =
            GlobBuilder::new(&format!("*.{extension}")).case_insensitive(true).build()?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}
