use super::interface::{Decision, OverwriteDecider};
use crate::error::Result;
use log::debug;
use std::path::Path;

/// Outcome of conflict resolution for one destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Write,
    Skip,
}

/// Decides, file by file in walk order, whether a destination is written.
///
/// The "overwrite all" answer is sticky for the lifetime of the resolver,
/// which is one run. Files must be resolved sequentially for that to hold.
pub struct ConflictResolver<D: OverwriteDecider> {
    decider: D,
    force: bool,
    overwrite_all: bool,
}

impl<D: OverwriteDecider> ConflictResolver<D> {
    pub fn new(decider: D, force: bool) -> Self {
        Self { decider, force, overwrite_all: false }
    }

    pub fn resolve(&mut self, target: &Path) -> Result<Resolution> {
        if !target.exists() || self.force || self.overwrite_all {
            return Ok(Resolution::Write);
        }

        let decision = self.decider.decide(target)?;
        debug!("Decision for '{}': {:?}", target.display(), decision);
        match decision {
            Decision::Overwrite => Ok(Resolution::Write),
            Decision::OverwriteAll => {
                self.overwrite_all = true;
                Ok(Resolution::Write)
            }
            Decision::Skip => Ok(Resolution::Skip),
        }
    }

    pub fn overwrite_all(&self) -> bool {
        self.overwrite_all
    }

    pub fn decider(&self) -> &D {
        &self.decider
    }
}
