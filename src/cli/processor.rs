use crate::{
    conflict::{ConflictResolver, OverwriteDecider, Resolution},
    error::Result,
    manifest::ManifestBuilder,
    materializer::Materializer,
    template::{mapping::FileMapping, processor::TemplateProcessor},
};
use log::info;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Runs every mapping through conflict resolution, rendering and
/// materialization, one file at a time in walk order.
pub struct FileProcessor<'a, D: OverwriteDecider> {
    processor: TemplateProcessor<'a>,
    resolver: ConflictResolver<D>,
    materializer: Materializer,
}

impl<'a, D: OverwriteDecider> FileProcessor<'a, D> {
    pub fn new(processor: TemplateProcessor<'a>, resolver: ConflictResolver<D>) -> Self {
        Self { processor, resolver, materializer: Materializer::new() }
    }

    /// Processes all mappings, recording each written file in `manifest`.
    /// The first fatal error stops the loop; files already written stay.
    pub fn process_all_files(
        &mut self,
        mappings: &[FileMapping],
        manifest: &mut ManifestBuilder,
    ) -> Result<ProcessSummary> {
        let mut summary = ProcessSummary::default();

        for mapping in mappings {
            let target_exists = mapping.target.exists();
            match self.resolver.resolve(&mapping.target)? {
                Resolution::Skip => {
                    info!("Skipping '{}' (target already exists)", mapping.target.display());
                    summary.skipped += 1;
                }
                Resolution::Write => {
                    let operation = self.processor.process(mapping, target_exists)?;
                    self.materializer.materialize(&operation)?;
                    manifest.record(mapping);
                    summary.written += 1;
                }
            }
        }

        Ok(summary)
    }

    pub fn resolver(&self) -> &ConflictResolver<D> {
        &self.resolver
    }
}
