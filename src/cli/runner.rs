use crate::{
    cli::{context::GenerationContext, processor::FileProcessor, Args, ProcessSummary},
    conflict::{default_decider, ConflictResolver, OverwriteDecider},
    error::Result,
    git::bootstrap_repository,
    ignore::SkeletonFilters,
    ioutils::create_dir_all,
    manifest::ManifestBuilder,
    renderer::get_template_engine,
    template::{processor::TemplateProcessor, walker::TreeWalker},
};
use log::{debug, info, warn};
use std::path::PathBuf;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_root: PathBuf,
    pub manifest: Vec<String>,
    pub summary: ProcessSummary,
}

/// Main CLI runner that orchestrates the entire skeleton generation workflow
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete workflow, asking `decider` about existing files.
    pub fn run_with_decider<D: OverwriteDecider>(self, decider: D) -> Result<RunReport> {
        let context = GenerationContext::from_args(&self.args)?;
        info!(
            "Generating '{}' from '{}' into '{}'",
            context.app_name(),
            context.skeleton_root().display(),
            context.output_root().display()
        );
        let render_context = context.render_context()?;
        for (name, value) in render_context.iter() {
            debug!("Token '{name}' = '{value}'");
        }

        let filters = SkeletonFilters::new()?;
        let mappings =
            TreeWalker::new(context.skeleton_root(), context.output_root(), &filters)
                .with_app_file_stem(context.app_file_stem())
                .walk()?;
        debug!(
            "Found {} skeleton files in '{}'",
            mappings.len(),
            context.skeleton_root().display()
        );

        // MANIFEST is written even when the skeleton yields no files
        create_dir_all(context.output_root())?;

        let engine = get_template_engine();
        let processor = TemplateProcessor::new(&engine, &filters, &render_context);
        let resolver = ConflictResolver::new(decider, context.force());
        let mut manifest = ManifestBuilder::new(context.output_root());

        let summary = FileProcessor::new(processor, resolver)
            .process_all_files(&mappings, &mut manifest)?;

        manifest.write()?;
        manifest.append_ignore_entry(context.dir_name())?;

        self.bootstrap_git(&context)?;

        Ok(RunReport {
            output_root: context.output_root().to_path_buf(),
            manifest: manifest.entries().to_vec(),
            summary,
        })
    }

    /// Executes the complete workflow with the decider suited to stdin.
    pub fn run(self) -> Result<RunReport> {
        self.run_with_decider(default_decider())
    }

    fn bootstrap_git(&self, context: &GenerationContext) -> Result<()> {
        if self.args.git {
            bootstrap_repository(context.output_root(), self.args.remote.as_deref())?;
        } else if let Some(remote) = &self.args.remote {
            warn!("Ignoring remote '{remote}': it requires --git");
        }
        Ok(())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let report = Runner::new(args).run()?;
    println!(
        "Application skeleton generated in {} ({} written, {} skipped).",
        report.output_root.display(),
        report.summary.written,
        report.summary.skipped
    );
    Ok(())
}
