use crate::{
    cli::Args,
    constants::{context_keys, DEFAULT_SKELETON_DIR, GENERATOR_VERSION},
    error::Result,
    naming::{app_file_path, app_file_stem, clean_name, perl_interpreter, validate_app_name},
    renderer::RenderContext,
};
use std::path::{Path, PathBuf};

/// Everything one generation run derives from its arguments.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    app_name: String,
    app_file_stem: String,
    dir_name: String,
    skeleton_root: PathBuf,
    output_root: PathBuf,
    force: bool,
}

impl GenerationContext {
    pub fn from_args(args: &Args) -> Result<Self> {
        validate_app_name(&args.name)?;
        let dir_name = args.directory.clone().unwrap_or_else(|| clean_name(&args.name));
        let skeleton_root =
            args.skel.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_SKELETON_DIR));

        Ok(Self {
            app_name: args.name.clone(),
            app_file_stem: app_file_stem(&args.name),
            output_root: args.path.join(&dir_name),
            dir_name,
            skeleton_root,
            force: args.overwrite,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_file_stem(&self) -> &str {
        &self.app_file_stem
    }

    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    pub fn skeleton_root(&self) -> &Path {
        &self.skeleton_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn force(&self) -> bool {
        self.force
    }

    /// Builds the token values shared by every rendered file.
    pub fn render_context(&self) -> Result<RenderContext> {
        let app_dir = std::path::absolute(&self.output_root)?;
        Ok([
            (context_keys::APP_NAME, self.app_name.clone()),
            (context_keys::APP_FILE, app_file_path(&self.app_name)),
            (context_keys::APP_DIR, app_dir.display().to_string()),
            (context_keys::PERL_INTERPRETER, perl_interpreter()),
            (context_keys::CLEAN_FILES, clean_name(&self.app_name)),
            (context_keys::GENERATOR_VERSION, GENERATOR_VERSION.to_string()),
        ]
        .into_iter()
        .collect())
    }
}
