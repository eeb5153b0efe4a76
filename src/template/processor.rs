use log::warn;
use std::fs;

use crate::error::{Error, Result};
use crate::ignore::SkeletonFilters;
use crate::renderer::{RenderContext, TemplateRenderer};

use super::{mapping::FileMapping, operation::FileOperation};

/// Turns a `FileMapping` into the operation the materializer performs:
/// eligible files are read as UTF-8 and rendered, everything else is copied.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    filters: &'a SkeletonFilters,

    /// Other
    context: &'a RenderContext,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        filters: &'a SkeletonFilters,
        context: &'a RenderContext,
    ) -> Self {
        Self { engine, filters, context }
    }

    /// Processes a mapping and determines the appropriate operation.
    ///
    /// # Arguments
    /// * `mapping` - The skeleton file to process
    /// * `target_exists` - Whether the destination already existed before this run wrote it
    ///
    /// # Returns
    /// * `Result<FileOperation>` - The operation to perform
    pub fn process(
        &self,
        mapping: &FileMapping,
        target_exists: bool,
    ) -> Result<FileOperation> {
        if !self.filters.is_render_eligible(&mapping.source) {
            return Ok(self.copy(mapping, target_exists));
        }

        let bytes = fs::read(&mapping.source).map_err(|e| Error::ReadError {
            path: mapping.source.display().to_string(),
            e,
        })?;

        match String::from_utf8(bytes) {
            Ok(template) => Ok(FileOperation::Write {
                target: mapping.target.clone(),
                content: self.engine.render(&template, self.context)?,
                executable: mapping.executable,
                target_exists,
            }),
            Err(_) => {
                warn!(
                    "'{}' is not valid UTF-8, copying it without rendering",
                    mapping.source.display()
                );
                Ok(self.copy(mapping, target_exists))
            }
        }
    }

    fn copy(&self, mapping: &FileMapping, target_exists: bool) -> FileOperation {
        FileOperation::Copy {
            source: mapping.source.clone(),
            target: mapping.target.clone(),
            executable: mapping.executable,
            target_exists,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::renderer::TokenRenderer;

    use super::*;

    fn context() -> RenderContext {
        [("appname", "My::App")].into_iter().collect()
    }

    fn mapping(skeleton: &TempDir, output: &TempDir, name: &str) -> FileMapping {
        FileMapping::new(
            skeleton.path().join(name),
            output.path(),
            PathBuf::from(name.trim_start_matches('+')),
            name.starts_with('+'),
        )
    }

    /// The skeleton structure
    /// skeleton/
    ///   +app.psgi     "use [s% appname %s];"
    ///
    /// Expected operation
    ///   Write app.psgi "use My::App;" (executable)
    #[test]
    fn eligible_file_is_rendered() {
        let skeleton = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(skeleton.path().join("+app.psgi"), "use [s% appname %s];").unwrap();

        let engine = TokenRenderer::new();
        let filters = SkeletonFilters::new().unwrap();
        let context = context();
        let processor = TemplateProcessor::new(&engine, &filters, &context);

        let result =
            processor.process(&mapping(&skeleton, &output, "+app.psgi"), false).unwrap();
        match result {
            FileOperation::Write { target, content, executable, target_exists } => {
                assert_eq!(target, output.path().join("app.psgi"));
                assert_eq!(content, "use My::App;");
                assert!(executable);
                assert!(!target_exists);
            }
            _ => panic!("Expected Write operation"),
        }
    }

    /// The skeleton structure
    /// skeleton/
    ///   style.css     "/* [s% appname %s] */"
    ///
    /// Expected operation
    ///   Copy style.css untouched
    #[test]
    fn blacklisted_extension_is_copied() {
        let skeleton = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(skeleton.path().join("style.css"), "/* [s% appname %s] */").unwrap();

        let engine = TokenRenderer::new();
        let filters = SkeletonFilters::new().unwrap();
        let context = context();
        let processor = TemplateProcessor::new(&engine, &filters, &context);

        let result =
            processor.process(&mapping(&skeleton, &output, "style.css"), true).unwrap();
        match result {
            FileOperation::Copy { source, target, executable, target_exists } => {
                assert_eq!(source, skeleton.path().join("style.css"));
                assert_eq!(target, output.path().join("style.css"));
                assert!(!executable);
                assert!(target_exists);
            }
            _ => panic!("Expected Copy operation"),
        }
    }

    #[test]
    fn invalid_utf8_text_is_copied() {
        let skeleton = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(skeleton.path().join("data.txt"), [0xff, 0xfe, b'[', b's']).unwrap();

        let engine = TokenRenderer::new();
        let filters = SkeletonFilters::new().unwrap();
        let context = context();
        let processor = TemplateProcessor::new(&engine, &filters, &context);

        let result =
            processor.process(&mapping(&skeleton, &output, "data.txt"), false).unwrap();
        assert!(matches!(result, FileOperation::Copy { .. }));
    }

    #[test]
    fn unreadable_source_is_an_error() {
        let skeleton = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();

        let engine = TokenRenderer::new();
        let filters = SkeletonFilters::new().unwrap();
        let context = context();
        let processor = TemplateProcessor::new(&engine, &filters, &context);

        let result = processor.process(&mapping(&skeleton, &output, "gone.txt"), false);
        match result {
            Err(Error::ReadError { path, .. }) => assert!(path.ends_with("gone.txt")),
            _ => panic!("Expected ReadError"),
        }
    }
}
