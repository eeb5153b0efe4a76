use crate::{error::Result, renderer::RenderContext};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders file content with the given context.
    ///
    /// # Arguments
    /// * `template` - File content to render
    /// * `context` - Token values for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered content
    fn render(&self, template: &str, context: &RenderContext) -> Result<String>;
}
