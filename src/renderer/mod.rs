//! Skeleton token rendering
//!
//! - `interface`: the `TemplateRenderer` trait
//! - `context`: the immutable token-name to value mapping of a run
//! - `token`: the delimiter scanner used for every eligible text file

pub mod context;
pub mod interface;
pub mod token;

pub use context::RenderContext;
pub use interface::TemplateRenderer;
pub use token::TokenRenderer;

/// Returns the default renderer used by the runner.
pub fn get_template_engine() -> TokenRenderer {
    TokenRenderer::new()
}
