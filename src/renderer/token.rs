use crate::{
    constants::{TOKEN_CLOSE, TOKEN_OPEN},
    error::Result,
    renderer::{RenderContext, TemplateRenderer},
};
use log::trace;

/// Single-pass delimiter scanner.
///
/// Every `[s% name %s]` whose name is present in the context is replaced by the
/// literal value. Anything else, including unknown names, malformed names,
/// unterminated tokens and nested openings, is copied through unchanged.
/// Substituted values are never scanned again.
#[derive(Debug, Clone)]
pub struct TokenRenderer {
    open: &'static str,
    close: &'static str,
}

impl Default for TokenRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenRenderer {
    pub fn new() -> Self {
        Self::with_delimiters(TOKEN_OPEN, TOKEN_CLOSE)
    }

    pub fn with_delimiters(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }

    pub fn render_str(&self, template: &str, context: &RenderContext) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(self.open) {
            output.push_str(&rest[..start]);
            let after_open = &rest[start + self.open.len()..];

            let Some(close_at) = after_open.find(self.close) else {
                // unterminated
                output.push_str(&rest[start..]);
                return output;
            };

            if let Some(nested_at) =
                after_open.find(self.open).filter(|nested_at| *nested_at < close_at)
            {
                output.push_str(&rest[start..start + self.open.len() + nested_at]);
                rest = &after_open[nested_at..];
                continue;
            }

            let token = &rest[start..start + self.open.len() + close_at + self.close.len()];
            let name = after_open[..close_at].trim();
            match context.get(name).filter(|_| is_token_name(name)) {
                Some(value) => {
                    trace!("Substituting token '{name}'");
                    output.push_str(value);
                }
                None => output.push_str(token),
            }
            rest = &after_open[close_at + self.close.len()..];
        }

        output.push_str(rest);
        output
    }
}

impl TemplateRenderer for TokenRenderer {
    fn render(&self, template: &str, context: &RenderContext) -> Result<String> {
        Ok(self.render_str(template, context))
    }
}

fn is_token_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
