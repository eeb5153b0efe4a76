//! Terminal decider backed by dialoguer.

use super::interface::{overwrite_prompt, Decision, OverwriteDecider};
use crate::error::{Error, Result};
use ::dialoguer::Input;
use std::path::Path;

/// Asks on the terminal, one line of text per existing file.
#[derive(Debug, Default)]
pub struct DialoguerDecider;

impl OverwriteDecider for DialoguerDecider {
    fn decide(&mut self, target: &Path) -> Result<Decision> {
        let answer: String = Input::new()
            .with_prompt(overwrite_prompt(target))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError {
                path: target.display().to_string(),
                e: e.to_string(),
            })?;
        Ok(Decision::from_answer(&answer))
    }
}
