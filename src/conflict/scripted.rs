//! Decider replaying predefined answers, for automation and tests.

use super::interface::{Decision, OverwriteDecider};
use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// Answers prompts from a queue of raw input lines, in order.
///
/// Running out of answers is an error, so a policy that expects no prompts
/// can be expressed as an empty script.
#[derive(Debug, Default)]
pub struct ScriptedDecider {
    answers: VecDeque<String>,
    asked: Vec<PathBuf>,
}

impl ScriptedDecider {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), asked: Vec::new() }
    }

    /// Targets the decider was asked about, in order.
    pub fn asked(&self) -> &[PathBuf] {
        &self.asked
    }
}

impl OverwriteDecider for ScriptedDecider {
    fn decide(&mut self, target: &Path) -> Result<Decision> {
        self.asked.push(target.to_path_buf());
        let answer = self.answers.pop_front().ok_or_else(|| Error::PromptError {
            path: target.display().to_string(),
            e: "no scripted answer left".to_string(),
        })?;
        Ok(Decision::from_answer(&answer))
    }
}
