use super::interface::{overwrite_prompt, Decision, OverwriteDecider};
use crate::error::{Error, Result};
use std::io::{BufRead, Write};
use std::path::Path;

/// Reads one line per prompt from any buffered reader, writing the prompt to
/// `output`. Used when stdin is not a terminal; end of input counts as an
/// empty answer.
pub struct ReaderDecider<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ReaderDecider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> OverwriteDecider for ReaderDecider<R, W> {
    fn decide(&mut self, target: &Path) -> Result<Decision> {
        let prompt_error = |e: std::io::Error| Error::PromptError {
            path: target.display().to_string(),
            e: e.to_string(),
        };

        write!(self.output, "{} ", overwrite_prompt(target)).map_err(prompt_error)?;
        self.output.flush().map_err(prompt_error)?;

        let mut line = String::new();
        self.input.read_line(&mut line).map_err(prompt_error)?;
        Ok(Decision::from_answer(&line))
    }
}
