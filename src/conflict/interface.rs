//! Overwrite decisions, independent of how they are obtained.

use crate::error::Result;
use std::path::Path;

/// Answer to "the destination file already exists, what now?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Overwrite this file only
    Overwrite,
    /// Overwrite this file and every later one without asking again
    OverwriteAll,
    /// Leave the existing file untouched
    Skip,
}

impl Decision {
    /// Maps one line of user input: `y` overwrites, `a` overwrites all,
    /// anything else (including an empty line) skips. The line terminator is
    /// ignored, nothing else is trimmed.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim_end_matches(['\r', '\n']) {
            "y" => Decision::Overwrite,
            "a" => Decision::OverwriteAll,
            _ => Decision::Skip,
        }
    }
}

/// Source of overwrite decisions for existing destination files.
pub trait OverwriteDecider {
    fn decide(&mut self, target: &Path) -> Result<Decision>;
}

impl<D: OverwriteDecider + ?Sized> OverwriteDecider for Box<D> {
    fn decide(&mut self, target: &Path) -> Result<Decision> {
        (**self).decide(target)
    }
}

/// Prompt text shown for an existing destination file.
pub fn overwrite_prompt(target: &Path) -> String {
    format!("{} exists, overwrite? [N/y/a]", target.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_map_to_decisions() {
        assert_eq!(Decision::from_answer("y"), Decision::Overwrite);
        assert_eq!(Decision::from_answer("y\n"), Decision::Overwrite);
        assert_eq!(Decision::from_answer("a\r\n"), Decision::OverwriteAll);
        assert_eq!(Decision::from_answer(""), Decision::Skip);
        assert_eq!(Decision::from_answer("\n"), Decision::Skip);
        assert_eq!(Decision::from_answer("n"), Decision::Skip);
        assert_eq!(Decision::from_answer("yes"), Decision::Skip);
        assert_eq!(Decision::from_answer("Y"), Decision::Skip);
    }
}
