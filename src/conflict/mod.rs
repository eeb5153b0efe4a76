//! Conflict resolution for destination files that already exist
//!
//! - `interface`: `Decision` and the `OverwriteDecider` trait
//! - `resolver`: the run-scoped `ConflictResolver`
//! - `dialoguer`, `reader`, `scripted`: decider implementations

pub mod dialoguer;
pub mod interface;
pub mod reader;
pub mod resolver;
pub mod scripted;

pub use self::dialoguer::DialoguerDecider;
pub use interface::{Decision, OverwriteDecider};
pub use reader::ReaderDecider;
pub use resolver::{ConflictResolver, Resolution};
pub use scripted::ScriptedDecider;

use std::io::IsTerminal;

/// Picks the decider for the current process: dialoguer on a terminal,
/// otherwise plain lines from stdin with prompts on stderr.
pub fn default_decider() -> Box<dyn OverwriteDecider> {
    if std::io::stdin().is_terminal() {
        Box::new(DialoguerDecider)
    } else {
        Box::new(ReaderDecider::new(std::io::stdin().lock(), std::io::stderr()))
    }
}
