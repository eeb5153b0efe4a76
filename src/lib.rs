/// Handles argument parsing and run orchestration.
pub mod cli;

/// Overwrite decisions for files that already exist.
pub mod conflict;

/// Shared constants.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard types.
pub mod ext;

/// Optional git repository bootstrap.
pub mod git;

/// Pattern sets for skipped and render-ineligible skeleton files.
pub mod ignore;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Manifest and ignore-list bookkeeping.
pub mod manifest;

/// Writes resolved file operations to disk.
pub mod materializer;

/// Application name validation and derived names.
pub mod naming;

/// Token substitution.
pub mod renderer;

/// Core skeleton processing.
pub mod template;
