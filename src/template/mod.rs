//! Skeleton processing engine for stencil
//!
//! This module contains the core skeleton processing components:
//! - `mapping`: Source to destination pairs produced by the walk
//! - `walker`: Enumerates skeleton files into mappings
//! - `operation`: Defines operations to be performed on skeleton files
//! - `processor`: Decides between rendering and copying for a mapping

pub mod mapping;
pub mod operation;
pub mod processor;
pub mod walker;
