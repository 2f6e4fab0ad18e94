//! Foundation types for the shortnames pipeline.
//!
//! This module provides the types shared by every later stage:
//! - [`AliasCandidate`] - A proposed (alias → target) pair
//! - Name grammar predicates: [`is_alias_name`], [`is_path_segment`],
//!   [`is_qualified_path`]
//!
//! This module has NO dependencies on other shortnames modules.

mod candidate;

pub use candidate::{AliasCandidate, is_alias_name, is_path_segment, is_qualified_path};
