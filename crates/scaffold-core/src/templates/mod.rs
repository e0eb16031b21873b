//! Template materialization
//!
//! This module provides the two mutually exclusive generation algorithms:
//! - Copy mode ([`copier`]): duplicates the full-source template tree
//! - Synthesize mode ([`synthesizer`] + [`render`]): writes a minimal file
//!   set from embedded templates parameterized by the collected answers

pub mod copier;
pub mod render;
pub mod synthesizer;

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use std::path::PathBuf;

pub use copier::copy_template;
pub use synthesizer::synthesize;

/// Locate the full-source template tree for copy mode.
///
/// An environment variable override takes precedence (useful for development
/// and for distro packaging); otherwise the tree is expected next to the
/// installed binary.
pub fn template_root<C: ProductConfig>(config: &C) -> Result<PathBuf, ScaffoldError> {
    let path = match std::env::var_os(config.template_dir_env()) {
        Some(dir) => PathBuf::from(dir),
        None => config.default_template_dir(),
    };

    if !path.is_dir() {
        return Err(ScaffoldError::TemplateRootMissing { path });
    }

    Ok(path)
}
