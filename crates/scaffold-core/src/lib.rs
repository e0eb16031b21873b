//! Scaffold Core - Shared library for the DiscoBase project generator
//!
//! This library implements the scaffolding decision engine behind the
//! `create-discobase` binary: it takes a set of collected answers (edition,
//! location, feature toggles) and deterministically derives the target
//! directory, the file set to create or copy, the content of each generated
//! file, and the dependency list to install.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for destination resolution,
//!   template copying/synthesis, and dependency planning. No terminal I/O.
//! - **Layer 2: External Invocations** - Package-manager invocation with a
//!   bounded timeout
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{answers::*, deps, resolver, templates};
//!
//! let answers = Answers {
//!     edition: Edition::CoreTemplate,
//!     location_mode: LocationMode::NewFolder,
//!     project_name: "my-bot".to_string(),
//!     include_dashboard: true,
//!     install_dependencies: false,
//!     install_database_support: true,
//! };
//!
//! let target = resolver::resolve(
//!     answers.location_mode,
//!     Some(&answers.project_name),
//!     &std::env::current_dir()?,
//! )?;
//! resolver::prepare(&target)?;
//! templates::synthesizer::synthesize(&target, &answers)?;
//! let plan = deps::plan(&answers);
//! ```

pub mod answers;
pub mod deps;
pub mod error;
pub mod installer;
pub mod product;
pub mod resolver;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::{Answers, Edition, LocationMode};
pub use deps::DependencyPlan;
pub use error::ScaffoldError;
pub use installer::InstallError;
pub use product::ProductConfig;
pub use resolver::ResolvedTarget;

#[cfg(feature = "tui")]
pub use tui::run;
