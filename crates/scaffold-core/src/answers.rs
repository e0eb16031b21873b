//! The answer model: everything collected from the user before generation

use std::fmt;

/// Which generation algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    /// Minimal package-based project synthesized from embedded templates
    CoreTemplate,
    /// Full framework source copied from the template tree
    FullSource,
}

impl Edition {
    pub fn display_name(&self) -> &'static str {
        match self {
            Edition::CoreTemplate => "Core Edition",
            Edition::FullSource => "Source Edition",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Where the project directory should live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMode {
    /// Create a new folder named after the project under the working directory
    NewFolder,
    /// Generate directly into the current working directory
    CurrentDirectory,
}

/// All choices collected before generation begins.
///
/// Written once by the prompt flow, read-only by every downstream stage.
#[derive(Debug, Clone)]
pub struct Answers {
    pub edition: Edition,
    pub location_mode: LocationMode,
    pub project_name: String,
    pub include_dashboard: bool,
    pub install_dependencies: bool,
    pub install_database_support: bool,
}
