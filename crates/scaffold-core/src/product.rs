//! Product configuration trait for CLI binaries
//!
//! This trait carries the product identity (branding, URLs, template
//! location, post-setup instructions) so the core scaffolding stages stay
//! free of any hard-coded presentation strings.

use crate::answers::{Answers, Edition, LocationMode};
use crate::resolver::ResolvedTarget;
use std::path::PathBuf;

/// Configuration trait for the generator binary
///
/// The binary implements this trait to define:
/// - Product identity (name, display name)
/// - Where the full-source template tree lives
/// - Documentation and community links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable name for overriding the template directory
    fn template_dir_env(&self) -> &'static str;

    /// Default location of the full-source template tree
    fn default_template_dir(&self) -> PathBuf;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Community chat invite link
    fn community_url(&self) -> &'static str;

    /// Source repository link
    fn repo_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, answers: &Answers, target: &ResolvedTarget) -> Vec<String> {
        let mut steps = Vec::new();

        if answers.location_mode == LocationMode::NewFolder {
            steps.push(format!("cd {}", target.project_name));
        }

        steps.push("Edit config.json with your bot token and bot ID".to_string());

        if answers.install_database_support {
            steps.push("Add your MongoDB URL in config.json".to_string());
        }

        if answers.edition == Edition::CoreTemplate {
            steps.push("npm start".to_string());
        }

        steps
    }
}
