//! create-discobase - Interactive project generator for DiscoBase bots

use anyhow::Result;
use clap::Parser;
use scaffold_core::ProductConfig;
use std::path::PathBuf;

/// DiscoBase product configuration
#[derive(Clone)]
pub struct DiscobaseConfig;

impl ProductConfig for DiscobaseConfig {
    fn name(&self) -> &'static str {
        "discobase"
    }

    fn display_name(&self) -> &'static str {
        "DiscoBase"
    }

    fn template_dir_env(&self) -> &'static str {
        "DISCOBASE_TEMPLATE_DIR"
    }

    fn default_template_dir(&self) -> PathBuf {
        // The full-source template ships alongside the installed binary
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("create-discobase")))
            .unwrap_or_else(|| PathBuf::from("create-discobase"))
    }

    fn docs_url(&self) -> &'static str {
        "https://www.discobase.site"
    }

    fn community_url(&self) -> &'static str {
        "https://discord.gg/ethical-programmer-s-1188398653530984539"
    }

    fn repo_url(&self) -> &'static str {
        "https://github.com/ethical-programmer/create-discobase"
    }
}

/// No configuration flags: everything is collected interactively.
#[derive(Parser, Debug)]
#[command(name = "create-discobase")]
#[command(about = "Interactive project generator for DiscoBase Discord bots")]
#[command(version)]
pub struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();
    let config = DiscobaseConfig;

    let result = scaffold_core::run(&config).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffold_core::{Answers, Edition, LocationMode, ResolvedTarget};

    fn answers(edition: Edition, mode: LocationMode, database: bool) -> Answers {
        Answers {
            edition,
            location_mode: mode,
            project_name: "my-bot".to_string(),
            include_dashboard: true,
            install_dependencies: true,
            install_database_support: database,
        }
    }

    fn target() -> ResolvedTarget {
        ResolvedTarget {
            path: PathBuf::from("/tmp/my-bot"),
            project_name: "my-bot".to_string(),
        }
    }

    #[test]
    fn test_next_steps_for_new_folder_with_database() {
        let steps = DiscobaseConfig.next_steps(
            &answers(Edition::CoreTemplate, LocationMode::NewFolder, true),
            &target(),
        );
        assert_eq!(
            steps,
            vec![
                "cd my-bot",
                "Edit config.json with your bot token and bot ID",
                "Add your MongoDB URL in config.json",
                "npm start",
            ]
        );
    }

    #[test]
    fn test_next_steps_skip_cd_for_current_directory() {
        let steps = DiscobaseConfig.next_steps(
            &answers(Edition::FullSource, LocationMode::CurrentDirectory, false),
            &target(),
        );
        assert_eq!(steps, vec!["Edit config.json with your bot token and bot ID"]);
    }
}
