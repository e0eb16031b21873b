//! Charm-style CLI prompts using cliclack
//!
//! All terminal I/O lives here; the core stages (resolver, materializer,
//! planner, installer) never touch the terminal and stay testable on their
//! own. The flow is strictly linear: collect answers, resolve and validate
//! the destination, create it, materialize, then best-effort install.

use crate::answers::{Answers, Edition, LocationMode};
use crate::deps;
use crate::error::ScaffoldError;
use crate::installer;
use crate::product::ProductConfig;
use crate::resolver::{self, ResolvedTarget};
use crate::templates;
use anyhow::Result;
use colored::Colorize;
use std::io;

/// Run the interactive generator end to end.
///
/// Returns `Ok` both on success and on user cancellation (the caller exits 0
/// for either); any other error propagates and the process exits non-zero.
pub async fn run<C: ProductConfig>(config: &C) -> Result<()> {
    cliclack::intro(format!(
        "Welcome to {} — Build Discord Bots Like a Pro",
        config.display_name()
    ))?;
    print_welcome(config)?;

    // Step 1: Edition
    let Some(edition) = prompted(select_edition())? else {
        return cancelled();
    };

    // Step 2: Location and project name
    let Some(location_mode) = prompted(select_location())? else {
        return cancelled();
    };

    let project_name_input = match location_mode {
        LocationMode::NewFolder => {
            let Some(name) = prompted(input_project_name())? else {
                return cancelled();
            };
            Some(name)
        }
        LocationMode::CurrentDirectory => None,
    };

    // Step 3: Resolve the destination. A non-empty directory is fatal - no
    // merge or overwrite semantics.
    let cwd = std::env::current_dir()?;
    let target = match resolver::resolve(location_mode, project_name_input.as_deref(), &cwd) {
        Ok(target) => target,
        Err(e @ ScaffoldError::DestinationNotEmpty { .. }) => {
            cliclack::log::error(e.to_string())?;
            cliclack::outro_cancel("Setup cancelled")?;
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    // Step 4: Feature toggles
    let Some(include_dashboard) =
        prompted(confirm("Would you like to include the admin dashboard?"))?
    else {
        return cancelled();
    };

    let Some(install_dependencies) = prompted(confirm(format!(
        "Install required packages? {} {}",
        "(discobase-core, discord.js, etc.)".dimmed(),
        "[Recommended]".green()
    )))?
    else {
        return cancelled();
    };

    let Some(install_database_support) =
        prompted(confirm("Install MongoDB support? (mongoose)"))?
    else {
        return cancelled();
    };

    let answers = Answers {
        edition,
        location_mode,
        project_name: target.project_name.clone(),
        include_dashboard,
        install_dependencies,
        install_database_support,
    };

    // Step 5: Materialize. For copy mode the template tree is located before
    // anything is written, so a missing tree fails with a clean directory.
    let template_root = match answers.edition {
        Edition::FullSource => Some(templates::template_root(config)?),
        Edition::CoreTemplate => None,
    };

    resolver::prepare(&target)?;

    let spinner = cliclack::spinner();
    match answers.edition {
        Edition::FullSource => {
            spinner.start("Copying full source code template...");
            let root = template_root.as_deref().expect("resolved above");
            templates::copy_template(root, &target.path, answers.include_dashboard)?;
            spinner.stop("Full source code copied successfully!");
        }
        Edition::CoreTemplate => {
            spinner.start("Creating project structure...");
            templates::synthesize(&target, &answers)?;
            spinner.stop("Project structure created and configuration files generated");
        }
    }

    // Step 6: Install dependencies (best-effort; generation already succeeded)
    let plan = deps::plan(&answers);
    if answers.install_dependencies {
        let spinner = cliclack::spinner();
        spinner.start(format!("Installing packages ({} packages)...", plan.len()));
        match installer::install(&plan, &target.path).await {
            Ok(_) => {
                spinner.stop(format!("Installed {} packages successfully", plan.len()));
            }
            Err(e) => {
                spinner.stop("Package installation failed".yellow().to_string());
                cliclack::log::error(e.to_string())?;
                cliclack::log::warning(format!(
                    "Please install packages manually:\n  cd {}\n  {}",
                    target.project_name,
                    plan.install_command()
                ))?;
            }
        }
    } else {
        cliclack::log::warning("Skipped package installation. Run npm install manually.")?;
    }

    // Step 7: Show next steps
    print_next_steps(config, &answers, &target)?;

    cliclack::outro("Happy coding!")?;

    Ok(())
}

/// Distinguish user cancellation (Esc / Ctrl+C at a prompt) from real
/// terminal errors. Cancellation becomes `None`.
fn prompted<T>(result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn cancelled() -> Result<()> {
    cliclack::outro_cancel("Setup cancelled")?;
    Ok(())
}

fn select_edition() -> io::Result<Edition> {
    cliclack::select("Which version would you like to use?")
        .item(
            Edition::CoreTemplate,
            "Core Edition (Recommended)",
            "Clean, package-based, easy updates & optimized",
        )
        .item(
            Edition::FullSource,
            "Source Edition (Advanced)",
            "Full source code, maximum control & customization",
        )
        .interact()
}

fn select_location() -> io::Result<LocationMode> {
    cliclack::select("Where would you like to create your project?")
        .item(LocationMode::NewFolder, "Create in a new folder", "")
        .item(LocationMode::CurrentDirectory, "Use current directory", "")
        .interact()
}

fn input_project_name() -> io::Result<String> {
    cliclack::input("What is your project name?")
        .placeholder("my-discord-bot")
        .validate(|input: &String| match resolver::validate_project_name(input) {
            Ok(()) => Ok(()),
            Err(ScaffoldError::InvalidName(message)) => Err(message),
            Err(other) => Err(other.to_string()),
        })
        .interact()
}

fn confirm(message: impl std::fmt::Display) -> io::Result<bool> {
    cliclack::confirm(message.to_string())
        .initial_value(true)
        .interact()
}

fn print_welcome<C: ProductConfig>(config: &C) -> io::Result<()> {
    let bullet = "•".green();
    let body = format!(
        "{}\n\n\
         {}\n\
         {bullet} Support for Discord.js v14\n\
         {bullet} Slash & Prefix command system\n\
         {bullet} Hot reload for commands, events & functions\n\n\
         {}\n\
         {bullet} Admin dashboard with real-time insights\n\
         {bullet} MongoDB integration with Mongoose\n\n\
         {}\n\
         {bullet} Smart error handling & structured logging\n\
         {bullet} Event system, activity tracking & automation ready",
        "A modern, production-ready framework for building scalable Discord bots".bold(),
        "Core Capabilities".cyan(),
        "Built-in Tools".cyan(),
        "Production Ready".cyan(),
    );
    cliclack::note(format!("Why {}", config.display_name()), body)
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    answers: &Answers,
    target: &ResolvedTarget,
) -> io::Result<()> {
    let steps = config.next_steps(answers, target);

    let mut message = format!("{}\n", "Next steps:".bold());
    for (i, step) in steps.iter().enumerate() {
        message.push_str(&format!("  {}. {}\n", format!("{}", i + 1).green(), step));
    }

    message.push_str(&format!("\n{}\n", "Resources:".bold()));
    message.push_str(&format!(
        "  Documentation: {}\n",
        config.docs_url().cyan().underline()
    ));
    message.push_str(&format!(
        "  Discord Server: {}\n",
        config.community_url().cyan().underline()
    ));
    message.push_str(&format!(
        "  GitHub: {}\n",
        config.repo_url().cyan().underline()
    ));

    cliclack::note("Setup Complete", message)
}
