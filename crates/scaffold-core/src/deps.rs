//! Dependency planning: which npm packages the generated project needs
//!
//! Both editions install from the same base list; toggles strictly append.
//! Keeping a single source of truth here is what guarantees the manual
//! recovery instructions, the spawned command, and the tests never drift
//! apart.

use crate::answers::{Answers, Edition};

/// Packages every generated project gets, regardless of edition or toggles.
const BASE_PACKAGES: &[&str] = &[
    "discobase-core@latest",
    "discord.js",
    "nodemon",
    "multer",
    "figlet",
    "micromatch",
    "cli-progress",
    "chalk@4",
    "fs-extra",
    "gradient-string",
    "chokidar",
    "axios",
    "set-interval-async",
    "boxen",
    "@clack/prompts",
];

/// Appended when database support is requested.
const DATABASE_PACKAGES: &[&str] = &["mongoose"];

/// Appended for the dashboard in Core Edition only; the Source Edition ships
/// the dashboard inside the copied tree and already depends on these there.
const DASHBOARD_PACKAGES: &[&str] = &["express", "cors"];

/// An ordered, duplicate-free list of package identifiers to install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPlan {
    packages: Vec<&'static str>,
}

impl DependencyPlan {
    pub fn packages(&self) -> &[&'static str] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// The literal command handed to the shell, also shown verbatim in the
    /// manual-recovery notice when installation fails.
    pub fn install_command(&self) -> String {
        format!("npm install {}", self.packages.join(" "))
    }
}

/// Compute the install list for the collected answers.
///
/// Order is stable: base list first, then the database extra, then the
/// dashboard extras. Duplicates collapse on first occurrence.
pub fn plan(answers: &Answers) -> DependencyPlan {
    let mut packages: Vec<&'static str> = Vec::new();

    let mut push = |pkg: &'static str| {
        if !packages.contains(&pkg) {
            packages.push(pkg);
        }
    };

    for pkg in BASE_PACKAGES.iter().copied() {
        push(pkg);
    }
    if answers.install_database_support {
        for pkg in DATABASE_PACKAGES.iter().copied() {
            push(pkg);
        }
    }
    if answers.edition == Edition::CoreTemplate && answers.include_dashboard {
        for pkg in DASHBOARD_PACKAGES.iter().copied() {
            push(pkg);
        }
    }

    DependencyPlan { packages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::LocationMode;

    fn answers(edition: Edition, dashboard: bool, database: bool) -> Answers {
        Answers {
            edition,
            location_mode: LocationMode::NewFolder,
            project_name: "my-bot".to_string(),
            include_dashboard: dashboard,
            install_dependencies: true,
            install_database_support: database,
        }
    }

    #[test]
    fn test_no_toggles_equals_base_list() {
        let plan = plan(&answers(Edition::CoreTemplate, false, false));
        assert_eq!(plan.packages(), BASE_PACKAGES);
    }

    #[test]
    fn test_database_toggle_appends_mongoose() {
        let plan = plan(&answers(Edition::CoreTemplate, false, true));
        assert_eq!(&plan.packages()[..BASE_PACKAGES.len()], BASE_PACKAGES);
        assert_eq!(&plan.packages()[BASE_PACKAGES.len()..], &["mongoose"]);
    }

    #[test]
    fn test_dashboard_extras_only_for_core_edition() {
        let core = plan(&answers(Edition::CoreTemplate, true, false));
        assert_eq!(&core.packages()[BASE_PACKAGES.len()..], &["express", "cors"]);

        // Source Edition ships the dashboard in the copied tree
        let source = plan(&answers(Edition::FullSource, true, false));
        assert_eq!(source.packages(), BASE_PACKAGES);
    }

    #[test]
    fn test_both_toggles_keep_documented_order() {
        let plan = plan(&answers(Edition::CoreTemplate, true, true));
        assert_eq!(
            &plan.packages()[BASE_PACKAGES.len()..],
            &["mongoose", "express", "cors"]
        );
    }

    #[test]
    fn test_install_command_lists_every_package() {
        let plan = plan(&answers(Edition::CoreTemplate, false, true));
        let cmd = plan.install_command();
        assert!(cmd.starts_with("npm install discobase-core@latest "));
        assert!(cmd.ends_with(" mongoose"));
    }
}
