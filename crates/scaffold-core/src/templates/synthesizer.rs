//! Core-edition project synthesis (synthesize mode)

use crate::answers::Answers;
use crate::error::ScaffoldError;
use crate::resolver::ResolvedTarget;
use crate::templates::render;
use std::fs;
use std::path::Path;

/// Directory skeleton created for every Core Edition project, toggles never
/// change this set.
const SKELETON_DIRS: &[&str] = &[
    "src/commands/Community",
    "src/messages/Community",
    "src/events",
    "src/functions",
    "src/schemas",
];

/// One generated file: destination-relative path plus rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub relative_path: &'static str,
    pub content: String,
}

/// Compute the full set of generated files for the given answers.
///
/// The file *set* is fixed; only content varies with the toggles. Entries are
/// independent of each other, so write order is insignificant once the
/// skeleton directories exist.
pub fn file_set(project_name: &str, answers: &Answers) -> Vec<FileSpec> {
    vec![
        FileSpec {
            relative_path: "config.json",
            content: render::render_config(),
        },
        FileSpec {
            relative_path: "discobase.json",
            content: render::render_framework_settings(),
        },
        FileSpec {
            relative_path: "src/commands/Community/ping.js",
            content: render::SLASH_COMMAND.to_string(),
        },
        FileSpec {
            relative_path: "src/messages/Community/ping.js",
            content: render::PREFIX_COMMAND.to_string(),
        },
        FileSpec {
            relative_path: "src/index.js",
            content: render::render_entry_point(answers.include_dashboard),
        },
        FileSpec {
            relative_path: "package.json",
            content: render::render_manifest(project_name),
        },
        FileSpec {
            relative_path: "README.md",
            content: render::render_readme(project_name, answers.install_database_support),
        },
    ]
}

/// Materialize a Core Edition project: the fixed directory skeleton, then the
/// generated file set.
///
/// Each write is independent; the first failure aborts with the underlying
/// filesystem error and leaves already-written files in place (accepted,
/// documented partial-state behavior - there is no rollback).
pub fn synthesize(target: &ResolvedTarget, answers: &Answers) -> Result<Vec<String>, ScaffoldError> {
    for dir in SKELETON_DIRS {
        let path = target.path.join(dir);
        fs::create_dir_all(&path).map_err(|source| ScaffoldError::CreateDirFailure {
            path: path.clone(),
            source,
        })?;
    }

    let mut written = Vec::new();
    for spec in file_set(&target.project_name, answers) {
        write_file(&target.path, spec.relative_path, &spec.content)?;
        written.push(spec.relative_path.to_string());
    }

    Ok(written)
}

fn write_file(root: &Path, relative: &str, content: &str) -> Result<(), ScaffoldError> {
    let path = root.join(relative);
    fs::write(&path, content).map_err(|source| ScaffoldError::WriteFailure { path, source })
}
