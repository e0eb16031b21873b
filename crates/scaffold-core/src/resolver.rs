//! Destination resolution and validation

use crate::answers::LocationMode;
use crate::error::ScaffoldError;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum accepted project name length
const MAX_NAME_LEN: usize = 50;

/// The directory the generated project will land in, plus the name the
/// project manifest will carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub project_name: String,
}

/// Validate a project name: non-empty, at most 50 characters, and only
/// letters, digits, hyphens, and underscores.
///
/// The error message doubles as the inline validation text shown while the
/// user is typing, so it stays phrased for humans.
pub fn validate_project_name(name: &str) -> Result<(), ScaffoldError> {
    if name.is_empty() {
        return Err(ScaffoldError::InvalidName(
            "Project name is required".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ScaffoldError::InvalidName(
            "Project name is too long".to_string(),
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ScaffoldError::InvalidName(
            "Use only letters, numbers, hyphens, and underscores".to_string(),
        ));
    }
    Ok(())
}

/// Compute and validate the destination directory.
///
/// Performs no writes. In `NewFolder` mode the name input is validated and
/// joined under `cwd`; in `CurrentDirectory` mode the project name is derived
/// from the directory's base name. Either way, a destination that already
/// exists and contains entries is refused outright - there are no merge or
/// overwrite semantics.
pub fn resolve(
    mode: LocationMode,
    name_input: Option<&str>,
    cwd: &Path,
) -> Result<ResolvedTarget, ScaffoldError> {
    let target = match mode {
        LocationMode::NewFolder => {
            let name = name_input.unwrap_or_default();
            validate_project_name(name)?;
            ResolvedTarget {
                path: cwd.join(name),
                project_name: name.to_string(),
            }
        }
        LocationMode::CurrentDirectory => {
            let name = cwd
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "my-discord-bot".to_string());
            ResolvedTarget {
                path: cwd.to_path_buf(),
                project_name: name,
            }
        }
    };

    if target.path.exists() && fs::read_dir(&target.path)?.next().is_some() {
        return Err(ScaffoldError::DestinationNotEmpty {
            path: target.path.clone(),
        });
    }

    Ok(target)
}

/// Create the destination directory (recursively) if it does not exist yet.
///
/// Called once all answers are collected, immediately before the
/// materializer runs, so a cancel at any prompt leaves nothing on disk.
pub fn prepare(target: &ResolvedTarget) -> Result<(), ScaffoldError> {
    if !target.path.exists() {
        fs::create_dir_all(&target.path).map_err(|source| ScaffoldError::CreateDirFailure {
            path: target.path.clone(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_valid_names_accepted() {
        for name in ["my-bot", "MyBot", "bot_42", "a", "A-1_b"] {
            assert!(validate_project_name(name).is_ok(), "rejected {}", name);
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            validate_project_name(""),
            Err(ScaffoldError::InvalidName(_))
        ));
    }

    #[test]
    fn test_too_long_name_rejected() {
        let name = "a".repeat(51);
        assert!(matches!(
            validate_project_name(&name),
            Err(ScaffoldError::InvalidName(_))
        ));
        assert!(validate_project_name(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_bad_characters_rejected() {
        for name in ["my bot", "bot!", "böt", "a/b", "bot.js"] {
            assert!(
                matches!(
                    validate_project_name(name),
                    Err(ScaffoldError::InvalidName(_))
                ),
                "accepted {}",
                name
            );
        }
    }

    #[test]
    fn test_new_folder_resolves_under_cwd() {
        let tmp = TempDir::new().unwrap();
        let target = resolve(LocationMode::NewFolder, Some("my-bot"), tmp.path()).unwrap();
        assert_eq!(target.path, tmp.path().join("my-bot"));
        assert_eq!(target.project_name, "my-bot");
        // Resolution alone must not create anything
        assert!(!target.path.exists());
    }

    #[test]
    fn test_invalid_name_never_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let result = resolve(LocationMode::NewFolder, Some("bad name!"), tmp.path());
        assert!(matches!(result, Err(ScaffoldError::InvalidName(_))));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_current_directory_uses_base_name() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("cool-project");
        std::fs::create_dir(&dir).unwrap();
        let target = resolve(LocationMode::CurrentDirectory, None, &dir).unwrap();
        assert_eq!(target.path, dir);
        assert_eq!(target.project_name, "cool-project");
    }

    #[test]
    fn test_existing_non_empty_destination_refused() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("taken");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("leftover.txt"), "x").unwrap();
        let result = resolve(LocationMode::NewFolder, Some("taken"), tmp.path());
        assert!(matches!(
            result,
            Err(ScaffoldError::DestinationNotEmpty { .. })
        ));
    }

    #[test]
    fn test_existing_empty_destination_accepted() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("empty");
        std::fs::create_dir(&dir).unwrap();
        let target = resolve(LocationMode::NewFolder, Some("empty"), tmp.path()).unwrap();
        assert_eq!(target.path, dir);
    }

    #[test]
    fn test_prepare_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let target = resolve(LocationMode::NewFolder, Some("fresh"), tmp.path()).unwrap();
        prepare(&target).unwrap();
        assert!(target.path.is_dir());
        // Idempotent when the directory already exists
        prepare(&target).unwrap();
    }
}
