//! Full-source template copying (copy mode)

use crate::error::ScaffoldError;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Top-level entries never copied into a generated project: version-control
/// metadata, the dependency cache, the generator's own entry script, and the
/// lockfile that goes with it.
const EXCLUDED_ENTRIES: &[&str] = &[".git", "node_modules", "setup.mjs", "package-lock.json"];

/// Relative path of the dashboard subtree inside the template.
const DASHBOARD_DIR: &str = "admin";

/// Duplicate the full-source template tree into the target directory.
///
/// Immediate children of the template root are filtered against the fixed
/// exclusion set; surviving directories are duplicated recursively
/// byte-for-byte and files copied as-is. When the dashboard was declined,
/// its subtree is removed from the destination afterwards - the only
/// post-copy mutation.
///
/// Any copy failure aborts the whole materialization with the failing path;
/// the partially populated destination is left in place for inspection.
pub fn copy_template(
    template_root: &Path,
    target_dir: &Path,
    include_dashboard: bool,
) -> Result<Vec<String>, ScaffoldError> {
    let mut copied = Vec::new();

    for entry in fs::read_dir(template_root)? {
        let entry = entry?;
        let name = entry.file_name();
        let name_str = name.to_string_lossy();

        if EXCLUDED_ENTRIES.iter().any(|e| *e == name_str) {
            continue;
        }

        let source = entry.path();
        let dest = target_dir.join(&name);

        if source.is_dir() {
            copy_dir_recursive(&source, &dest)?;
        } else {
            fs::copy(&source, &dest).map_err(|source_err| ScaffoldError::CopyFailure {
                path: source.clone(),
                source: source_err,
            })?;
        }

        copied.push(name_str.into_owned());
    }

    if !include_dashboard {
        let dashboard = target_dir.join(DASHBOARD_DIR);
        if dashboard.exists() {
            fs::remove_dir_all(&dashboard).map_err(|source| ScaffoldError::CopyFailure {
                path: dashboard,
                source,
            })?;
        }
    }

    Ok(copied)
}

/// Recursively duplicate one directory, preserving structure and contents.
fn copy_dir_recursive(source_root: &Path, dest_root: &Path) -> Result<(), ScaffoldError> {
    for entry in WalkDir::new(source_root) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source_root.to_path_buf());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("walk failed"));
            ScaffoldError::CopyFailure { path, source }
        })?;

        // WalkDir yields paths under source_root, so strip_prefix cannot fail
        let relative = entry
            .path()
            .strip_prefix(source_root)
            .expect("walkdir entry outside its root");
        let dest = dest_root.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(|source| ScaffoldError::CreateDirFailure {
                path: dest.clone(),
                source,
            })?;
        } else {
            fs::copy(entry.path(), &dest).map_err(|source| ScaffoldError::CopyFailure {
                path: entry.path().to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Build a fake full-source template with excluded entries, a dashboard,
    /// and nested content.
    fn fake_template() -> TempDir {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();

        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::write(root.join(".git/HEAD"), "ref: refs/heads/main").unwrap();
        fs::create_dir_all(root.join("node_modules/discord.js")).unwrap();
        fs::write(root.join("node_modules/discord.js/index.js"), "x").unwrap();
        fs::write(root.join("setup.mjs"), "#!/usr/bin/env node").unwrap();
        fs::write(root.join("package-lock.json"), "{}").unwrap();

        fs::write(root.join("package.json"), "{\"name\":\"discobase\"}").unwrap();
        fs::create_dir_all(root.join("src/commands/Community")).unwrap();
        fs::write(root.join("src/index.js"), "// entry").unwrap();
        fs::write(root.join("src/commands/Community/ping.js"), "// ping").unwrap();
        fs::create_dir_all(root.join("admin/views")).unwrap();
        fs::write(root.join("admin/dashboard.js"), "// dashboard").unwrap();
        fs::write(root.join("admin/views/index.ejs"), "<html></html>").unwrap();

        tmp
    }

    #[test]
    fn test_excluded_entries_never_copied() {
        let template = fake_template();
        let dest = TempDir::new().unwrap();

        let copied = copy_template(template.path(), dest.path(), true).unwrap();

        for excluded in EXCLUDED_ENTRIES {
            assert!(!dest.path().join(excluded).exists(), "{} leaked", excluded);
            assert!(!copied.iter().any(|c| c == excluded));
        }
    }

    #[test]
    fn test_nested_tree_copied_byte_for_byte() {
        let template = fake_template();
        let dest = TempDir::new().unwrap();

        copy_template(template.path(), dest.path(), true).unwrap();

        assert_eq!(
            fs::read(dest.path().join("src/commands/Community/ping.js")).unwrap(),
            fs::read(template.path().join("src/commands/Community/ping.js")).unwrap()
        );
        assert_eq!(
            fs::read(dest.path().join("admin/views/index.ejs")).unwrap(),
            fs::read(template.path().join("admin/views/index.ejs")).unwrap()
        );
    }

    #[test]
    fn test_dashboard_removed_when_declined() {
        let template = fake_template();
        let dest = TempDir::new().unwrap();

        copy_template(template.path(), dest.path(), false).unwrap();

        assert!(!dest.path().join("admin").exists());
        // Rest of the tree untouched
        assert!(dest.path().join("src/index.js").exists());
        assert!(dest.path().join("package.json").exists());
    }

    #[test]
    fn test_dashboard_kept_when_requested() {
        let template = fake_template();
        let dest = TempDir::new().unwrap();

        copy_template(template.path(), dest.path(), true).unwrap();

        assert!(dest.path().join("admin/dashboard.js").exists());
        assert!(dest.path().join("admin/views/index.ejs").exists());
    }

    #[test]
    fn test_missing_dashboard_in_template_is_fine() {
        let template = fake_template();
        fs::remove_dir_all(template.path().join("admin")).unwrap();
        let dest = TempDir::new().unwrap();

        copy_template(template.path(), dest.path(), false).unwrap();
        assert!(dest.path().join("src/index.js").exists());
    }
}
