//! Package-manager invocation
//!
//! Spawns `npm install` in the freshly generated project and waits for it
//! with a bounded timeout. Installation is best-effort: by the time it runs,
//! generation has already succeeded, so failures degrade to manual-recovery
//! instructions instead of failing the run.

use crate::deps::DependencyPlan;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for the whole npm install (10 minutes)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(600);

/// Why the install did not complete, plus everything the user needs to
/// finish it by hand.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("npm install failed with exit code {code}")]
    Failed { code: i32, stderr: String },

    #[error("npm install timed out after {} seconds", INSTALL_TIMEOUT.as_secs())]
    TimedOut,

    #[error("failed to spawn npm")]
    Spawn(#[from] std::io::Error),
}

/// Run `npm install <packages...>` with the destination as working directory.
///
/// Returns captured stdout on success. No retry; the caller turns any error
/// into a notice carrying [`DependencyPlan::install_command`].
pub async fn install(plan: &DependencyPlan, target_dir: &Path) -> Result<String, InstallError> {
    let child = TokioCommand::new("npm")
        .arg("install")
        .args(plan.packages())
        .current_dir(target_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        // Kill npm if the timeout fires and the future gets dropped
        .kill_on_drop(true)
        .spawn()?;

    let output = match timeout(INSTALL_TIMEOUT, child.wait_with_output()).await {
        Ok(result) => result?,
        Err(_) => return Err(InstallError::TimedOut),
    };

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(InstallError::Failed {
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
