//! Best-effort dependency installation for the generated project.

use std::path::Path;
use std::process::Command;

/// The package managers invoked after generation, in order.
const PACKAGE_MANAGERS: &[&str] = &["npm", "bower"];

/// Runs each package manager's install step in the project directory.
///
/// Failures are non-fatal: a missing or failing package manager logs a
/// warning and generation carries on.
pub fn install(dir: &Path) {
    for manager in PACKAGE_MANAGERS {
        log!("Installing", "dependencies with `{} install`", manager);

        match Command::new(manager).arg("install").current_dir(dir).output() {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);

                if !stdout.trim().is_empty() {
                    verbose!("Running", "{} install - {}", manager, stdout.trim());
                }
            }
            Ok(output) => warn!(
                "`{} install` failed:\n  {}",
                manager,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
            Err(_) => warn!("`{}` is not available, skipping", manager),
        }
    }
}
