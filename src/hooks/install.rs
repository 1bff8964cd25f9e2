use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::boundary::PrepWarning;
use crate::error::{GitPrepError, Result};
use crate::hooks::{assets, types};
use crate::ui;

/// Install every configured hook into `hooks_dir`.
///
/// All hook names are validated before the first file is written, so a single
/// unknown name fails the whole batch without touching the hooks directory.
/// Within a validated batch, an unresolvable source or a failed copy is a
/// warning for that hook only; the rest of the batch still installs.
pub fn install_hooks(hooks: &BTreeMap<String, String>, hooks_dir: &Path) -> Result<()> {
    for name in hooks.keys() {
        if !types::is_valid_hook_name(name) {
            return Err(GitPrepError::invalid_hook_name(name));
        }
    }

    for (name, source) in hooks {
        install_hook(name, source, hooks_dir);
    }
    Ok(())
}

/// Install a single already-validated hook. Never fails the batch.
fn install_hook(name: &str, source: &str, hooks_dir: &Path) {
    // An empty source means there is nothing to install for this hook.
    if source.is_empty() {
        return;
    }

    let destination = hooks_dir.join(name);
    let source_path = Path::new(source);

    if source_path.is_file() {
        match copy_script(source_path, &destination) {
            Ok(()) => {
                ui::display_success(&format!("Installed '{}' hook from {}", name, source));
            }
            Err(e) => ui::display_warning(&PrepWarning::HookCopyFailed {
                hook: name.to_string(),
                reason: e.to_string(),
            }),
        }
    } else if let Some(bytes) = assets::bundled_script(source) {
        match write_script(bytes, &destination) {
            Ok(()) => {
                ui::display_success(&format!(
                    "Installed '{}' hook from bundled script '{}'",
                    name, source
                ));
            }
            Err(e) => ui::display_warning(&PrepWarning::HookCopyFailed {
                hook: name.to_string(),
                reason: e.to_string(),
            }),
        }
    } else {
        ui::display_warning(&PrepWarning::HookSourceUnresolvable {
            hook: name.to_string(),
            source: source.to_string(),
        });
    }
}

/// Copy a filesystem script over the destination, replacing any existing hook.
fn copy_script(source: &Path, destination: &Path) -> std::io::Result<()> {
    fs::copy(source, destination)?;
    mark_executable(destination)
}

/// Write a bundled script's bytes to the destination.
fn write_script(bytes: &[u8], destination: &Path) -> std::io::Result<()> {
    fs::write(destination, bytes)?;
    mark_executable(destination)
}

// The destination is always made executable after install, whichever path the
// content arrived by.
#[cfg(unix)]
fn mark_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
