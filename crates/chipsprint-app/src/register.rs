// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Register this binary as the chipsprint: scheme handler with the desktop
// environment. On Linux that means a desktop entry advertising
// x-scheme-handler/chipsprint plus an xdg-mime default.

use std::path::Path;

use chipsprint_core::error::Result;
use chipsprint_core::scheme::URI_SCHEME;

const DESKTOP_FILE_NAME: &str = "chipsprint.desktop";

/// Desktop entry content pointing the scheme at `exe`.
fn desktop_entry(exe: &Path) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name=ChipsPrint\n\
         Exec={} %u\n\
         Terminal=false\n\
         NoDisplay=true\n\
         MimeType=x-scheme-handler/{};\n",
        exe.display(),
        URI_SCHEME
    )
}

#[cfg(target_os = "linux")]
pub fn register_scheme_handler() -> Result<()> {
    use chipsprint_core::ChipsPrintError;
    use std::path::PathBuf;
    use std::process::Command;
    use tracing::info;

    fn applications_dir() -> PathBuf {
        // Try XDG data dir, then fallback to home
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("applications");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("applications");
        }
        // Last resort
        PathBuf::from("/tmp").join("applications")
    }

    let exe = std::env::current_exe()?;
    let dir = applications_dir();
    std::fs::create_dir_all(&dir)?;
    let desktop_file = dir.join(DESKTOP_FILE_NAME);
    std::fs::write(&desktop_file, desktop_entry(&exe))?;

    let status = Command::new("xdg-mime")
        .args([
            "default",
            DESKTOP_FILE_NAME,
            &format!("x-scheme-handler/{URI_SCHEME}"),
        ])
        .status()
        .map_err(|err| ChipsPrintError::Registration(format!("running xdg-mime: {err}")))?;

    if !status.success() {
        return Err(ChipsPrintError::Registration(format!(
            "xdg-mime exited with {status}"
        )));
    }

    info!(desktop_file = %desktop_file.display(), "scheme handler registered");
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn register_scheme_handler() -> Result<()> {
    use chipsprint_core::ChipsPrintError;

    Err(ChipsPrintError::Registration(
        "scheme registration is only implemented for Linux desktops".into(),
    ))
}
