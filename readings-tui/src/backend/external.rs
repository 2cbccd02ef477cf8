//! External process side effects
//!
//! Both operations are fire-and-forget: nothing reads their output and
//! their failure is only advisory-logged.

use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Spawn a detached `readings sync` so the cache is fresh next launch.
///
/// The child outlives this process and shares only the SQLite file with
/// it; the storage engine's transactional upsert is the only coordination.
pub fn trigger_background_sync() -> Result<()> {
    let exe = std::env::current_exe().context("failed to resolve the current executable")?;

    let mut cmd = Command::new(exe);
    cmd.arg("sync")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // Detach from the controlling terminal so the child survives the TUI.
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    cmd.spawn().context("failed to spawn background sync")?;
    Ok(())
}

/// Open a url with the platform's default handler.
pub fn open_url(url: &str) {
    #[cfg(target_os = "macos")]
    let mut cmd = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };
    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.args(["/c", "start", url]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut cmd = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    if let Err(e) = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        log::warn!("failed to open {url}: {e}");
    }
}
