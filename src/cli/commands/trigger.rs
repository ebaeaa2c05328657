//! Trigger command - launch the update as a detached background process
//!
//! The interactive caller returns immediately; the spawned process owns
//! the network work so launcher lookups are never blocked by it.

use crate::error::{FavcacheError, FavcacheResult};
use crate::layout::CacheLayout;
use console::style;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::info;

/// Execute the trigger command
pub fn execute(layout: CacheLayout, config_path: Option<&Path>) -> FavcacheResult<()> {
    let exe = std::env::current_exe()
        .map_err(|e| FavcacheError::io("resolving current executable", e))?;

    let mut command = Command::new(exe);
    command
        .arg("update")
        .arg("--cache-dir")
        .arg(layout.root())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    if let Some(path) = config_path {
        command.arg("--config").arg(path);
    }

    // Detach from the caller's process group so the update survives the
    // interactive invocation.
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let child = command
        .spawn()
        .map_err(|e| FavcacheError::io("spawning background update", e))?;

    info!("background update started (pid {})", child.id());
    println!("{} background update started", style("[OK]").green());
    Ok(())
}
