//! Locating and running the dmidecode binary
//!
//! Reading DMI tables usually needs root, so the tool can be run through
//! sudo. Parsing itself never touches the system; this module is the only
//! place that does.

use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Name of the external report generator
pub const DMIDECODE: &str = "dmidecode";

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{DMIDECODE} not found on PATH")]
    NotInstalled,

    #[error("failed to run {DMIDECODE}: {0}")]
    Io(#[from] io::Error),

    #[error("{DMIDECODE} exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Find the dmidecode binary on PATH
pub fn locate() -> Option<PathBuf> {
    which::which(DMIDECODE).ok()
}

/// Whether dmidecode is installed
pub fn is_installed() -> bool {
    locate().is_some()
}

/// Run dmidecode and capture its full report from stdout.
///
/// With `sudo` the binary is invoked through `sudo`, which may prompt on a
/// terminal.
pub fn run(sudo: bool) -> Result<Vec<u8>, ToolError> {
    let binary = locate().ok_or(ToolError::NotInstalled)?;

    let output = if sudo {
        Command::new("sudo").arg(&binary).output()?
    } else {
        Command::new(&binary).output()?
    };

    if !output.status.success() {
        return Err(ToolError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output.stdout)
}
