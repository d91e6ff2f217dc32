//! External process execution utilities

use crate::error::{ProcessError, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::Instant;

/// Keeps console programs from flashing a window on Windows
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Fully buffered result of a finished process
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: String,
    pub duration_ms: u64,
}

fn prepare(program: &Path, args: &[String]) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args).stdin(Stdio::null());

    #[cfg(windows)]
    cmd.creation_flags(CREATE_NO_WINDOW);

    cmd
}

fn spawn_error(program: &Path, source: std::io::Error) -> ProcessError {
    ProcessError::Spawn {
        program: program.display().to_string(),
        source,
    }
}

/// Run a program to completion and buffer all of its output.
///
/// No timeout is applied; a hung child hangs the caller.
pub async fn run_to_completion(program: &Path, args: &[String]) -> Result<ProcessOutput> {
    let start_time = Instant::now();

    let output = prepare(program, args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| spawn_error(program, source))?;

    Ok(ProcessOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: output.stdout,
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration_ms: start_time.elapsed().as_millis() as u64,
    })
}

/// Start a program and return without waiting for it
pub fn spawn_detached(program: &Path, args: &[String]) -> Result<()> {
    // Dropping the handle leaves the child running
    let _child = prepare(program, args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| spawn_error(program, source))?;

    Ok(())
}
