use std::{
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_rf4-launcher");

pub fn fixture(relative: &str) -> String {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    root.join(relative).display().to_string()
}

/// Run the launcher against `config`, feeding `stdin` and waiting for it to exit.
pub fn run_launcher(config: &str, args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(BINARY_PATH)
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RF4_CONFIG_PATH")
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn launcher process")?;

    let mut child_stdin = child.stdin.take().context("child stdin")?;
    // The launcher may exit before reading stdin; a broken pipe here is expected then.
    let _ = child_stdin.write_all(stdin.as_bytes());
    drop(child_stdin);

    child
        .wait_with_output()
        .context("failed to wait for launcher process")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
