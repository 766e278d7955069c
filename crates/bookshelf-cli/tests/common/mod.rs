use std::process::{Command, Output};

/// Run the CLI binary with arguments.
pub fn run_cli(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bookshelf"));
    cmd.args(args);
    // Keep output free of ANSI escapes and log noise.
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
#[allow(dead_code)]
pub fn run_cli_success(args: &[&str]) -> String {
    let output = run_cli(args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning `(stdout, stderr)`.
pub fn run_cli_failure(args: &[&str]) -> (String, String) {
    let output = run_cli(args);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}
