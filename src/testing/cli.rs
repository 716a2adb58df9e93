use std::process::{Command, Output};

/// Path to the wiz-seed binary under test.
///
/// Defaults to the debug build; override with `WIZ_SEED_BIN` when testing
/// a release build or an installed binary.
fn wiz_seed_bin() -> String {
    std::env::var("WIZ_SEED_BIN").unwrap_or_else(|_| "target/debug/wiz-seed".to_string())
}

/// Execute wiz-seed CLI command and return the output
pub fn execute_wiz_seed(args: &[&str]) -> Result<Output, Box<dyn std::error::Error>> {
    let output = Command::new(wiz_seed_bin())
        .args(args)
        .env("RUST_LOG", "wiz_seed=debug,seed_core=debug,seed_verify=debug")
        .output()?;
    Ok(output)
}

/// Verify CLI command succeeded
pub fn assert_cli_success(output: &Output, command_desc: &str) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{} failed!\nExit code: {:?}\nStdout: {}\nStderr: {}",
            command_desc,
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// Verify CLI command failed with a non-zero exit code
pub fn assert_cli_failure(output: &Output, command_desc: &str) {
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!(
            "{} unexpectedly succeeded!\nStdout: {}",
            command_desc, stdout
        );
    }
}
