//! Helpers to run the diagnose-solver binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl SolverOutput {
    /// The lines printed below the given title, up to the next title or the end of the output.
    pub(crate) fn section(&self, title: &str) -> Vec<&str> {
        let header = format!("{title}:");
        self.stdout
            .lines()
            .skip_while(|line| *line != header)
            .skip(1)
            .take_while(|line| line.starts_with('{'))
            .collect()
    }
}

pub(crate) fn circuit_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("circuits")
        .join(format!("{name}.txt"))
}

/// Runs the solver on the circuit called `circuit_name`. The `prefix` keeps the output files of
/// tests running in parallel on the same circuit apart.
pub(crate) fn run_solver(
    circuit_name: &str,
    prefix: &str,
    args: impl IntoIterator<Item = &'static str>,
) -> SolverOutput {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let circuit_path = circuit_path(circuit_name);
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_diagnose-solver"));

    let log_file_path = circuit_path.with_extension(format!("{prefix}.log"));
    let err_file_path = circuit_path.with_extension(format!("{prefix}.err"));

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(&circuit_path)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let stdout = std::fs::read_to_string(&log_file_path).expect("Failed to read log file.");
    let stderr = std::fs::read_to_string(&err_file_path).expect("Failed to read error file.");
    std::fs::remove_file(log_file_path).expect("Failed to remove log file.");
    std::fs::remove_file(err_file_path).expect("Failed to remove error file.");

    SolverOutput {
        status,
        stdout,
        stderr,
    }
}
