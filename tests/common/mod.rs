use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

pub static RECONCILE: &str = env!("CARGO_BIN_EXE_reconcile");

/// Write `candidates` to a temporary vocabulary file, one per line
pub fn vocabulary(candidates: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("could not create vocabulary file");
    for candidate in candidates {
        writeln!(file, "{candidate}").expect("could not write vocabulary file");
    }
    file
}

/// Run reconcile with `args`, feeding `stdin` to it
pub fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(RECONCILE)
        .args(args)
        .env_remove("RECONCILE_DEFAULT_OPTIONS")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("could not spawn reconcile");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("could not write to reconcile");
    child.wait_with_output().expect("reconcile did not finish")
}

/// Run reconcile against a vocabulary and return (exit code, stdout)
pub fn reconcile(candidates: &[&str], args: &[&str], stdin: &str) -> (i32, String) {
    let file = vocabulary(candidates);
    let path = file.path().to_str().expect("temp path is utf-8");
    let mut full_args = vec!["--vocabulary", path];
    full_args.extend_from_slice(args);
    let output = run(&full_args, stdin);
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8(output.stdout).expect("output is utf-8"),
    )
}
