use crate::common::file::{FileSpec, write_file};
use crate::common::{bracketed_log, labelled_log, redirect_temp_dir};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn scan_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// A directory holding a baseline/target pair of bracketed scan logs with
/// one modified, one removed, one added, and one unchanged section.
#[fixture]
pub fn compare_dir(scan_dir: TempDir) -> TempDir {
    let baseline = bracketed_log(&[
        ("Password Policy", "min_len=5\nmax_days=99999"),
        ("Telnet", "telnet enabled"),
        ("Kernel Parameters", "net.ipv4.ip_forward = 0"),
    ]);
    let target = bracketed_log(&[
        ("Password Policy", "min_len=12\nmax_days=99999"),
        ("Kernel Parameters", "net.ipv4.ip_forward = 0"),
        ("Firewall", "default deny"),
    ]);

    write_file(FileSpec::new(
        scan_dir.path().join("baseline.log"),
        baseline,
    ));
    write_file(FileSpec::new(scan_dir.path().join("target.log"), target));

    scan_dir
}

/// A directory holding a pair of labelled ("static" format) scan logs.
#[fixture]
pub fn labelled_dir(scan_dir: TempDir) -> TempDir {
    let baseline = labelled_log(&[("Password Policy", "passwd -S", "min_len=8")]);
    let target = labelled_log(&[("Password Policy", "passwd -S", "min_len=12")]);

    write_file(FileSpec::new(
        scan_dir.path().join("baseline.log"),
        baseline,
    ));
    write_file(FileSpec::new(scan_dir.path().join("target.log"), target));

    scan_dir
}

pub fn run_scandiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("scandiff").expect("Failed to find scandiff binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
