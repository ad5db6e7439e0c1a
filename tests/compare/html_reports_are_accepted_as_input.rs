use crate::common::command::{run_scandiff_command, scan_dir};
use crate::common::file::{FileSpec, write_file};
use crate::common::{bracketed_log, html_report};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn html_reports_are_accepted_as_input(scan_dir: TempDir) {
    // A previously generated HTML report compared against a plain log; the
    // escaped quotes inside the <pre> block must decode back before diffing.
    let baseline = bracketed_log(&[("Firewall", "allow 443 -> \"web\"")]);
    let target = bracketed_log(&[("Firewall", "allow 8443 -> \"web\"")]);
    write_file(FileSpec::new(
        scan_dir.path().join("baseline.html"),
        html_report(&baseline),
    ));
    write_file(FileSpec::new(scan_dir.path().join("target.log"), target));

    run_scandiff_command(scan_dir.path(), &["compare", "baseline.html", "target.log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[M] Firewall"))
        .stdout(predicate::str::contains("-allow 443 -> \"web\""))
        .stdout(predicate::str::contains("+allow 8443 -> \"web\""));
}
