use crate::common::command::{labelled_dir, run_scandiff_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::labelled_log;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn labelled_bodies_keep_the_command_line_as_equal_context(labelled_dir: TempDir) {
    run_scandiff_command(
        labelled_dir.path(),
        &["compare", "baseline.log", "target.log"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("[M] Password Policy"))
    // the folded command is identical on both sides, so it diffs as context
    .stdout(predicate::str::contains(" Command: passwd -S"))
    .stdout(predicate::str::contains("-Command:").not())
    .stdout(predicate::str::contains("-min_len=8"))
    .stdout(predicate::str::contains("+min_len=12"));
}

#[rstest]
fn a_changed_audit_command_shows_up_in_the_script(labelled_dir: TempDir) {
    // Overwrite the target with the same body but a different command; the
    // fold makes the command participate in comparison.
    let target = labelled_log(&[("Password Policy", "chage -l root", "min_len=8")]);
    write_file(FileSpec::new(labelled_dir.path().join("target.log"), target));

    run_scandiff_command(
        labelled_dir.path(),
        &["compare", "baseline.log", "target.log"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("[M] Password Policy"))
    .stdout(predicate::str::contains("-Command: passwd -S"))
    .stdout(predicate::str::contains("+Command: chage -l root"));
}
