use crate::common::command::{compare_dir, run_scandiff_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn differences_only_filter_hides_unchanged_sections(compare_dir: TempDir) {
    run_scandiff_command(
        compare_dir.path(),
        &["compare", "baseline.log", "target.log", "--filter", "ARM"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("[M] Password Policy"))
    .stdout(predicate::str::contains("[A] Firewall"))
    .stdout(predicate::str::contains("[R] Telnet"))
    .stdout(predicate::str::contains("[U]").not())
    // the summary still counts every section
    .stdout(predicate::str::contains(
        "4 sections: 1 added, 1 removed, 1 modified, 1 unchanged",
    ));
}

#[rstest]
fn single_class_filter_keeps_only_that_class(compare_dir: TempDir) {
    run_scandiff_command(
        compare_dir.path(),
        &["compare", "baseline.log", "target.log", "--filter", "A"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("[A] Firewall"))
    .stdout(predicate::str::contains("[M]").not())
    .stdout(predicate::str::contains("[R]").not())
    .stdout(predicate::str::contains("[U]").not());
}
