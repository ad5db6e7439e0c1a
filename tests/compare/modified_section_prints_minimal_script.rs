use crate::common::command::{compare_dir, run_scandiff_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn modified_section_prints_minimal_script(compare_dir: TempDir) {
    run_scandiff_command(
        compare_dir.path(),
        &["compare", "baseline.log", "target.log"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("[M] Password Policy"))
    .stdout(predicate::str::contains("-min_len=5"))
    .stdout(predicate::str::contains("+min_len=12"))
    // the common line is equal context, not a delete/insert pair
    .stdout(predicate::str::contains(" max_days=99999"))
    .stdout(predicate::str::contains("-max_days").not())
    .stdout(predicate::str::contains("+max_days").not());
}

#[rstest]
fn edit_script_lines_carry_both_gutters(compare_dir: TempDir) {
    run_scandiff_command(
        compare_dir.path(),
        &["compare", "baseline.log", "target.log"],
    )
    .assert()
    .success()
    // delete only numbers the old side, insert only the new side
    .stdout(predicate::str::contains("   1      -min_len=5"))
    .stdout(predicate::str::contains("        1 +min_len=12"))
    .stdout(predicate::str::contains("   2    2  max_days=99999"));
}
