use crate::common::bracketed_log;
use crate::common::command::{run_scandiff_command, scan_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn duplicate_titles_compare_by_the_last_section(scan_dir: TempDir) {
    // The baseline repeats a title; cross-document matching sees only the
    // last occurrence, so against a target equal to it the title is
    // unchanged.
    let baseline = bracketed_log(&[
        ("Password Policy", "min_len=5"),
        ("Password Policy", "min_len=12"),
    ]);
    let target = bracketed_log(&[("Password Policy", "min_len=12")]);
    write_file(FileSpec::new(scan_dir.path().join("a.log"), baseline));
    write_file(FileSpec::new(scan_dir.path().join("b.log"), target));

    run_scandiff_command(scan_dir.path(), &["compare", "a.log", "b.log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[U] Password Policy"))
        .stdout(predicate::str::contains(
            "1 sections: 0 added, 0 removed, 0 modified, 1 unchanged",
        ));
}
