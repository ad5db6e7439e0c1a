use crate::common::command::{compare_dir, run_scandiff_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

#[rstest]
fn json_report_embeds_summary_and_entries(
    compare_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_scandiff_command(
        compare_dir.path(),
        &["compare", "baseline.log", "target.log", "--json"],
    )
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

    let report: Value = serde_json::from_slice(&output)?;

    assert_eq!(report["file_a"], "baseline.log");
    assert_eq!(report["file_b"], "target.log");
    assert!(report["generated_at"].is_string());

    assert_eq!(report["summary"]["added"], 1);
    assert_eq!(report["summary"]["removed"], 1);
    assert_eq!(report["summary"]["modified"], 1);
    assert_eq!(report["summary"]["unchanged"], 1);

    let entries = report["entries"].as_array().expect("entries is an array");
    assert_eq!(entries.len(), 4);

    assert_eq!(entries[0]["title"], "Password Policy");
    assert_eq!(entries[0]["change"], "modified");
    assert_eq!(entries[0]["body_a"], "min_len=5\nmax_days=99999");
    assert_eq!(entries[0]["body_b"], "min_len=12\nmax_days=99999");

    let script = entries[0]["script"].as_array().expect("script is an array");
    assert_eq!(script[0]["Delete"]["index_a"], 1);
    assert_eq!(script[0]["Delete"]["value"], "min_len=5");
    assert_eq!(script[1]["Insert"]["index_b"], 1);
    assert_eq!(script[1]["Insert"]["value"], "min_len=12");

    assert_eq!(entries[1]["title"], "Telnet");
    assert_eq!(entries[1]["change"], "removed");
    assert_eq!(entries[2]["title"], "Kernel Parameters");
    assert_eq!(entries[2]["change"], "unchanged");
    assert_eq!(entries[3]["title"], "Firewall");
    assert_eq!(entries[3]["change"], "added");
    assert_eq!(entries[3]["body"], "default deny");

    Ok(())
}

#[rstest]
fn json_entries_honor_the_filter_while_the_summary_counts_all(
    compare_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_scandiff_command(
        compare_dir.path(),
        &[
            "compare",
            "baseline.log",
            "target.log",
            "--json",
            "--filter",
            "M",
        ],
    )
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

    let report: Value = serde_json::from_slice(&output)?;

    let entries = report["entries"].as_array().expect("entries is an array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["change"], "modified");
    assert_eq!(report["summary"]["unchanged"], 1);

    Ok(())
}
