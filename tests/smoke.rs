use std::path::Path;

use assert_cmd::Command;

fn sample() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/indices.csv")
}

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("index-study").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn changes_prints_and_writes_the_table() {
    let outputs = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("index-study").expect("binary exists");
    let output = cmd
        .env("OUTPUTS_DIR", outputs.path())
        .args(["changes", "--input"])
        .arg(sample())
        .args(["--thresholds", "0.5,1.0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("threshold"));
    assert!(stdout.contains("S&P 500"));
    let written = std::fs::read_to_string(outputs.path().join("big_change_days.csv")).unwrap();
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn smooth_rejects_a_missing_input() {
    let outputs = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("index-study").expect("binary exists");
    cmd.env("OUTPUTS_DIR", outputs.path())
        .args(["smooth", "--input", "does/not/exist.csv"])
        .assert()
        .failure();
}

#[test]
fn plot_writes_every_chart() {
    let outputs = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("index-study").expect("binary exists");
    cmd.env("OUTPUTS_DIR", outputs.path())
        .env("CHART_WIDTH", "480")
        .env("CHART_HEIGHT", "320")
        .args(["plot", "--input"])
        .arg(sample())
        .assert()
        .success();

    for stem in [
        "percent_of_mean",
        "big_change_days",
        "moving_average_djia",
        "moving_average_sp500",
        "moving_average_nasdaq",
    ] {
        let path = outputs.path().join(format!("{stem}.png"));
        assert!(path.is_file(), "missing {}", path.display());
    }
}
