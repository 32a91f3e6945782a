use assert_cmd::Command;
use predicates::prelude::*;

fn plotdeck() -> Command {
    Command::cargo_bin("plotdeck").unwrap()
}

#[test]
fn help_describes_the_tool() {
    plotdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page through a deck of plot frames"))
        .stdout(predicate::str::contains("--numbers-bottom"));
}

#[test]
fn list_prints_every_frame() {
    let output = plotdeck().arg("--list").assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<_> = stdout.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "1/8 Line 1 (1 series, 100 points)");
    assert_eq!(lines[3], "4/8 Image 1 (image 10x10)");
    assert_eq!(lines[5], "6/8 Lonely plot (1 series, 4 points)");
    assert_eq!(lines[6], "7/8 Advanced interface grid-plot. (grid 2x2, 3 axes)");
    assert_eq!(lines[7], "8/8 Simple interface grid-plot. (grid 3x2, 6 axes)");
}

#[test]
fn log_file_records_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("plotdeck.log");

    plotdeck()
        .arg("--list")
        .arg("--log")
        .arg(&log)
        .env_remove("RUST_LOG")
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting plotdeck"));
    assert!(contents.contains("Created frame 8"));
    assert!(contents.contains("Listed 8 frames"));
}

#[test]
fn unknown_theme_is_rejected() {
    plotdeck()
        .args(["--theme", "purple", "--list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn palettes_use_kebab_names() {
    plotdeck()
        .args(["--palette", "blue-red", "--theme", "light", "--list"])
        .assert()
        .success();
}
