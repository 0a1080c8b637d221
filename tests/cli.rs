use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn script(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn plotcanvas() -> Command {
    Command::cargo_bin("plotcanvas").unwrap()
}

#[test]
fn prints_canvas_summary() {
    let file = script("# two signals in one plot\nadd sim/sine\nadd sim/cosine 0\ntick 4\nprint\n");

    plotcanvas()
        .arg("--script")
        .arg(file.path())
        .arg("--title")
        .arg("Demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("canvas \"Demo\" plots=1"))
        .stdout(predicate::str::contains("var 0 \"sim/sine\" name=sim/sine points=4"))
        .stdout(predicate::str::contains("var 1 \"sim/cosine\" name=sim/cosine points=4"));
}

#[test]
fn restart_keeps_history() {
    let file = script("add sim/ramp\ntick 2\nrestart\nrestart\nprint\n");

    plotcanvas()
        .arg("--script")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sim/ramp_2\""))
        .stdout(predicate::str::contains("\"sim/ramp_1\""))
        .stdout(predicate::str::contains("var 2 \"sim/ramp\""));
}

#[test]
fn max_points_bounds_curves() {
    let file = script("add sim/sine\ntick 50\nprint\n");

    plotcanvas()
        .arg("--script")
        .arg(file.path())
        .arg("--max-points")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::contains("points=10"));
}

#[test]
fn exports_csv() {
    let file = script("add sim/ramp\ntick 3\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("canvas.csv");

    plotcanvas()
        .arg("--script")
        .arg(file.path())
        .arg("--tick-ms")
        .arg("500")
        .arg("--export")
        .arg(&out)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&out).unwrap();
    assert_eq!(csv, "# plot 0\nsim/ramp x,sim/ramp y\n0,0\n0.5,0.5\n1,1\n");
}

#[test]
fn rejects_unknown_command() {
    let file = script("add sim/sine\nexplode\n");

    plotcanvas()
        .arg("--script")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Script line 2"));
}

#[test]
fn missing_script_fails() {
    plotcanvas()
        .arg("--script")
        .arg("/nonexistent/canvas.script")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}
