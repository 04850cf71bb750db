use std::fs;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use assert_cmd::Command;

#[test]
fn check_cargo_test() {
    assert_eq!(2 + 2, 4);
}

// --- sph -------------------------------------------------------------

#[test]
fn sph_equator_prime_meridian() {
    let mut cmd = Command::cargo_bin("sph").unwrap();
    cmd.args(["1", "0", "0"])
        .assert()
        .success()
        .stdout("(1.000,0.000,0.000)\n");
}

#[test]
fn sph_north_pole() {
    let mut cmd = Command::cargo_bin("sph").unwrap();
    cmd.args(["1", "90", "0"])
        .assert()
        .success()
        .stdout("(0.000,0.000,1.000)\n");
}

#[test]
fn sph_ninety_east() {
    let mut cmd = Command::cargo_bin("sph").unwrap();
    cmd.args(["2", "0", "90"])
        .assert()
        .success()
        .stdout("(0.000,2.000,0.000)\n");
}

#[test]
fn sph_rejects_missing_argument() {
    let mut cmd = Command::cargo_bin("sph").unwrap();
    cmd.args(["1", "0"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn sph_rejects_extra_argument() {
    let mut cmd = Command::cargo_bin("sph").unwrap();
    cmd.args(["1", "0", "0", "0"])
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn sph_rejects_non_numeric_radius() {
    let mut cmd = Command::cargo_bin("sph").unwrap();
    cmd.args(["abc", "0", "0"])
        .assert()
        .failure()
        .stdout("");
}

// --- compile-figs ----------------------------------------------------

fn write_fragment(root: &Path, chapter: &str, name: &str, content: &str) {
    let dir = root.join(chapter).join("figs");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn compile_figs_wraps_stale_fragments() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    write_fragment(root, "ch1", "fig.tex", "\\node{x};\n");
    // Point the compiler at `true` so the test never needs pdflatex.
    fs::write(root.join("cfg.yaml"), "compiler: \"true\"\n").unwrap();

    let mut cmd = Command::cargo_bin("compile-figs").unwrap();
    cmd.current_dir(root)
        .args(["--config", "cfg.yaml"])
        .assert()
        .success();

    let written = fs::read_to_string(root.join("figs-out").join("fig.tex")).unwrap();
    assert!(written.starts_with("\\documentclass[a4paper,11pt]{standalone}\n"));
    assert!(written.contains("\\begin{document}\n\\node{x};\n\\end{document}\n"));
}

#[test]
fn compile_figs_second_run_touches_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    write_fragment(root, "ch1", "fig.tex", "\\node{x};\n");
    fs::write(root.join("cfg.yaml"), "compiler: \"true\"\n").unwrap();

    let mut cmd = Command::cargo_bin("compile-figs").unwrap();
    cmd.current_dir(root)
        .args(["--config", "cfg.yaml"])
        .assert()
        .success();
    let first_mtime = fs::metadata(root.join("figs-out").join("fig.tex"))
        .unwrap()
        .modified()
        .unwrap();

    sleep(Duration::from_millis(20));
    let mut cmd = Command::cargo_bin("compile-figs").unwrap();
    cmd.current_dir(root)
        .args(["--config", "cfg.yaml"])
        .assert()
        .success();
    let second_mtime = fs::metadata(root.join("figs-out").join("fig.tex"))
        .unwrap()
        .modified()
        .unwrap();

    assert_eq!(first_mtime, second_mtime);
}

#[test]
fn compile_figs_survives_missing_compiler() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    write_fragment(root, "ch1", "fig.tex", "\\node{x};\n");
    fs::write(
        root.join("cfg.yaml"),
        "compiler: \"no-such-compiler-command\"\n",
    )
    .unwrap();

    // A compiler that can't even spawn is a warning, not a failure.
    let mut cmd = Command::cargo_bin("compile-figs").unwrap();
    cmd.current_dir(root)
        .args(["--config", "cfg.yaml"])
        .assert()
        .success();
    assert!(root.join("figs-out").join("fig.tex").exists());
}

#[test]
fn compile_figs_with_no_fragments_does_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();

    let mut cmd = Command::cargo_bin("compile-figs").unwrap();
    cmd.current_dir(root).assert().success();
    assert!(root.join("figs-out").is_dir());
}

#[test]
fn compile_figs_rejects_bad_config_path() {
    let tmp = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("compile-figs").unwrap();
    cmd.current_dir(tmp.path())
        .args(["--config", "no-such-cfg.yaml"])
        .assert()
        .failure();
}
