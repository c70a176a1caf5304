mod common;

use common::synthetic_image::{assert_checkerboard, write_rgb_png};
use std::fs;
use std::process::{Command, Output};

fn checker_gen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_checker_gen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run checker_gen")
}

#[test]
fn single_mode_writes_file_and_confirms() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("board");
    let res = checker_gen(&[
        "--width",
        "4",
        "--height",
        "4",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(res.status.success(), "{}", String::from_utf8_lossy(&res.stderr));
    let stdout = String::from_utf8_lossy(&res.stdout);
    assert!(stdout.contains("Checkerboard image saved to:"), "{stdout}");
    assert_checkerboard(&root.path().join("board.png"), 4, 4);
}

#[test]
fn non_positive_width_fails_without_writing() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("board.png");
    let res = checker_gen(&[
        "--width",
        "0",
        "--height",
        "4",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert_eq!(res.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&res.stderr).contains("Invalid dimensions"));
    assert!(!out.exists());
}

#[test]
fn directories_plus_output_file_are_rejected() {
    let root = tempfile::tempdir().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    fs::create_dir(&input).unwrap();
    write_rgb_png(&input.join("a.png"), 10, 6);
    let res = checker_gen(&[
        "--input-dir",
        input.to_str().unwrap(),
        "--output-dir",
        output.to_str().unwrap(),
        "--output-file",
        root.path().join("x.png").to_str().unwrap(),
    ]);
    assert_eq!(res.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&res.stderr).contains("Conflicting arguments"));
    assert!(!output.exists());
}

#[test]
fn batch_mode_matches_input_dimensions() {
    let root = tempfile::tempdir().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    fs::create_dir(&input).unwrap();
    write_rgb_png(&input.join("shot.png"), 10, 6);
    let res = checker_gen(&[
        "--input-dir",
        input.to_str().unwrap(),
        "--output-dir",
        output.to_str().unwrap(),
    ]);
    assert!(res.status.success(), "{}", String::from_utf8_lossy(&res.stderr));
    assert_checkerboard(&output.join("shot.png"), 10, 6);
}

#[test]
fn missing_input_directory_fails() {
    let root = tempfile::tempdir().unwrap();
    let res = checker_gen(&[
        "--input-dir",
        root.path().join("missing").to_str().unwrap(),
        "--output-dir",
        root.path().join("out").to_str().unwrap(),
    ]);
    assert_eq!(res.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&res.stderr).contains("Invalid directory"));
}

#[test]
fn huge_dimensions_fail_without_writing() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("board.png");
    for args in [
        &["--width", "1000000", "--height", "1000000"][..],
        &["--dims", "2x2", "--upscale-dims", "1000000x1000000"][..],
    ] {
        let mut argv = args.to_vec();
        argv.extend(["--output", out.to_str().unwrap()]);
        let res = checker_gen(&argv);
        assert_eq!(res.status.code(), Some(1), "{args:?}");
        assert!(
            String::from_utf8_lossy(&res.stderr).contains("Error: Invalid dimensions"),
            "{args:?}"
        );
        assert!(!out.exists());
    }
}

#[test]
fn keep_going_writes_report_then_exits_non_zero() {
    let root = tempfile::tempdir().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    let report = root.path().join("run.json");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("broken.png"), b"definitely not a png").unwrap();
    write_rgb_png(&input.join("good.png"), 5, 3);

    let res = checker_gen(&[
        "--input-dir",
        input.to_str().unwrap(),
        "--output-dir",
        output.to_str().unwrap(),
        "--keep-going",
        "--report",
        report.to_str().unwrap(),
    ]);
    assert_eq!(res.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&res.stderr);
    assert!(stderr.contains("Error: 1 of 2 files failed"), "{stderr}");
    assert_checkerboard(&output.join("good.png"), 5, 3);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["failed"][0]["fileName"], "broken.png");
    assert_eq!(json["processed"][0]["fileName"], "good.png");
}
