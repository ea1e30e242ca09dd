use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const MOVIES: &str = include_str!("fixtures/movies_judgments.txt");

fn write_fixture(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("judgments.txt");
    fs::write(&path, contents).expect("write judgment fixture");
    path
}

fn run_judgments(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_judgments"))
        .args(args)
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .output()
        .expect("run judgments binary")
}

#[test]
fn prints_one_description_per_judgment() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(temp_dir.path(), MOVIES);

    let output = run_judgments(&[path.to_str().expect("utf-8 path")]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "grade:4 qid:1 (rambo) docid:7555");
    assert_eq!(lines[8], "grade:1 qid:3 (star wars: a new hope) docid:1893");
}

#[test]
fn ranklib_format_prints_trainer_lines() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(temp_dir.path(), MOVIES);

    let output = run_judgments(&[path.to_str().expect("utf-8 path"), "--format", "ranklib"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout.lines().next(), Some("4\tqid:1\t # 7555\trambo"));
}

#[test]
fn group_flag_appends_qid_summary() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(temp_dir.path(), MOVIES);

    let output = run_judgments(&[path.to_str().expect("utf-8 path"), "--group"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let summary: Vec<&str> = stdout.lines().skip(9).collect();
    assert_eq!(
        summary,
        [
            "qid:1\t4\trambo",
            "qid:2\t3\trocky",
            "qid:3\t2\tstar wars: a new hope",
        ]
    );
}

#[test]
fn unknown_qid_fails_after_earlier_records() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(
        temp_dir.path(),
        "# qid:1: rambo\n4 qid:1 # 7555 Rambo\n2 qid:99 # 1 Missing\n1 qid:1 # 1370\n",
    );

    let output = run_judgments(&[path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout, "grade:4 qid:1 (rambo) docid:7555\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("qid 99 has no keywords"), "stderr: {stderr}");
}

#[test]
fn missing_file_exits_with_failure() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("absent.txt");

    let output = run_judgments(&[path.to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to open judgment file"), "stderr: {stderr}");
}
