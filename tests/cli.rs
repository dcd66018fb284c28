use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn tabmerge() -> Command {
    Command::cargo_bin("tabmerge").unwrap()
}

/// Combining two files into an explicit output file.
#[test]
fn test_writes_combined_file() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "world").unwrap();

    tabmerge()
        .current_dir(temp_dir.path())
        .arg("-o")
        .arg("combined.txt")
        .arg("a.txt")
        .arg("b.txt")
        .assert()
        .success();

    let output = fs::read_to_string(temp_dir.path().join("combined.txt")).unwrap();
    assert_eq!(
        output,
        "// ===== File: a.txt =====\n\nhello\n\n// ===== File: b.txt =====\n\nworld"
    );
}

/// `-o -` sends the document to stdout.
#[test]
fn test_stdout_output() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("only.md"), "# Only").unwrap();

    tabmerge()
        .current_dir(temp_dir.path())
        .args(["-o", "-", "only.md"])
        .assert()
        .success()
        .stdout("// ===== File: only.md =====\n\n# Only");
}

/// Without `-o`, a timestamped file lands in the workspace root.
#[test]
fn test_default_output_name() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

    tabmerge()
        .current_dir(temp_dir.path())
        .arg("a.txt")
        .assert()
        .success();

    let produced: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.contains("_combined_") && n.ends_with(".txt"))
        .collect();
    assert_eq!(produced.len(), 1);
}

/// `--none` with toggles picks a subset and keeps tab order.
#[test]
fn test_subset_selection() {
    let temp_dir = tempdir().unwrap();
    for name in ["x.txt", "y.txt", "z.txt"] {
        fs::write(temp_dir.path().join(name), name.to_uppercase()).unwrap();
    }

    tabmerge()
        .current_dir(temp_dir.path())
        .args(["-o", "-", "--none", "-t", "2", "-t", "0", "x.txt", "y.txt", "z.txt"])
        .assert()
        .success()
        .stdout("// ===== File: x.txt =====\n\nX.TXT\n\n// ===== File: z.txt =====\n\nZ.TXT");
}

/// Listing shows selection marks and never content.
#[test]
fn test_text_listing() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "secret content").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "b").unwrap();

    tabmerge()
        .current_dir(temp_dir.path())
        .args(["--list", "text", "-t", "1", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout("[x] 0  a.txt  (a.txt)\n[ ] 1  b.txt  (b.txt)\n");
}

#[test]
fn test_html_listing_escapes_names() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a&b.txt"), "<content>").unwrap();

    tabmerge()
        .current_dir(temp_dir.path())
        .args(["--list", "html", "a&b.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<strong>a&amp;b.txt</strong>"))
        .stdout(predicate::str::contains("<content>").not());
}

/// No readable files: informational message, nothing written.
#[test]
fn test_no_text_files_open() {
    let temp_dir = tempdir().unwrap();

    tabmerge()
        .current_dir(temp_dir.path())
        .args(["-o", "out.txt", "missing.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No text files are open."));

    assert!(!temp_dir.path().join("out.txt").exists());
}

#[test]
fn test_invalid_arguments() {
    tabmerge().arg("--invalid-arg").assert().failure();
    tabmerge().args(["--toggle", "abc"]).assert().failure();
}

/// JSON-lines message loop: requestFiles replies, generateFile writes the output.
#[cfg(feature = "stdio")]
#[test]
fn test_stdio_protocol() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();

    let assert = tabmerge()
        .current_dir(temp_dir.path())
        .args(["--stdio", "-o", "out.txt", "a.txt"])
        .write_stdin(
            "{\"command\":\"requestFiles\"}\n{\"command\":\"generateFile\",\"text\":\"from ui\"}\n",
        )
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let reply: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(reply["command"], "filesUpdated");
    assert_eq!(reply["files"][0]["name"], "a.txt");
    assert_eq!(reply["files"][0]["content"], "hello");

    let written = fs::read_to_string(temp_dir.path().join("out.txt")).unwrap();
    assert_eq!(written, "from ui");
}

#[cfg(feature = "stdio")]
#[test]
fn test_stdio_rejects_stdout_output() {
    tabmerge()
        .args(["--stdio", "-o", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--stdio cannot write documents to stdout"));
}
