use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    cargo_bin_cmd!("fileheaders")
}

#[test]
fn header_file_help_lists_markers_and_tags() {
    cmd()
        .arg("header-file-help")
        .assert()
        .success()
        .stdout(contains(">>>HEADER_START<<<"))
        .stdout(contains(">>>FOOTER_END<<<"))
        .stdout(contains("{FILE_NAME}"))
        .stdout(contains("{FOLDER_NAME}"));
}

#[test]
fn bits_text_output_has_both_literals() {
    let out = cmd()
        .args(["bits", "--width", "16", "--seed", "9"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).expect("utf8 output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("0b_"));
    assert_eq!(lines[0].len(), 2 + 16 + 2);
    assert_eq!(lines[1], "");
    assert_eq!(lines[2].split(", ").count(), 2);
}

#[test]
fn bits_is_reproducible_with_seed() {
    let run = || {
        cmd()
            .args(["--json", "bits", "--seed", "1234"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let a: serde_json::Value = serde_json::from_slice(&run()).expect("json");
    let b: serde_json::Value = serde_json::from_slice(&run()).expect("json");
    assert_eq!(a, b);
    assert_eq!(a["data"]["width"], 64);
}

#[test]
fn bits_rejects_unsupported_width() {
    cmd().args(["bits", "--width", "12"]).assert().failure();
}
