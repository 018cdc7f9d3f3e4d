#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SPEC_FILE: &str = ">>>HEADER_START<<<
// {FILE_NAME} ({FOLDER_NAME})
// Licensed under the MIT License
>>>HEADER_END<<<
>>>FOOTER_START<<<
// end of {FILE_NAME}
>>>FOOTER_END<<<
";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
    cargo_home: PathBuf,
    rustup_home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let work = make_fixture_tree(tmp.path());

        let orig_home = std::env::var("HOME").unwrap_or_default();
        let cargo_home = PathBuf::from(&orig_home).join(".cargo");
        let rustup_home = PathBuf::from(&orig_home).join(".rustup");

        Self {
            _tmp: tmp,
            home,
            work,
            cargo_home,
            rustup_home,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("fileheaders");
        cmd.env("HOME", &self.home)
            .env("CARGO_HOME", &self.cargo_home)
            .env("RUSTUP_HOME", &self.rustup_home)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn work_str(&self) -> &str {
        self.work.to_str().expect("work path utf8")
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work.join(rel)).expect("read fixture file")
    }

    pub fn write(&self, rel: &str, content: &str) {
        let p = self.work.join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(p, content).expect("write fixture file");
    }

    pub fn write_spec(&self, content: &str) -> PathBuf {
        let p = self.home.join("headers.txt");
        fs::write(&p, content).expect("write spec file");
        p
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.home.join(".config/fileheaders");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), content).expect("write config");
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

fn make_fixture_tree(base: &Path) -> PathBuf {
    let work = base.join("project");
    fs::create_dir_all(work.join("src/nested")).expect("create fixture tree");

    fs::write(work.join("src/main.rs"), "fn main() {}\n").expect("write main.rs");
    fs::write(work.join("src/lib.rs"), "\n\npub fn lib() {}\n").expect("write lib.rs");
    fs::write(work.join("src/notes.txt"), "some notes").expect("write notes");
    fs::write(work.join("src/nested/deep.rs"), "pub fn deep() {}").expect("write deep.rs");

    work
}
