#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use std::path::Path;

pub fn pixeldiary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pixeldiary").unwrap();
    cmd.env_remove("PIXELDIARY_ROOT");
    cmd.env_remove("PIXELDIARY_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Command running inside an initialized diary at `root`
pub fn diary_cmd(root: &Path) -> Command {
    let mut cmd = pixeldiary_cmd();
    cmd.current_dir(root);
    cmd
}

pub fn init_diary(root: &Path) {
    pixeldiary_cmd().arg("init").arg(root).assert().success();
}

pub fn write_entry(root: &Path, date: &str, text: &str) {
    diary_cmd(root)
        .args(["write", date, "-m", text])
        .assert()
        .success();
}
