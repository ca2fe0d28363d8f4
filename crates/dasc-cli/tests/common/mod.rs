#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

#[allow(dead_code)]
pub const CODE_OFFER: &str = include_str!("../fixtures/code_offer.html");
#[allow(dead_code)]
pub const BLOCKS_OFFER: &str = include_str!("../fixtures/blocks_offer.html");

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("failed to create config dir for tests");
            std::fs::write(
                dir.path().join("global.toml"),
                "[fetch]\ntimeout_secs = 5\nuser_agent = \"dasc-tests\"\n",
            )
            .expect("failed to write test config");
            dir
        })
        .path()
}

/// Create a `dasc` command isolated from the user's configuration.
pub fn dasc_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dasc"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("DASC_CONFIG", config_dir().join("global.toml"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write `html` into a fresh temp dir and return both.
#[allow(dead_code)]
pub fn write_page(html: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create page dir");
    let path = dir.path().join("page.html");
    std::fs::write(&path, html).expect("failed to write page");
    (dir, path)
}
