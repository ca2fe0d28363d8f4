#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{CODE_OFFER, dasc_cmd, write_page};
use predicates::prelude::*;

#[test]
fn metadata_prints_renamed_keys() {
    let (_dir, path) = write_page(CODE_OFFER);

    dasc_cmd()
        .arg("metadata")
        .arg(&path)
        .arg("--compact")
        .assert()
        .success()
        .stdout("{\"schemaName\":\"offer\",\"storageFormat\":\"code\"}\n");
}

#[test]
fn metadata_ignores_broken_payload() {
    let (_dir, path) = write_page(&CODE_OFFER.replace("\"cta\":", "cta"));

    dasc_cmd()
        .arg("metadata")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schemaName\": \"offer\""));
}

#[test]
fn metadata_without_form_is_empty_object() {
    dasc_cmd()
        .args(["metadata", "--compact"])
        .write_stdin("<html><body><p>plain</p></body></html>")
        .assert()
        .success()
        .stdout("{}\n");
}
