#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{BLOCKS_OFFER, CODE_OFFER, dasc_cmd, write_page};
use predicates::prelude::*;
use serde_json::{Value, json};

#[test]
fn convert_file_prints_payload_for_code_storage() {
    let (_dir, path) = write_page(CODE_OFFER);

    let output = dasc_cmd()
        .arg("convert")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).expect("stdout should be JSON");
    assert_eq!(json["cta"], json!({ "label": "LEARN MORE", "url": "/subscription" }));
    assert_eq!(json["headline"], "Fall in love with coffee. Every single day. (preview)");
}

#[test]
fn convert_stdin_with_compact_output() {
    let output = dasc_cmd()
        .arg("convert")
        .arg("--compact")
        .write_stdin(BLOCKS_OFFER)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.lines().count(), 1, "compact output is a single line");
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        json,
        json!({
            "metadata": { "schemaName": "offer", "storageFormat": "blocks" },
            "data": {
                "headline": "Fresh roast, every week",
                "discount": 15,
                "cta": { "label": "LEARN MORE" }
            }
        })
    );
}

#[test]
fn convert_dash_reads_stdin() {
    dasc_cmd()
        .args(["convert", "-"])
        .write_stdin("<main></main>")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"metadata\": {}"));
}

#[test]
fn convert_missing_file_exits_not_found() {
    dasc_cmd()
        .args(["convert", "/definitely/not/here.html"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn convert_invalid_embedded_json_exits_invalid_content() {
    let (_dir, path) = write_page(&CODE_OFFER.replace("\"cta\":", "cta"));

    dasc_cmd()
        .arg("convert")
        .arg(&path)
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Embedded JSON is invalid"));
}

#[test]
fn convert_reference_cycle_exits_invalid_content() {
    let html = r#"<main><div>
        <div class="da-form"><div><div>x-schema-name</div><div>loop</div></div></div>
        <div class="loop self"><div><div>again</div><div>self://#self</div></div></div>
    </div></main>"#;

    dasc_cmd()
        .arg("convert")
        .write_stdin(html)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Reference cycle"));
}

#[test]
fn malformed_config_exits_usage() {
    let (dir, _) = write_page("");
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[convert\n").unwrap();

    dasc_cmd()
        .arg("--config")
        .arg(&config)
        .arg("convert")
        .write_stdin("<main></main>")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_depth_limit_applies() {
    let (dir, _) = write_page("");
    let config = dir.path().join("shallow.toml");
    std::fs::write(&config, "[convert]\nmax_reference_depth = 1\n").unwrap();
    let html = r#"<main><div>
        <div class="da-form"><div><div>x-schema-name</div><div>a</div></div></div>
        <div class="a"><div><div>b</div><div>self://#b</div></div></div>
        <div class="x b"><div><div>c</div><div>self://#c</div></div></div>
        <div class="x c"><div><div>leaf</div><div>1</div></div></div>
    </div></main>"#;

    dasc_cmd()
        .arg("--config")
        .arg(&config)
        .arg("convert")
        .write_stdin(html)
        .assert()
        .code(4);
}
