use assert_cmd::Command;
use predicates::prelude::*;

fn unbase() -> Command {
    Command::cargo_bin("unbase").unwrap()
}

#[test]
fn decodes_hex_input_among_all_schemes() {
    unbase()
        .arg("48656c6c6f")
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] hex:"))
        .stdout(predicate::str::contains("Hello"));
}

#[test]
fn reports_failures_per_scheme() {
    unbase()
        .arg("48656c6c6f")
        .assert()
        .success()
        // Lowercase input can never be RFC 4648 base32.
        .stdout(predicate::str::contains("[x] base32 failed"));
}

#[test]
fn one_line_per_scheme_in_fixed_order() {
    let expected = ["base64", "base32", "base58", "base62", "base91", "hex", "binary", "ascii85"];
    let output = unbase().arg("QQ").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let mut last = 0;
    for scheme in expected {
        let marker = format!(" {}", scheme);
        let pos = stdout[last..]
            .find(&marker)
            .unwrap_or_else(|| panic!("scheme {} missing or out of order", scheme));
        last += pos;
    }
}

#[test]
fn reads_one_trimmed_line_from_stdin() {
    unbase()
        .write_stdin("  48656c6c6f  \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello"));
}

#[test]
fn single_scheme_decode() {
    unbase()
        .args(["--scheme", "base64", "SGVsbG8="])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello"));
}

#[test]
fn single_scheme_by_alias() {
    unbase()
        .args(["--scheme", "bash62", "10"])
        .assert()
        .success();
}

#[test]
fn single_scheme_failure_exits_nonzero() {
    unbase()
        .args(["--scheme", "binary", "0102"])
        .assert()
        .failure()
        .code(10)
        .stderr(predicate::str::contains("invalid character"));
}

#[test]
fn unknown_scheme_exits_with_dedicated_code() {
    unbase()
        .args(["--scheme", "base1337", "QQ"])
        .assert()
        .failure()
        .code(13)
        .stderr(predicate::str::contains("unknown scheme"));
}

#[test]
fn json_report_covers_every_scheme() {
    let output = unbase().args(["--json", "48656c6c6f"]).output().unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 8);

    let hex = reports.iter().find(|r| r["scheme"] == "hex").unwrap();
    assert_eq!(hex["ok"], true);
    assert_eq!(hex["text"], "Hello");
    assert_eq!(hex["hex"], "48656c6c6f");
}

#[test]
fn list_shows_supported_schemes() {
    unbase()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base91"))
        .stdout(predicate::str::contains("ascii85"));
}

#[test]
fn ascii85_adobe_wrapper_decodes() {
    unbase()
        .args(["--scheme", "ascii85", "<~87cURD_*#4DfTZ)+T~>"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, World!"));
}
