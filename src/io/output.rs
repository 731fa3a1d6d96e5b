use serde::Serialize;

use unbase::types::Attempt;

#[derive(Serialize)]
struct AttemptReport<'a> {
    scheme: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Bytes as display text: lossy UTF-8, invalid sequences become U+FFFD.
fn render_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn render_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn print_attempts(attempts: &[Attempt]) {
    for attempt in attempts {
        match &attempt.outcome {
            Ok(bytes) => {
                println!("[+] {}:", attempt.scheme);
                println!("{}\n", render_text(bytes));
            }
            Err(e) => {
                println!("[x] {} failed: {}", attempt.scheme, e);
            }
        }
    }
}

pub fn print_attempts_json(attempts: &[Attempt]) {
    let reports: Vec<AttemptReport> = attempts
        .iter()
        .map(|attempt| match &attempt.outcome {
            Ok(bytes) => AttemptReport {
                scheme: attempt.scheme,
                ok: true,
                text: Some(render_text(bytes)),
                hex: Some(render_hex(bytes)),
                error: None,
            },
            Err(e) => AttemptReport {
                scheme: attempt.scheme,
                ok: false,
                text: None,
                hex: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&reports).unwrap());
}

pub fn print_decoded(scheme: &str, bytes: &[u8], json: bool) {
    if json {
        let report = AttemptReport {
            scheme,
            ok: true,
            text: Some(render_text(bytes)),
            hex: Some(render_hex(bytes)),
            error: None,
        };
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
    } else {
        println!("{}", render_text(bytes));
    }
}
