//! `urlkit parse <url>` – print each component on its own line.

use anyhow::{Context, Result};
use urlkit_core::ParsedUrl;

pub fn run_parse(url: &str) -> Result<String> {
    let parsed = ParsedUrl::parse(url).with_context(|| format!("parsing {url:?}"))?;
    let port = parsed.port().map(|p| p.to_string());
    let fields = [
        ("scheme", parsed.scheme()),
        ("user_info", parsed.user_info()),
        ("host", parsed.host()),
        ("port", port.as_deref()),
        ("path", parsed.path()),
        ("query", parsed.query()),
        ("fragment", parsed.fragment()),
    ];
    let lines: Vec<String> = fields
        .iter()
        .map(|(name, value)| format!("{name}: {}", value.unwrap_or("-")))
        .collect();
    Ok(lines.join("\n"))
}
