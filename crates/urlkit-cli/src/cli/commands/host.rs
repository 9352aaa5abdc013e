//! `urlkit host <url>` – origin of a URL.

use anyhow::{Context, Result};
use urlkit_core::retrieve_host;

pub fn run_host(url: &str) -> Result<String> {
    retrieve_host(url).with_context(|| format!("reading host of {url:?}"))
}
