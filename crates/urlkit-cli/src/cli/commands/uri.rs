//! `urlkit uri <url>` – path, query and fragment of a URL.

use anyhow::{Context, Result};
use urlkit_core::retrieve_uri;

pub fn run_uri(url: &str) -> Result<String> {
    retrieve_uri(url).with_context(|| format!("reading path of {url:?}"))
}
