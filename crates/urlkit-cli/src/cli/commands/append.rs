//! `urlkit append <url> <path>` – append a path or fragment.

use anyhow::{Context, Result};
use urlkit_core::append_path;

pub fn run_append(url: &str, path: &str) -> Result<String> {
    append_path(url, path).with_context(|| format!("appending {path:?} to {url:?}"))
}
