//! `urlkit merge <uri> [--base <url>]` – merge a reference onto a base URL.

use anyhow::{Context, Result};
use crate::config::UrlkitConfig;
use urlkit_core::merge_urls;

use super::resolve_base;

pub fn run_merge(cfg: &UrlkitConfig, base: Option<&str>, uri: &str) -> Result<String> {
    let base = resolve_base(cfg, base)?;
    merge_urls(base, uri).with_context(|| format!("merging {uri:?} onto {base:?}"))
}
