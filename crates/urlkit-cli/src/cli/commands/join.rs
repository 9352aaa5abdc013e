//! `urlkit join <segment>... [--base <url>]` – append several segments.

use anyhow::{Context, Result};
use crate::config::UrlkitConfig;
use urlkit_core::join_paths;

use super::resolve_base;

pub fn run_join(cfg: &UrlkitConfig, base: Option<&str>, segments: &[String]) -> Result<String> {
    let base = resolve_base(cfg, base)?;
    join_paths(base, segments).with_context(|| format!("joining segments onto {base:?}"))
}
