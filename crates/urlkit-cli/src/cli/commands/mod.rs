//! CLI command handlers. Each command is in its own file and returns the text to print.

mod append;
mod host;
mod join;
mod merge;
mod parse;
mod uri;

pub use append::run_append;
pub use host::run_host;
pub use join::run_join;
pub use merge::run_merge;
pub use parse::run_parse;
pub use uri::run_uri;

use anyhow::{bail, Result};

use crate::config::UrlkitConfig;

/// `--base` wins over the config's `base_url`.
fn resolve_base<'a>(cfg: &'a UrlkitConfig, flag: Option<&'a str>) -> Result<&'a str> {
    match flag.or(cfg.base_url.as_deref()) {
        Some(base) => Ok(base),
        None => bail!("no base URL: pass --base or set base_url in the config file"),
    }
}
