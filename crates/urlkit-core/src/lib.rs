pub mod combine;
pub mod error;
pub mod url_model;

pub use combine::{append_path, join_paths, merge_urls, retrieve_host, retrieve_uri};
pub use error::{Result, UrlError};
pub use url_model::ParsedUrl;
