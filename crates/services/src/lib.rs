#![forbid(unsafe_code)]

pub mod config;
pub mod directory_service;
pub mod error;
pub mod fetcher;

pub use config::{BASE_URL_ENV, DEFAULT_BASE_URL, DirectoryConfig};
pub use directory_service::DirectoryService;
pub use error::{ConfigError, FetchError};
pub use fetcher::{HttpFetcher, ResourceFetcher};

pub use reqwest::StatusCode;
