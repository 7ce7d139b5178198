//! Page fetching adapters.

mod http_fetcher;

pub use http_fetcher::{HttpFetcherConfig, HttpPageFetcher, DEFAULT_USER_AGENT};
