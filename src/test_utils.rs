use crate::http::{HTTPError, HTTPResult};
use crate::reddit::Subreddit;
use crate::reddit::service::Service;
use reqwest::StatusCode;
use std::fs;

pub fn do_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

/// A deterministic service backed by fixture files instead of the network.
///
/// Metadata is read from `tests/data/about_<suffix>.json`. Hot pages are
/// read from `tests/data/hot_<suffix>_<page>.json`, where `<page>` is the
/// cursor from the previous page (`1` for the first page), so a fixture
/// whose `after` field is `"2"` chains to the `_2` file and a fixture with
/// a null `after` ends the listing.
pub struct TestService<'a> {
    suffix: &'a str,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self { suffix }
    }
}

impl<'a> Service for TestService<'a> {
    async fn get_about(&self, _subreddit: &str) -> HTTPResult<String> {
        Ok(load_data(&format!("about_{}", self.suffix)))
    }

    async fn get_hot_page(
        &self,
        _subreddit: &str,
        cursor: Option<&str>,
        _limit: u32,
    ) -> HTTPResult<String> {
        let page = cursor.unwrap_or("1");
        Ok(load_data(&format!("hot_{}_{page}", self.suffix)))
    }
}

/// A service whose every request comes back 404.
pub struct FailingService;

impl Service for FailingService {
    async fn get_about(&self, _subreddit: &str) -> HTTPResult<String> {
        Err(HTTPError::Http(StatusCode::NOT_FOUND))
    }

    async fn get_hot_page(
        &self,
        _subreddit: &str,
        _cursor: Option<&str>,
        _limit: u32,
    ) -> HTTPResult<String> {
        Err(HTTPError::Http(StatusCode::NOT_FOUND))
    }
}

impl Subreddit<TestService<'static>> {
    /// Returns a subreddit with a two-page hot listing that can be used
    /// for testing purposes.
    pub fn test() -> Self {
        Subreddit::with_service("rust", TestService::new("rust"))
    }

    /// Returns a subreddit with no posts at all.
    pub fn test_empty() -> Self {
        Subreddit::with_service("emptysubplease", TestService::new("empty"))
    }

    /// Returns a subreddit with a single page of two language posts.
    pub fn test_langs() -> Self {
        Subreddit::with_service("programming", TestService::new("langs"))
    }
}

impl Subreddit<FailingService> {
    /// Returns a subreddit whose service always fails.
    pub fn test_failing() -> Self {
        Subreddit::with_service("doesnotexist", FailingService)
    }
}
