// SPDX-License-Identifier: Apache-2.0

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit.

use crate::http::{HTTPError, HTTPResult, HTTPService};
use crate::reddit::auth::{AuthError, BearerToken, Credentials};
use log::debug;
use reqwest::{Client, header};

/// The largest page Reddit will return from a listing endpoint.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A service for retrieving subreddit data from the Reddit API.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Performs a GET request for the subreddit's metadata and returns the
    /// raw JSON response.
    fn get_about(&self, subreddit: &str) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Performs a GET request for one page of the subreddit's hot listing
    /// and returns the raw JSON response.
    ///
    /// `cursor` is the `after` token from the previous page, or `None` for
    /// the first page. `limit` caps the number of posts on the page and
    /// must not exceed [`MAX_PAGE_SIZE`].
    fn get_hot_page(
        &self,
        subreddit: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Reddit API directly to retrieve information.
///
/// Every request carries the bearer token obtained when the service was
/// created; Reddit rejects unauthenticated calls to `oauth.reddit.com`.
pub struct RedditService {
    client: Client,
    token: BearerToken,
}

impl RedditService {
    /// Creates a new Reddit service by exchanging `credentials` for a
    /// bearer token.
    ///
    /// This performs one network call to Reddit's token endpoint. Returns
    /// an error if the exchange fails; there are no retries.
    pub async fn authenticate(credentials: &Credentials) -> Result<Self, AuthError> {
        let token = credentials.authenticate().await?;
        let client = credentials.client();
        Ok(Self { client, token })
    }

    fn query_string(&self, cursor: Option<&str>, limit: u32) -> String {
        match cursor {
            Some(after) => format!("?limit={limit}&after={after}"),
            None => format!("?limit={limit}"),
        }
    }

    fn about_uri(&self, subreddit: &str) -> String {
        format!("https://oauth.reddit.com/r/{subreddit}/about.json")
    }

    fn hot_uri(&self, subreddit: &str, cursor: Option<&str>, limit: u32) -> String {
        let qs = self.query_string(cursor, limit);
        format!("https://oauth.reddit.com/r/{subreddit}/hot{qs}")
    }

    /// Sends a GET request to a Reddit API endpoint and returns the raw body.
    async fn get(&self, uri: &str) -> HTTPResult<String> {
        debug!("GET {uri}");
        let resp = self
            .client
            .get(uri)
            .bearer_auth(self.token.token())
            .send()
            .await
            .map_err(HTTPError::Request)?;

        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .ok_or(HTTPError::MissingContentType)?
                .to_str()?;
            if !content_type.starts_with("application/json") {
                Err(HTTPError::UnexpectedContentType(content_type.to_string()))
            } else {
                resp.text().await.map_err(HTTPError::Body)
            }
        }
    }
}

impl Service for RedditService {
    async fn get_about(&self, subreddit: &str) -> HTTPResult<String> {
        let uri = self.about_uri(subreddit);
        self.get(&uri).await
    }

    async fn get_hot_page(
        &self,
        subreddit: &str,
        cursor: Option<&str>,
        limit: u32,
    ) -> HTTPResult<String> {
        let uri = self.hot_uri(subreddit, cursor, limit);
        self.get(&uri).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> RedditService {
        let credentials = Credentials::new("id", "secret", "subtally test by u/nobody");
        RedditService {
            client: credentials.client(),
            token: BearerToken::new("sometoken"),
        }
    }

    #[test]
    fn it_returns_a_query_string_with_the_page_limit() {
        let qs = service().query_string(None, 100);
        assert_eq!(qs, "?limit=100");
    }

    #[test]
    fn it_returns_a_query_string_with_a_cursor() {
        let qs = service().query_string(Some("t3_abc123"), 100);
        assert_eq!(qs, "?limit=100&after=t3_abc123");
    }

    #[test]
    fn it_returns_a_uri_for_subreddit_metadata() {
        let actual_uri = service().about_uri("rust");
        let expected_uri = "https://oauth.reddit.com/r/rust/about.json";
        assert_eq!(actual_uri, expected_uri);
    }

    #[test]
    fn it_returns_a_uri_for_the_first_hot_page() {
        let actual_uri = service().hot_uri("rust", None, 10);
        let expected_uri = "https://oauth.reddit.com/r/rust/hot?limit=10";
        assert_eq!(actual_uri, expected_uri);
    }

    #[test]
    fn it_returns_a_uri_for_a_continuation_page() {
        let actual_uri = service().hot_uri("rust", Some("t3_abc123"), 100);
        let expected_uri = "https://oauth.reddit.com/r/rust/hot?limit=100&after=t3_abc123";
        assert_eq!(actual_uri, expected_uri);
    }
}
