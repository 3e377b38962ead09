// SPDX-License-Identifier: Apache-2.0

//! Clients for reading data from the Reddit API.

use crate::count::{KeywordTally, TargetWordSet};
use crate::http::HTTPError;
use crate::reddit::auth::{AuthError, Credentials};
use crate::reddit::service::{MAX_PAGE_SIZE, RedditService, Service};
use crate::reddit::thing::{self, About, Listing};
use log::debug;
use thiserror::Error;

/// Represents a subreddit.
#[derive(Debug)]
pub struct Subreddit<S> {
    name: String,
    service: S,
}

impl Subreddit<RedditService> {
    /// Creates a new client for retrieving information about a subreddit.
    ///
    /// `name` should be the subreddit's name, without the `r/` prefix.
    /// Credentials are read from the environment and exchanged for a
    /// bearer token before any data is fetched.
    ///
    /// Returns an [`enum@Error`] if credentials are missing or the token
    /// exchange fails.
    pub async fn new(name: impl Into<String>) -> Result<Self, Error> {
        let credentials = Credentials::from_env()?;
        let service = RedditService::authenticate(&credentials).await?;
        Ok(Self::with_service(name, service))
    }
}

impl<S: Service> Subreddit<S> {
    /// Creates a new client backed by the given service implementation.
    pub(crate) fn with_service(name: impl Into<String>, service: S) -> Self {
        let name = name.into();
        Self { name, service }
    }

    /// The subreddit's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The subreddit's subscriber count.
    pub async fn subscribers(&self) -> Result<u64, Error> {
        let body = self.service.get_about(&self.name).await?;
        let about = About::parse(&body)?;
        Ok(about.subscribers())
    }

    /// The titles of the first `limit` posts in the subreddit's hot
    /// listing, in listing order.
    pub async fn hot_titles(&self, limit: u32) -> Result<Vec<String>, Error> {
        let body = self.service.get_hot_page(&self.name, None, limit).await?;
        let listing = Listing::parse(&body)?;
        Ok(listing.titles().map(String::from).collect())
    }

    /// Tallies how many hot post titles mention each word in `words`,
    /// across the subreddit's entire hot listing.
    ///
    /// Pages are fetched strictly one at a time, each scanned before the
    /// next is requested, until a page arrives without a continuation
    /// cursor. Reddit caps listings at roughly a thousand posts, so the
    /// walk always terminates. Any failed fetch aborts the whole
    /// traversal; a partial tally is never returned.
    pub async fn tally(&self, words: &TargetWordSet) -> Result<KeywordTally, Error> {
        let mut tally = KeywordTally::new(words.clone());
        let mut cursor: Option<String> = None;

        loop {
            let body = self
                .service
                .get_hot_page(&self.name, cursor.as_deref(), MAX_PAGE_SIZE)
                .await?;
            let page = Listing::parse(&body)?;
            debug!(
                "scanning {} titles from r/{} (cursor: {:?})",
                page.len(),
                self.name,
                cursor
            );

            for title in page.titles() {
                tally.scan(title);
            }

            cursor = page.after().map(String::from);
            if cursor.is_none() {
                break;
            }
        }

        Ok(tally)
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error obtaining credentials or a bearer token.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),
}
