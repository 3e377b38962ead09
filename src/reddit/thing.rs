// SPDX-License-Identifier: Apache-2.0

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: subreddits, posts, comments, etc.
//! Every JSON payload the API returns wraps its useful data in such a
//! thing. This module models the payloads subtally consumes and parses
//! them out of their envelopes.

use serde::Deserialize;
use thiserror::Error;

/// The envelope Reddit wraps around every payload.
#[derive(Debug, Deserialize)]
struct Thing<T> {
    data: T,
}

/// One page of a subreddit's hot listing.
///
/// A listing carries up to a page's worth of posts plus an `after` cursor,
/// an opaque token naming the next page boundary. An absent cursor means
/// the listing has no further pages.
#[derive(Debug, Deserialize)]
pub struct Listing {
    children: Vec<Thing<Post>>,

    #[serde(default)]
    after: Option<String>,
}

impl Listing {
    /// Parses a text response from the Reddit API into a listing page.
    ///
    /// Specifically, `json` is the body of a call to `/r/<subreddit>/hot`.
    pub fn parse(json: &str) -> Result<Self, Error> {
        let thing: Thing<Listing> = serde_json::from_str(json)?;
        Ok(thing.data)
    }

    /// The posts on this page, in listing order.
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.children.iter().map(|child| &child.data)
    }

    /// The titles of the posts on this page, in listing order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.posts().map(Post::title)
    }

    /// The cursor naming the next page, if there is one.
    pub fn after(&self) -> Option<&str> {
        self.after.as_deref()
    }

    /// Number of posts on this page.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True if this page carries no posts.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A post in a subreddit listing.
#[derive(Debug, Deserialize)]
pub struct Post {
    title: String,
}

impl Post {
    /// The post's title.
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Subreddit metadata.
#[derive(Debug, Deserialize)]
pub struct About {
    subscribers: u64,
}

impl About {
    /// Parses a text response from the Reddit API into subreddit metadata.
    ///
    /// Specifically, `json` is the body of a call to
    /// `/r/<subreddit>/about.json`.
    pub fn parse(json: &str) -> Result<Self, Error> {
        let thing: Thing<About> = serde_json::from_str(json)?;
        Ok(thing.data)
    }

    /// The subreddit's subscriber count.
    pub fn subscribers(&self) -> u64 {
        self.subscribers
    }
}

/// An error parsing a Reddit API payload.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload was not the JSON shape the API documents.
    #[error("Malformed API response: {0}")]
    Json(#[from] serde_json::Error),
}
