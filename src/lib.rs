// SPDX-License-Identifier: Apache-2.0

//! subtally is a command-line tool for poking at a subreddit from the
//! terminal. It can report how many subscribers a subreddit has, list the
//! titles of the first ten posts in its hot listing, and walk the entire
//! hot listing to tally how many post titles mention each of a set of
//! keywords.
//!
//! # Examples
//!
//! (In all examples, replace `rust` with the name of an actual subreddit.)
//!
//! Show a subreddit's subscriber count:
//!
//! ```bash
//! subtally subscribers rust
//! ```
//!
//! List the titles of the first ten hot posts:
//!
//! ```bash
//! subtally hot rust
//! ```
//!
//! Count how many hot post titles mention each keyword, across the whole
//! listing:
//!
//! ```bash
//! subtally tally rust 'python java javascript'
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! subtally --help
//! ```
//!
//! # Reddit API Setup
//!
//! All commands talk to the Reddit API with OAuth2 client credentials. To
//! set up access:
//!
//! 1. Create a Reddit application of the "script" type at
//!    <https://www.reddit.com/prefs/apps>.
//! 2. Store its id and secret, along with a descriptive user agent, in your
//!    shell's environment:
//!
//!    ```bash
//!    $ export REDDIT_CLIENT_ID='your app id'
//!    $ export REDDIT_CLIENT_SECRET='your app secret'
//!    $ export REDDIT_USER_AGENT='subtally by u/yourname'
//!    ```
//!
//! Reddit asks that user agents be unique and descriptive; see
//! <https://github.com/reddit-archive/reddit/wiki/API> for their rules.
//!
//! # License
//!
//! subtally is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod cli;
pub mod count;
pub mod http;
pub mod reddit;

#[cfg(test)]
mod test_utils;
