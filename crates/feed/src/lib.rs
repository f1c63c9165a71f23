// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading of the published bank holidays feed.
//!
//! A load is a single HTTP GET followed by normalization. There is no retry,
//! no backoff and no caching: a failed load is reported to the caller, which
//! decides whether to keep an earlier dataset.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod loader;

#[cfg(test)]
mod tests;

pub use error::FeedError;
pub use loader::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT, FeedConfig, FeedLoader};
