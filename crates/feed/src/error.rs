// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use bank_holidays_domain::MalformedFeed;
use thiserror::Error;

/// Errors raised while loading the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed host answered with a non-success status.
    #[error("Feed returned HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The body was received but is not a usable feed document.
    #[error("Malformed feed: {0}")]
    Malformed(#[from] MalformedFeed),
}
