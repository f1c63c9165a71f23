// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::FeedError;
use bank_holidays_domain::{HolidayDataset, JurisdictionKey, RawFeedDocument, normalize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// The published location of the UK bank holidays feed.
pub const DEFAULT_FEED_URL: &str = "https://www.gov.uk/bank-holidays.json";

/// How long a single fetch may take before it is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where to fetch the feed from and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Absolute URL of the feed document.
    pub url: String,
    /// Timeout covering the whole request, body included.
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the bank holidays feed.
#[derive(Debug, Clone)]
pub struct FeedLoader {
    http: reqwest::Client,
    config: FeedConfig,
}

impl FeedLoader {
    /// Creates a loader for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Http` if the HTTP client cannot be initialized.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http: reqwest::Client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Returns the configuration this loader was built with.
    #[must_use]
    pub const fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetches the raw feed document with a single GET request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request fails or times out (`FeedError::Http`)
    /// - The host answers with a non-success status (`FeedError::Status`)
    /// - The body is not valid JSON (`FeedError::Malformed`)
    #[instrument(skip(self), fields(url = %self.config.url))]
    pub async fn fetch(&self) -> Result<RawFeedDocument, FeedError> {
        debug!("Requesting bank holidays feed");

        let response: reqwest::Response = self.http.get(&self.config.url).send().await?;

        let status: reqwest::StatusCode = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Feed request was not successful");
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Received feed body");

        Ok(RawFeedDocument::from_slice(&body)?)
    }

    /// Fetches the feed and normalizes it into a dataset.
    ///
    /// # Errors
    ///
    /// Returns any error from `fetch`, or `FeedError::Malformed` if the
    /// document does not have the structure of a holiday feed.
    #[instrument(skip(self), fields(url = %self.config.url))]
    pub async fn load(&self) -> Result<HolidayDataset, FeedError> {
        let raw: RawFeedDocument = self.fetch().await?;
        let dataset: HolidayDataset = normalize(&raw)?;

        for jurisdiction in dataset.reordered_jurisdictions() {
            warn!(%jurisdiction, "Feed events were out of date order and have been sorted");
        }

        info!(
            jurisdictions = dataset.jurisdictions().count(),
            reference_events = dataset.event_count(JurisdictionKey::REFERENCE),
            "Loaded bank holidays feed"
        );

        Ok(dataset)
    }
}
