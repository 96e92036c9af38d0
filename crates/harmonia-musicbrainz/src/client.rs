// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{MusicBrainzError, Result};
use crate::models::{
    Artist, ArtistSearchResult, Recording, RecordingSearchResult, Release, ReleaseGroup,
    ReleaseGroupSearchResult, SearchQuery, SearchResponse,
};
use crate::rate_limiter::RateLimiter;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;
use uuid::Uuid;

const MUSICBRAINZ_API_BASE: &str = "https://musicbrainz.org/ws/2";
const USER_AGENT: &str = concat!(
    "Harmonia/",
    env!("CARGO_PKG_VERSION"),
    " ( https://github.com/example/harmonia )"
);

/// MusicBrainz API client with rate limiting.
#[derive(Debug, Clone)]
pub struct MusicBrainzClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl MusicBrainzClient {
    /// Create a new MusicBrainz client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> MusicBrainzClientBuilder {
        MusicBrainzClientBuilder::default()
    }

    /// Search for artists by name.
    pub async fn search_artists(
        &self,
        query: SearchQuery,
    ) -> Result<SearchResponse<ArtistSearchResult>> {
        let mut url = Url::parse(&format!("{}/artist", self.base_url))
            .map_err(|e| MusicBrainzError::InvalidResponse(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("query", &query.query)
            .append_pair("fmt", "json");

        if let Some(limit) = query.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if let Some(offset) = query.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        }

        self.get(url.as_str()).await
    }

    /// Look up an artist by MusicBrainz ID.
    pub async fn lookup_artist(&self, mbid: Uuid) -> Result<Artist> {
        let url = format!("{}/artist/{}?fmt=json", self.base_url, mbid);
        self.get(&url).await
    }

    /// Search for release groups ("albums") by title or artist.
    pub async fn search_release_groups(
        &self,
        query: SearchQuery,
    ) -> Result<SearchResponse<ReleaseGroupSearchResult>> {
        let mut url = Url::parse(&format!("{}/release-group", self.base_url))
            .map_err(|e| MusicBrainzError::InvalidResponse(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("query", &query.query)
            .append_pair("fmt", "json");

        if let Some(limit) = query.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if let Some(offset) = query.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        }

        self.get(url.as_str()).await
    }

    /// Search for recordings ("tracks") by title or artist.
    pub async fn search_recordings(
        &self,
        query: SearchQuery,
    ) -> Result<SearchResponse<RecordingSearchResult>> {
        let mut url = Url::parse(&format!("{}/recording", self.base_url))
            .map_err(|e| MusicBrainzError::InvalidResponse(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("query", &query.query)
            .append_pair("fmt", "json");

        if let Some(limit) = query.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if let Some(offset) = query.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        }

        self.get(url.as_str()).await
    }

    /// Look up a release group by MusicBrainz ID, including its concrete
    /// releases (used to pick a representative release for track listing).
    pub async fn lookup_release_group(&self, mbid: Uuid) -> Result<ReleaseGroup> {
        let url = format!(
            "{}/release-group/{}?fmt=json&inc=artist-credits+releases",
            self.base_url, mbid
        );
        self.get(&url).await
    }

    /// Look up a release's full track listing.
    pub async fn lookup_release(&self, mbid: Uuid) -> Result<Release> {
        let url = format!(
            "{}/release/{}?fmt=json&inc=recordings+artist-credits",
            self.base_url, mbid
        );
        self.get(&url).await
    }

    /// Look up a recording (track) by MusicBrainz ID.
    pub async fn lookup_recording(&self, mbid: Uuid) -> Result<Recording> {
        let url = format!(
            "{}/recording/{}?fmt=json&inc=artist-credits",
            self.base_url, mbid
        );
        self.get(&url).await
    }

    /// Internal method to perform rate-limited GET requests.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let _permit = self.rate_limiter.acquire().await;

        trace!(target: "musicbrainz", "GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        debug!(target: "musicbrainz", "response status: {}", status);

        if status == 404 {
            return Err(MusicBrainzError::NotFound(url.to_string()));
        }

        if status == 503 {
            return Err(MusicBrainzError::RateLimitExceeded);
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MusicBrainzError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        trace!(target: "musicbrainz", "response body: {}", body);

        serde_json::from_str(&body).map_err(|e| {
            MusicBrainzError::InvalidResponse(format!("Failed to parse response: {}", e))
        })
    }
}

impl Default for MusicBrainzClient {
    fn default() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        MusicBrainzClient {
            client,
            base_url: MUSICBRAINZ_API_BASE.to_string(),
            rate_limiter: RateLimiter::new(Duration::from_secs(1)),
        }
    }
}

/// Builder for configuring a MusicBrainz client.
#[derive(Debug)]
pub struct MusicBrainzClientBuilder {
    base_url: String,
    timeout: Duration,
    rate_limit_interval: Duration,
}

impl Default for MusicBrainzClientBuilder {
    fn default() -> Self {
        Self {
            base_url: MUSICBRAINZ_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            rate_limit_interval: Duration::from_secs(1),
        }
    }
}

impl MusicBrainzClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set rate limit interval between requests.
    pub fn rate_limit_interval(mut self, interval: Duration) -> Self {
        self.rate_limit_interval = interval;
        self
    }

    /// Build the MusicBrainz client.
    pub fn build(self) -> Result<MusicBrainzClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(MusicBrainzClient {
            client,
            base_url: self.base_url,
            rate_limiter: RateLimiter::new(self.rate_limit_interval),
        })
    }
}
