// SPDX-License-Identifier: GPL-3.0-or-later

//! Contracts for the collaborators injected into a tagging session: the
//! metadata catalog and any external candidate-scoring plugins. Concrete
//! implementations (an HTTP MusicBrainz client, a fingerprint plugin, ...)
//! live outside this crate.

use async_trait::async_trait;
use harmonia_domain::{AlbumInfo, CatalogAlbumId, CatalogTrackId, Item, TrackInfo};
use std::error::Error as StdError;

/// The external authoritative metadata source. All methods may fail with a
/// transport/parse error; the core does not retry and expects the
/// implementation to own its own retry/backoff policy.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    type Error: StdError + Send + Sync + 'static;

    async fn album_by_id(
        &self,
        album_id: CatalogAlbumId,
    ) -> Result<Option<AlbumInfo>, Self::Error>;

    /// `artist = None` requests a various-artists search. `track_count`
    /// narrows the query to releases with that many tracks. `limit` is
    /// capped by the caller at [`crate::constants::MAX_CANDIDATES`].
    async fn match_album(
        &self,
        artist: Option<&str>,
        album: &str,
        track_count: usize,
        limit: usize,
    ) -> Result<Vec<AlbumInfo>, Self::Error>;

    async fn track_by_id(
        &self,
        track_id: CatalogTrackId,
    ) -> Result<Option<TrackInfo>, Self::Error>;

    async fn match_track(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Vec<TrackInfo>, Self::Error>;
}

/// Additive contribution from an external scoring plugin: a numerator to
/// add to the distance accumulator and the matching denominator weight.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DistanceContribution {
    pub add_num: f64,
    pub add_den: f64,
}

/// Optional external sources of candidates and additional distance signals.
/// A no-op implementation (returning nothing from every method) is valid and
/// common; see [`NullCandidateSource`].
#[async_trait]
pub trait ExternalCandidateSource: Send + Sync {
    async fn album_candidates(&self, items: &[Item]) -> Vec<AlbumInfo>;

    async fn item_candidates(&self, item: &Item) -> Vec<TrackInfo>;

    fn album_distance_contribution(
        &self,
        _items: &[Item],
        _album_info: &AlbumInfo,
    ) -> DistanceContribution {
        DistanceContribution::default()
    }

    fn track_distance_contribution(
        &self,
        _item: &Item,
        _track_info: &TrackInfo,
    ) -> DistanceContribution {
        DistanceContribution::default()
    }
}

/// An [`ExternalCandidateSource`] that contributes nothing. Used when a
/// caller has no plugins configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCandidateSource;

#[async_trait]
impl ExternalCandidateSource for NullCandidateSource {
    async fn album_candidates(&self, _items: &[Item]) -> Vec<AlbumInfo> {
        Vec::new()
    }

    async fn item_candidates(&self, _item: &Item) -> Vec<TrackInfo> {
        Vec::new()
    }
}
