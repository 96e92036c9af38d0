// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Artist information from MusicBrainz.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// MusicBrainz artist ID (MBID).
    pub id: Uuid,
    /// Artist name.
    pub name: String,
    /// Disambiguation comment (e.g., "US hip hop artist").
    #[serde(default)]
    pub disambiguation: Option<String>,
    /// Artist sort name (for sorting).
    #[serde(rename = "sort-name")]
    pub sort_name: String,
    /// Artist type (e.g., "Person", "Group").
    #[serde(rename = "type")]
    pub artist_type: Option<String>,
    /// Country code (ISO 3166-1 alpha-2).
    pub country: Option<String>,
    /// Search score (only present in search results).
    #[serde(default)]
    pub score: Option<u32>,
}

/// Release group ("album" in the loose sense) from MusicBrainz. A release
/// group is the canonical work; it may have several concrete `Release`s
/// (different pressings, remasters, regional editions).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseGroup {
    /// MusicBrainz release group ID (MBID).
    pub id: Uuid,
    /// Release group title.
    pub title: String,
    /// Primary type (e.g., "Album", "EP", "Single").
    #[serde(rename = "primary-type")]
    pub primary_type: Option<String>,
    /// Secondary types (e.g., ["Compilation", "Live"]).
    #[serde(rename = "secondary-types", default)]
    pub secondary_types: Vec<String>,
    /// First release date (YYYY, YYYY-MM, or YYYY-MM-DD).
    #[serde(rename = "first-release-date")]
    pub first_release_date: Option<String>,
    /// Artist credit for the release group.
    #[serde(rename = "artist-credit", default)]
    pub artist_credit: Vec<ArtistCredit>,
    /// Concrete releases belonging to this group, when requested with
    /// `inc=releases`.
    #[serde(default)]
    pub releases: Vec<ReleaseRef>,
    /// Search score (only present in search results).
    #[serde(default)]
    pub score: Option<u32>,
}

impl ReleaseGroup {
    pub fn is_various_artists(&self) -> bool {
        self.secondary_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case("compilation"))
    }
}

/// A concrete pressing of a release group, as returned inline under a
/// release group's `releases` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseRef {
    pub id: Uuid,
    pub title: String,
}

/// A full release with its media and track listing, as returned by
/// `/release/{id}?inc=recordings+artist-credits`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Release {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "artist-credit", default)]
    pub artist_credit: Vec<ArtistCredit>,
    #[serde(default)]
    pub media: Vec<Media>,
}

impl Release {
    /// Flattens every track across every medium into slot order. Multi-disc
    /// releases are out of scope (see spec Non-goals); this simply
    /// concatenates media in the order MusicBrainz returns them.
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.media.iter().flat_map(|m| m.tracks.iter())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Media {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    pub id: Uuid,
    pub title: String,
    pub position: u32,
    /// Track length in milliseconds.
    pub length: Option<u64>,
    pub recording: Recording,
}

/// The canonical recording a track performs. Carries its own artist credit
/// because a track's artist can differ from the release's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recording {
    pub id: Uuid,
    pub title: String,
    pub length: Option<u64>,
    #[serde(rename = "artist-credit", default)]
    pub artist_credit: Vec<ArtistCredit>,
}

/// Artist credit entry (artist contribution to a release).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistCredit {
    /// Name as credited on the release.
    pub name: String,
    /// Artist details.
    pub artist: ArtistRef,
    /// Join phrase (e.g., " & ", " feat. ").
    #[serde(default)]
    pub joinphrase: Option<String>,
}

/// Reference to an artist (minimal info).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistRef {
    /// MusicBrainz artist ID.
    pub id: Uuid,
    /// Artist name.
    pub name: String,
    /// Artist sort name.
    #[serde(rename = "sort-name")]
    pub sort_name: String,
}

/// Search query parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Search query string.
    pub query: String,
    /// Maximum number of results (default 25, max 100).
    pub limit: Option<u32>,
    /// Offset for pagination (default 0).
    pub offset: Option<u32>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
            offset: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Generic search response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    /// Creation timestamp.
    pub created: String,
    /// Total number of results.
    pub count: u32,
    /// Offset used for this page.
    pub offset: u32,
    /// Results for this page.
    #[serde(flatten)]
    pub results: T,
}

/// Artist search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistSearchResult {
    pub artists: Vec<Artist>,
}

/// Release group search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseGroupSearchResult {
    #[serde(rename = "release-groups")]
    pub release_groups: Vec<ReleaseGroup>,
}

/// Recording search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingSearchResult {
    pub recordings: Vec<Recording>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_compilation_secondary_type_case_insensitively() {
        let rg = ReleaseGroup {
            id: Uuid::nil(),
            title: "Now That's What I Call Music".to_string(),
            primary_type: Some("Album".to_string()),
            secondary_types: vec!["Compilation".to_string()],
            first_release_date: None,
            artist_credit: Vec::new(),
            releases: Vec::new(),
            score: None,
        };
        assert!(rg.is_various_artists());
    }

    #[test]
    fn release_tracks_flattens_media_in_order() {
        let recording = Recording {
            id: Uuid::nil(),
            title: "Airbag".to_string(),
            length: Some(300_000),
            artist_credit: Vec::new(),
        };
        let track = Track {
            id: Uuid::nil(),
            title: "Airbag".to_string(),
            position: 1,
            length: Some(300_000),
            recording,
        };
        let release = Release {
            id: Uuid::nil(),
            title: "OK Computer".to_string(),
            artist_credit: Vec::new(),
            media: vec![Media { tracks: vec![track] }],
        };

        let titles: Vec<&str> = release.tracks().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Airbag"]);
    }
}
