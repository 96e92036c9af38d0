// SPDX-License-Identifier: GPL-3.0-or-later

//! Data model for the autotagging core: the observed [`Item`]s a caller
//! believes constitute one album, the canonical [`TrackInfo`]/[`AlbumInfo`]
//! shapes returned by a metadata catalog, and the [`Candidate`]/
//! [`Recommendation`] types produced by matching the two against each other.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Catalog identifiers
// ============================================================================

macro_rules! catalog_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

catalog_id!(CatalogArtistId);
catalog_id!(CatalogAlbumId);
catalog_id!(CatalogTrackId);

// ============================================================================
// Release dates
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseDatePrecision {
    Year,
    Month,
    Day,
}

/// A release date with graceful precision: MusicBrainz (and most catalogs)
/// routinely publish only a year, or a year and month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl ReleaseDate {
    pub fn new(year: i32, month: Option<u32>, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    pub fn precision(&self) -> ReleaseDatePrecision {
        match (self.month, self.day) {
            (None, _) => ReleaseDatePrecision::Year,
            (Some(_), None) => ReleaseDatePrecision::Month,
            (Some(_), Some(_)) => ReleaseDatePrecision::Day,
        }
    }

    /// Parse a date string in the formats a catalog is likely to emit:
    /// `YYYY`, `YYYY-MM`, `YYYY-MM-DD` (or `/`-delimited, or compact
    /// `YYYYMMDD`/`YYYYMM`), and RFC3339 timestamps.
    pub fn parse_str(s: &str) -> Option<Self> {
        let s = s.trim();

        if (s.contains('T') || s.contains('Z') || s.contains('+')) && s.len() > 10 {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                let date = dt.date_naive();
                let year = date.year();
                Self::validate_year(year)?;
                return Some(Self {
                    year,
                    month: Some(date.month()),
                    day: Some(date.day()),
                });
            }
            if let Ok(dt) = s.parse::<DateTime<Utc>>() {
                let date = dt.date_naive();
                let year = date.year();
                Self::validate_year(year)?;
                return Some(Self {
                    year,
                    month: Some(date.month()),
                    day: Some(date.day()),
                });
            }
        }

        if !s.contains('-') && !s.contains('/') {
            return Self::parse_compact(s);
        }

        let delimiter = if s.contains('-') { '-' } else { '/' };
        let parts: Vec<&str> = s.split(delimiter).collect();

        match parts.len() {
            1 => {
                let year = parts[0].parse().ok()?;
                Self::validate_year(year)?;
                Some(Self { year, month: None, day: None })
            }
            2 => {
                let year = parts[0].parse().ok()?;
                let month: u32 = parts[1].parse().ok()?;
                Self::validate_year(year)?;
                Self::validate_month(month)?;
                Some(Self { year, month: Some(month), day: None })
            }
            3 => {
                let year = parts[0].parse().ok()?;
                let month: u32 = parts[1].parse().ok()?;
                let day: u32 = parts[2].parse().ok()?;
                Self::validate_year(year)?;
                Self::validate_month(month)?;
                Self::validate_day(year, month, day)?;
                Some(Self { year, month: Some(month), day: Some(day) })
            }
            _ => None,
        }
    }

    fn parse_compact(s: &str) -> Option<Self> {
        match s.len() {
            4 => {
                let year = s.parse().ok()?;
                Self::validate_year(year)?;
                Some(Self { year, month: None, day: None })
            }
            6 => {
                let year = s[0..4].parse().ok()?;
                let month = s[4..6].parse().ok()?;
                Self::validate_year(year)?;
                Self::validate_month(month)?;
                Some(Self { year, month: Some(month), day: None })
            }
            8 => {
                let year = s[0..4].parse().ok()?;
                let month = s[4..6].parse().ok()?;
                let day = s[6..8].parse().ok()?;
                Self::validate_year(year)?;
                Self::validate_month(month)?;
                Self::validate_day(year, month, day)?;
                Some(Self { year, month: Some(month), day: Some(day) })
            }
            _ => None,
        }
    }

    fn validate_year(year: i32) -> Option<()> {
        (1900..=2100).contains(&year).then_some(())
    }

    fn validate_month(month: u32) -> Option<()> {
        (1..=12).contains(&month).then_some(())
    }

    fn validate_day(year: i32, month: u32, day: u32) -> Option<()> {
        NaiveDate::from_ymd_opt(year, month, day)?;
        Some(())
    }

    pub fn to_naive_date_opt(&self) -> Option<NaiveDate> {
        match (self.month, self.day) {
            (Some(m), Some(d)) => NaiveDate::from_ymd_opt(self.year, m, d),
            (Some(m), None) => NaiveDate::from_ymd_opt(self.year, m, 1),
            (None, _) => NaiveDate::from_ymd_opt(self.year, 1, 1),
        }
    }

    pub fn to_iso8601(&self) -> String {
        match (self.month, self.day) {
            (Some(m), Some(d)) => format!("{:04}-{:02}-{:02}", self.year, m, d),
            (Some(m), None) => format!("{:04}-{:02}", self.year, m),
            (None, _) => format!("{:04}", self.year),
        }
    }
}

// ============================================================================
// Canonical (catalog) types
// ============================================================================

/// A canonical track as returned by the metadata catalog. Immutable for the
/// lifetime of a tagging session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub id: CatalogTrackId,
    pub title: String,
    pub artist: Option<String>,
    pub artist_id: Option<CatalogArtistId>,
    /// Length in seconds. Absent when the catalog doesn't publish it.
    pub length: Option<f64>,
}

impl TrackInfo {
    pub fn new(id: CatalogTrackId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: None,
            artist_id: None,
            length: None,
        }
    }
}

/// A canonical release as returned by the metadata catalog. `tracks` defines
/// slot order: `tracks[i]` is slot `i + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumInfo {
    pub album_id: CatalogAlbumId,
    pub album: String,
    pub artist: String,
    pub artist_id: Option<CatalogArtistId>,
    pub release_date: Option<ReleaseDate>,
    pub albumtype: Option<String>,
    /// Various-artists compilation: per-track artists take precedence over
    /// the album-level artist, both for distance and for apply.
    pub va: bool,
    pub tracks: Vec<TrackInfo>,
}

impl AlbumInfo {
    pub fn new(album_id: CatalogAlbumId, album: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            album_id,
            album: album.into(),
            artist: artist.into(),
            artist_id: None,
            release_date: None,
            albumtype: None,
            va: false,
            tracks: Vec::new(),
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.release_date.as_ref().map(|d| d.year)
    }

    pub fn month(&self) -> Option<u32> {
        self.release_date.as_ref().and_then(|d| d.month)
    }

    pub fn day(&self) -> Option<u32> {
        self.release_date.as_ref().and_then(|d| d.day)
    }
}

// ============================================================================
// Observed (mutable) types
// ============================================================================

/// A single observed audio file within a folder believed to be one album.
/// Mutable for the lifetime of a single tagging session; fields outside this
/// set (filename, bitrate, embedded art, ...) are the tag reader/writer's
/// concern and are out of scope here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub artist: String,
    pub album: String,
    pub title: String,
    /// 1-based track number as currently tagged, if any.
    pub track: Option<u32>,
    /// Length in seconds.
    pub length: f64,
    pub catalog_track_id: Option<CatalogTrackId>,
    pub catalog_album_id: Option<CatalogAlbumId>,
    pub catalog_artist_id: Option<CatalogArtistId>,
    pub compilation_flag: bool,

    // Populated by `apply`/`apply_item` (see crate `harmonia-autotag`).
    pub albumartist: Option<String>,
    pub tracktotal: Option<u32>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub catalog_albumartist_id: Option<CatalogArtistId>,
    pub albumtype: Option<String>,
}

// ============================================================================
// Matching output types
// ============================================================================

/// A canonical release proposed as a match for an album, with its computed
/// distance and the slot ordering the assignment step chose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// In `[0.0, 1.0]` (the core's own contribution; external plugin
    /// contributions are not bounded by the core).
    pub distance: f64,
    /// `ordered[i]` is the item assigned to slot `i` of `album.tracks`.
    pub ordered_items: Vec<Item>,
    pub album: AlbumInfo,
}

/// A canonical track proposed as a match for a single observed item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackCandidate {
    pub distance: f64,
    pub track: TrackInfo,
}

/// Discrete confidence label derived from the top distance and the gap to
/// the runner-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Strong,
    Medium,
    None,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strong => write!(f, "strong"),
            Self::Medium => write!(f, "medium"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Returns whether every element in `values` is equal, under the item's own
/// `PartialEq`. Replaces the original implementation's opaque
/// `reduce`-based check (see spec Design Notes): empty and singleton slices
/// are unambiguously "all equal".
pub fn all_equal<T: PartialEq>(values: &[T]) -> bool {
    match values.split_first() {
        None => true,
        Some((first, rest)) => rest.iter().all(|v| v == first),
    }
}
