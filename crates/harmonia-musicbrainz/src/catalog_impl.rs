// SPDX-License-Identifier: GPL-3.0-or-later

//! Implements the autotagging core's `CatalogClient` contract against the
//! real MusicBrainz web service.
//!
//! A release group has no track listing of its own; MusicBrainz attaches
//! tracks to a concrete `Release`. This client picks the first release
//! listed under a release group as the representative one for building an
//! `AlbumInfo`'s track sequence. Releases can vary (different masterings,
//! bonus tracks, regional pressings); a more complete client would let a
//! caller choose among them, but that's out of scope here (see DESIGN.md).

use crate::client::MusicBrainzClient;
use crate::error::MusicBrainzError;
use crate::models::{ArtistCredit, Recording, ReleaseGroup, SearchQuery};
use async_trait::async_trait;
use harmonia_autotag::CatalogClient;
use harmonia_domain::{AlbumInfo, CatalogAlbumId, CatalogArtistId, CatalogTrackId, ReleaseDate, TrackInfo};
use tracing::warn;

fn primary_artist_credit(credits: &[ArtistCredit]) -> (String, Option<CatalogArtistId>) {
    match credits.first() {
        Some(credit) => (
            credit.name.clone(),
            Some(CatalogArtistId::from_uuid(credit.artist.id)),
        ),
        None => (String::new(), None),
    }
}

fn recording_to_track_info(recording: &Recording) -> TrackInfo {
    let (artist, artist_id) = primary_artist_credit(&recording.artist_credit);
    TrackInfo {
        id: CatalogTrackId::from_uuid(recording.id),
        title: recording.title.clone(),
        artist: if artist.is_empty() { None } else { Some(artist) },
        artist_id,
        length: recording.length.map(|ms| ms as f64 / 1000.0),
    }
}

async fn release_group_to_album_info(
    client: &MusicBrainzClient,
    release_group: ReleaseGroup,
) -> Result<AlbumInfo, MusicBrainzError> {
    let (artist, artist_id) = primary_artist_credit(&release_group.artist_credit);
    let release_date = release_group
        .first_release_date
        .as_deref()
        .and_then(ReleaseDate::parse_str);

    let mut album = AlbumInfo::new(
        CatalogAlbumId::from_uuid(release_group.id),
        release_group.title.clone(),
        artist,
    );
    album.artist_id = artist_id;
    album.release_date = release_date;
    album.albumtype = release_group.primary_type.clone();
    album.va = release_group.is_various_artists();

    if let Some(representative) = release_group.releases.first() {
        let release = client.lookup_release(representative.id).await?;
        album.tracks = release
            .tracks()
            .map(|track| {
                let mut info = recording_to_track_info(&track.recording);
                // Prefer the track's own (release-specific) title/length,
                // which can differ slightly from the recording's.
                info.title = track.title.clone();
                info.length = track.length.map(|ms| ms as f64 / 1000.0).or(info.length);
                info
            })
            .collect();
    } else {
        warn!(
            target: "musicbrainz",
            release_group_id = %release_group.id,
            "release group has no releases; returning an empty track list"
        );
    }

    Ok(album)
}

#[async_trait]
impl CatalogClient for MusicBrainzClient {
    type Error = MusicBrainzError;

    async fn album_by_id(
        &self,
        album_id: CatalogAlbumId,
    ) -> Result<Option<AlbumInfo>, Self::Error> {
        match self.lookup_release_group(album_id.0).await {
            Ok(release_group) => Ok(Some(release_group_to_album_info(self, release_group).await?)),
            Err(MusicBrainzError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn match_album(
        &self,
        artist: Option<&str>,
        album: &str,
        track_count: usize,
        limit: usize,
    ) -> Result<Vec<AlbumInfo>, Self::Error> {
        let query_string = match artist {
            Some(artist) if !artist.is_empty() => {
                format!("artist:\"{artist}\" AND release:\"{album}\" AND tracks:{track_count}")
            }
            _ => format!("release:\"{album}\" AND tracks:{track_count}"),
        };

        let query = SearchQuery::new(query_string).limit(limit as u32);
        let response = self.search_release_groups(query).await?;

        let mut albums = Vec::with_capacity(response.results.release_groups.len());
        for release_group in response.results.release_groups.into_iter().take(limit) {
            albums.push(release_group_to_album_info(self, release_group).await?);
        }
        Ok(albums)
    }

    async fn track_by_id(
        &self,
        track_id: CatalogTrackId,
    ) -> Result<Option<TrackInfo>, Self::Error> {
        match self.lookup_recording(track_id.0).await {
            Ok(recording) => Ok(Some(recording_to_track_info(&recording))),
            Err(MusicBrainzError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn match_track(
        &self,
        artist: &str,
        title: &str,
    ) -> Result<Vec<TrackInfo>, Self::Error> {
        let query_string = if artist.is_empty() {
            format!("recording:\"{title}\"")
        } else {
            format!("artist:\"{artist}\" AND recording:\"{title}\"")
        };

        let query = SearchQuery::new(query_string).limit(harmonia_autotag::constants::MAX_CANDIDATES as u32);
        let response = self.search_recordings(query).await?;

        Ok(response
            .results
            .recordings
            .iter()
            .map(recording_to_track_info)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArtistRef;

    fn credit(name: &str) -> ArtistCredit {
        ArtistCredit {
            name: name.to_string(),
            artist: ArtistRef {
                id: uuid::Uuid::nil(),
                name: name.to_string(),
                sort_name: name.to_string(),
            },
            joinphrase: None,
        }
    }

    #[test]
    fn primary_artist_credit_picks_first_entry() {
        let credits = vec![credit("Radiohead"), credit("Thom Yorke")];
        let (name, id) = primary_artist_credit(&credits);
        assert_eq!(name, "Radiohead");
        assert!(id.is_some());
    }

    #[test]
    fn primary_artist_credit_empty_when_no_credits() {
        let (name, id) = primary_artist_credit(&[]);
        assert_eq!(name, "");
        assert!(id.is_none());
    }

    #[test]
    fn recording_length_converts_milliseconds_to_seconds() {
        let recording = Recording {
            id: uuid::Uuid::nil(),
            title: "Airbag".to_string(),
            length: Some(300_000),
            artist_credit: vec![credit("Radiohead")],
        };
        let track = recording_to_track_info(&recording);
        assert_eq!(track.length, Some(300.0));
        assert_eq!(track.artist.as_deref(), Some("Radiohead"));
    }
}
