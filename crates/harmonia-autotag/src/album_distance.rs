// SPDX-License-Identifier: GPL-3.0-or-later

//! Weighted aggregate of album-level artist/title strings and all per-track
//! costs. Callers must supply items already ordered to match
//! `album_info.tracks` slot-for-slot (see the assignment step).

use crate::catalog::DistanceContribution;
use crate::constants::{ALBUM_WEIGHT, ARTIST_WEIGHT, TRACK_WEIGHT};
use crate::plurality::plurality;
use crate::string_dist::string_dist;
use crate::track_distance::track_distance_with_contribution;
use harmonia_domain::{AlbumInfo, Item};

/// Plurality of `item.artist` and `item.album` across a set of items, plus
/// whether the artist plurality was unanimous.
pub fn current_metadata(items: &[Item]) -> (Option<String>, Option<String>, bool) {
    let artists: Vec<String> = items.iter().map(|i| i.artist.clone()).collect();
    let albums: Vec<String> = items.iter().map(|i| i.album.clone()).collect();

    let (cur_artist, artist_consensus) = plurality(&artists);
    let (cur_album, _) = plurality(&albums);

    (cur_artist, cur_album, artist_consensus)
}

/// Distance between a set of items (already ordered to match
/// `album_info.tracks`) and a canonical release.
///
/// # Panics
/// Never panics; callers are expected to uphold `ordered_items.len() ==
/// album_info.tracks.len()` (the candidate validator enforces this before
/// calling), but a length mismatch degrades gracefully by only scoring the
/// overlapping prefix.
pub fn album_distance(ordered_items: &[Item], album_info: &AlbumInfo) -> f64 {
    album_distance_with_contribution(ordered_items, album_info, DistanceContribution::default())
}

pub fn album_distance_with_contribution(
    ordered_items: &[Item],
    album_info: &AlbumInfo,
    external: DistanceContribution,
) -> f64 {
    let (cur_artist, cur_album, _) = current_metadata(ordered_items);

    let mut num = 0.0;
    let mut den = 0.0;

    if !album_info.va {
        let cur_artist = cur_artist.unwrap_or_default();
        num += string_dist(&cur_artist, &album_info.artist) * ARTIST_WEIGHT;
        den += ARTIST_WEIGHT;
    }

    let cur_album = cur_album.unwrap_or_default();
    num += string_dist(&cur_album, &album_info.album) * ALBUM_WEIGHT;
    den += ALBUM_WEIGHT;

    for (i, track) in album_info.tracks.iter().enumerate() {
        if let Some(item) = ordered_items.get(i) {
            let td = track_distance_with_contribution(
                item,
                track,
                Some(i + 1),
                album_info.va,
                DistanceContribution::default(),
            );
            num += td * TRACK_WEIGHT;
            den += TRACK_WEIGHT;
        }
    }

    num += external.add_num;
    den += external.add_den;

    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}
