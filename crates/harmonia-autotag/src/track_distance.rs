// SPDX-License-Identifier: GPL-3.0-or-later

//! Weighted per-track cost: length, title, optional artist, slot index, and
//! catalog-track-ID agreement.

use crate::catalog::DistanceContribution;
use crate::constants::{
    TRACK_ARTIST_WEIGHT, TRACK_ID_WEIGHT, TRACK_INDEX_WEIGHT, TRACK_LENGTH_GRACE,
    TRACK_LENGTH_MAX, TRACK_LENGTH_WEIGHT, TRACK_TITLE_WEIGHT,
};
use crate::string_dist::string_dist;
use harmonia_domain::{Item, TrackInfo};

/// Distance between one observed item and one canonical track.
///
/// `slot_index` is the 1-based slot the track occupies, if known (absent
/// during some candidate-validator calls that don't carry ordering yet).
/// `include_artist` should be false while the assignment solver runs (the
/// album-level artist signal already covers it) and true everywhere else.
pub fn track_distance(
    item: &Item,
    track: &TrackInfo,
    slot_index: Option<usize>,
    include_artist: bool,
) -> f64 {
    track_distance_with_contribution(item, track, slot_index, include_artist, DistanceContribution::default())
}

pub fn track_distance_with_contribution(
    item: &Item,
    track: &TrackInfo,
    slot_index: Option<usize>,
    include_artist: bool,
    external: DistanceContribution,
) -> f64 {
    let mut num = 0.0;
    let mut den = 0.0;

    // Length: absent track length is treated as the worst case (full
    // weight). This biases toward candidates that publish lengths; kept for
    // compatibility with the reference implementation (see DESIGN.md).
    match track.length {
        None => num += TRACK_LENGTH_WEIGHT,
        Some(track_length) => {
            let diff = (item.length - track_length).abs();
            let over_grace = (diff - TRACK_LENGTH_GRACE).clamp(0.0, TRACK_LENGTH_MAX);
            num += (over_grace / TRACK_LENGTH_MAX) * TRACK_LENGTH_WEIGHT;
        }
    }
    den += TRACK_LENGTH_WEIGHT;

    // Title: always active.
    num += string_dist(&item.title, &track.title) * TRACK_TITLE_WEIGHT;
    den += TRACK_TITLE_WEIGHT;

    // Artist: only when requested and the track publishes one.
    if include_artist {
        if let Some(track_artist) = track.artist.as_deref() {
            num += string_dist(&item.artist, track_artist) * TRACK_ARTIST_WEIGHT;
            den += TRACK_ARTIST_WEIGHT;
        }
    }

    // Index: only when both a slot and the item's current track number are
    // known.
    if let (Some(slot_index), Some(item_track)) = (slot_index, item.track) {
        if slot_index as u32 != item_track {
            num += TRACK_INDEX_WEIGHT;
        }
        den += TRACK_INDEX_WEIGHT;
    }

    // Catalog track ID: only when the item already carries one.
    if let Some(item_track_id) = item.catalog_track_id {
        if item_track_id != track.id {
            num += TRACK_ID_WEIGHT;
        }
        den += TRACK_ID_WEIGHT;
    }

    num += external.add_num;
    den += external.add_den;

    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}
