// SPDX-License-Identifier: GPL-3.0-or-later

//! Gates, orders, scores, and deduplicates a single candidate release
//! against a set of observed items.

use crate::album_distance::album_distance_with_contribution;
use crate::assignment::order_items;
use crate::catalog::ExternalCandidateSource;
use harmonia_domain::{AlbumInfo, CatalogAlbumId, Candidate, Item};
use std::collections::HashMap;
use tracing::debug;

/// Validates one candidate release against `items` and, if it survives,
/// inserts it into `result_map` keyed by `album_id`. Already-present
/// album_ids are dropped (first insertion wins); a track-count mismatch or
/// an infeasible assignment also drops the candidate. All side effects are
/// confined to `result_map`. `external`'s album distance contribution is
/// folded into the final score.
pub fn validate(
    items: &[Item],
    result_map: &mut HashMap<CatalogAlbumId, Candidate>,
    album_info: AlbumInfo,
    external: &impl ExternalCandidateSource,
) {
    if result_map.contains_key(&album_info.album_id) {
        debug!(target: "autotag", album_id = %album_info.album_id, "dropping duplicate candidate");
        return;
    }

    if items.len() != album_info.tracks.len() {
        debug!(
            target: "autotag",
            album_id = %album_info.album_id,
            items = items.len(),
            tracks = album_info.tracks.len(),
            "dropping candidate: track count mismatch"
        );
        return;
    }

    let Some(ordered_items) = order_items(items, &album_info.tracks) else {
        debug!(target: "autotag", album_id = %album_info.album_id, "dropping candidate: assignment infeasible");
        return;
    };

    let contribution = external.album_distance_contribution(items, &album_info);
    let distance = album_distance_with_contribution(&ordered_items, &album_info, contribution);

    result_map.insert(
        album_info.album_id,
        Candidate {
            distance,
            ordered_items,
            album: album_info,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NullCandidateSource;
    use harmonia_domain::{CatalogTrackId, TrackInfo};

    fn make_album(track_count: usize) -> AlbumInfo {
        let mut album = AlbumInfo::new(CatalogAlbumId::new(), "Album", "Artist");
        album.tracks = (0..track_count)
            .map(|i| TrackInfo::new(CatalogTrackId::new(), format!("Track {i}")))
            .collect();
        album
    }

    fn make_items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                title: format!("Track {i}"),
                track: Some(i as u32 + 1),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn drops_duplicate_album_ids() {
        let album = make_album(1);
        let album_id = album.album_id;
        let items = make_items(1);
        let mut result_map = HashMap::new();

        validate(&items, &mut result_map, album.clone(), &NullCandidateSource);
        assert!(result_map.contains_key(&album_id));

        let mut replacement = album;
        replacement.album = "Different Title".to_string();
        validate(&items, &mut result_map, replacement, &NullCandidateSource);

        assert_eq!(result_map[&album_id].album.album, "Album");
    }

    #[test]
    fn drops_track_count_mismatch() {
        let album = make_album(2);
        let items = make_items(3);
        let mut result_map = HashMap::new();

        validate(&items, &mut result_map, album.clone(), &NullCandidateSource);
        assert!(!result_map.contains_key(&album.album_id));
    }

    #[test]
    fn inserts_a_feasible_candidate() {
        let album = make_album(2);
        let items = make_items(2);
        let mut result_map = HashMap::new();

        validate(&items, &mut result_map, album.clone(), &NullCandidateSource);
        let candidate = result_map.get(&album.album_id).expect("candidate inserted");
        assert_eq!(candidate.ordered_items.len(), 2);
        assert_eq!(candidate.distance, 0.0);
    }
}
