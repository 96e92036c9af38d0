// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-item variant of the album tagger: matches one observed item
//! against catalog tracks directly, without any album context.

use crate::catalog::{CatalogClient, ExternalCandidateSource};
use crate::error::{AutotagError, Result};
use crate::recommendation::recommendation;
use crate::track_distance::track_distance_with_contribution;
use harmonia_domain::{Item, Recommendation, TrackCandidate};

pub struct TrackTaggingResult {
    pub candidates: Vec<TrackCandidate>,
    pub recommendation: Recommendation,
}

fn sorted(mut candidates: Vec<TrackCandidate>) -> Vec<TrackCandidate> {
    candidates.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

pub async fn tag_item<C, E>(
    item: &Item,
    catalog: &C,
    external: &E,
    search_artist: Option<&str>,
    search_title: Option<&str>,
) -> Result<TrackTaggingResult>
where
    C: CatalogClient,
    E: ExternalCandidateSource,
{
    let mut candidates = Vec::new();

    // Step 1: catalog-track-ID short circuit.
    if let Some(track_id) = item.catalog_track_id {
        let fetched = catalog
            .track_by_id(track_id)
            .await
            .map_err(|e| AutotagError::CatalogError(Box::new(e)))?;

        if let Some(track) = fetched {
            let contribution = external.track_distance_contribution(item, &track);
            let distance = track_distance_with_contribution(item, &track, None, true, contribution);
            candidates.push(TrackCandidate { distance, track });

            let distances: Vec<f64> = candidates.iter().map(|c| c.distance).collect();
            if recommendation(&distances) == Recommendation::Strong {
                return Ok(TrackTaggingResult {
                    candidates: sorted(candidates),
                    recommendation: Recommendation::Strong,
                });
            }
        }
    }

    // Step 2/3: search terms and catalog query.
    let artist = search_artist.unwrap_or(&item.artist);
    let title = search_title.unwrap_or(&item.title);

    if !artist.is_empty() || !title.is_empty() {
        let results = catalog
            .match_track(artist, title)
            .await
            .map_err(|e| AutotagError::CatalogError(Box::new(e)))?;

        for track in results {
            let contribution = external.track_distance_contribution(item, &track);
            let distance = track_distance_with_contribution(item, &track, None, true, contribution);
            candidates.push(TrackCandidate { distance, track });
        }
    }

    // Step 4: external plugin candidates.
    for track in external.item_candidates(item).await {
        let contribution = external.track_distance_contribution(item, &track);
        let distance = track_distance_with_contribution(item, &track, None, true, contribution);
        candidates.push(TrackCandidate { distance, track });
    }

    let candidates = sorted(candidates);
    let distances: Vec<f64> = candidates.iter().map(|c| c.distance).collect();
    let rec = recommendation(&distances);

    Ok(TrackTaggingResult {
        candidates,
        recommendation: rec,
    })
}
