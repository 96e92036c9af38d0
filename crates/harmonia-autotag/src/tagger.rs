// SPDX-License-Identifier: GPL-3.0-or-later

//! Orchestrates catalog-ID lookup, artist/album search, various-artists
//! fallback search, and external candidate sources into a single ranked
//! result for one album's worth of items.

use crate::album_distance::current_metadata;
use crate::candidate::validate;
use crate::catalog::{CatalogClient, ExternalCandidateSource};
use crate::constants::{MAX_CANDIDATES, VA_ARTISTS};
use crate::error::{AutotagError, Result};
use crate::plurality::plurality;
use crate::recommendation::recommendation;
use harmonia_domain::{Candidate, Item, Recommendation};
use std::collections::HashMap;
use tracing::debug;

/// Autotag-relevant configuration. Kept minimal and trait-based so a caller
/// can plug in whatever configuration layer it already has (see
/// `harmonia-config` for a concrete `figment`-backed implementation).
pub trait AutotagConfig {
    /// When true, a STRONG catalog-ID match does not short-circuit the
    /// search: it still competes against search results so a user reviewing
    /// interactively sees every candidate.
    fn interactive_autotag(&self) -> bool;
}

/// Result of tagging one album's worth of items.
pub struct AlbumTaggingResult {
    pub current_artist: Option<String>,
    pub current_album: Option<String>,
    pub candidates: Vec<Candidate>,
    pub recommendation: Recommendation,
}

fn is_va_marker(artist: &str) -> bool {
    VA_ARTISTS.contains(&artist.to_lowercase().as_str())
}

fn sorted_candidates(result_map: HashMap<harmonia_domain::CatalogAlbumId, Candidate>) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = result_map.into_values().collect();
    candidates.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Tags one album's worth of items against a catalog and optional external
/// candidate sources.
pub async fn tag_album<C, E>(
    items: &[Item],
    config: &impl AutotagConfig,
    catalog: &C,
    external: &E,
    search_artist: Option<&str>,
    search_album: Option<&str>,
) -> Result<AlbumTaggingResult>
where
    C: CatalogClient,
    E: ExternalCandidateSource,
{
    let (cur_artist, cur_album, artist_consensus) = current_metadata(items);

    let mut result_map: HashMap<harmonia_domain::CatalogAlbumId, Candidate> = HashMap::new();

    // Step 2: catalog-ID match.
    let album_ids: Vec<_> = items.iter().filter_map(|i| i.catalog_album_id).collect();
    if !album_ids.is_empty() && harmonia_domain::all_equal(&album_ids) {
        let album_id = album_ids[0];
        let fetched = catalog
            .album_by_id(album_id)
            .await
            .map_err(|e| AutotagError::CatalogError(Box::new(e)))?;

        if let Some(album_info) = fetched {
            validate(items, &mut result_map, album_info, external);

            if !config.interactive_autotag() {
                let candidates = sorted_candidates(result_map.clone());
                let distances: Vec<f64> = candidates.iter().map(|c| c.distance).collect();
                let rec = recommendation(&distances);
                if rec == Recommendation::Strong {
                    debug!(target: "autotag", %album_id, "short-circuiting on strong catalog-ID match");
                    return Ok(AlbumTaggingResult {
                        current_artist: cur_artist,
                        current_album: cur_album,
                        candidates,
                        recommendation: rec,
                    });
                }
            }
        }
    }

    // Step 3: choose search terms.
    let (effective_artist, effective_album) = match (search_artist, search_album) {
        (Some(a), Some(b)) => (Some(a.to_string()), Some(b.to_string())),
        _ => (cur_artist.clone(), cur_album.clone()),
    };

    // Step 4: primary search.
    if let (Some(artist), Some(album)) = (&effective_artist, &effective_album) {
        if !artist.is_empty() && !album.is_empty() {
            let results = catalog
                .match_album(Some(artist), album, items.len(), MAX_CANDIDATES)
                .await
                .map_err(|e| AutotagError::CatalogError(Box::new(e)))?;

            for album_info in results.into_iter().take(MAX_CANDIDATES) {
                validate(items, &mut result_map, album_info, external);
            }
        }
    }

    // Step 5: various-artists fallback search.
    if let Some(album) = &effective_album {
        if !album.is_empty() {
            let va_artist_marker = effective_artist
                .as_deref()
                .map(is_va_marker)
                .unwrap_or(false);
            let any_compilation_flagged = items.iter().any(|i| i.compilation_flag);

            if !artist_consensus || va_artist_marker || any_compilation_flagged {
                let results = catalog
                    .match_album(None, album, items.len(), MAX_CANDIDATES)
                    .await
                    .map_err(|e| AutotagError::CatalogError(Box::new(e)))?;

                for album_info in results.into_iter().take(MAX_CANDIDATES) {
                    validate(items, &mut result_map, album_info, external);
                }
            }
        }
    }

    // Step 6: external candidate sources.
    for album_info in external.album_candidates(items).await {
        validate(items, &mut result_map, album_info, external);
    }

    let candidates = sorted_candidates(result_map);
    let distances: Vec<f64> = candidates.iter().map(|c| c.distance).collect();
    let rec = recommendation(&distances);

    Ok(AlbumTaggingResult {
        current_artist: cur_artist,
        current_album: cur_album,
        candidates,
        recommendation: rec,
    })
}
