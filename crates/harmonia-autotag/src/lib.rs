// SPDX-License-Identifier: GPL-3.0-or-later

//! The autotagging core: given a set of observed [`harmonia_domain::Item`]s
//! believed to constitute one album (or a single item), finds the
//! best-matching canonical release (or track) in an injected metadata
//! catalog, scores and orders candidates, and classifies the top result's
//! confidence. Single-threaded and synchronous in spirit: the only
//! suspension points are the catalog/external-plugin calls, which are
//! invoked through the async traits in [`catalog`].

pub mod album_distance;
pub mod apply;
pub mod assignment;
pub mod candidate;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod item_tagger;
pub mod plurality;
pub mod recommendation;
pub mod string_dist;
pub mod tagger;
pub mod track_distance;

pub use album_distance::{album_distance, current_metadata};
pub use apply::{apply_item_metadata, apply_metadata};
pub use assignment::order_items;
pub use candidate::validate;
pub use catalog::{CatalogClient, DistanceContribution, ExternalCandidateSource, NullCandidateSource};
pub use error::{AutotagError, Result};
pub use item_tagger::{tag_item, TrackTaggingResult};
pub use plurality::plurality;
pub use recommendation::recommendation;
pub use string_dist::string_dist;
pub use tagger::{tag_album, AlbumTaggingResult, AutotagConfig};
pub use track_distance::track_distance;
