// SPDX-License-Identifier: GPL-3.0-or-later

//! Stable, test-facing constants. These are part of the public interface:
//! callers are expected to depend on their exact values.

pub const MAX_CANDIDATES: usize = 5;

pub const ARTIST_WEIGHT: f64 = 3.0;
pub const ALBUM_WEIGHT: f64 = 3.0;
pub const TRACK_TITLE_WEIGHT: f64 = 3.0;
pub const TRACK_WEIGHT: f64 = 1.0;
pub const TRACK_ARTIST_WEIGHT: f64 = 2.0;
pub const TRACK_INDEX_WEIGHT: f64 = 1.0;
pub const TRACK_LENGTH_WEIGHT: f64 = 2.0;
pub const TRACK_ID_WEIGHT: f64 = 5.0;

pub const TRACK_LENGTH_GRACE: f64 = 10.0;
pub const TRACK_LENGTH_MAX: f64 = 30.0;

pub const STRONG_REC_THRESH: f64 = 0.04;
pub const MEDIUM_REC_THRESH: f64 = 0.25;
pub const REC_GAP_THRESH: f64 = 0.25;

/// Case-insensitive markers for a various-artists release. Whitespace-only
/// strings are deliberately NOT treated as VA markers here (see DESIGN.md);
/// only the exact empty string and the listed words match.
pub const VA_ARTISTS: [&str; 4] = ["", "various artists", "va", "unknown"];

/// Precision factor used to convert `f64` distances into the integer cost
/// matrix the assignment solver requires.
pub const ASSIGNMENT_PRECISION_FACTOR: f64 = 100_000.0;
