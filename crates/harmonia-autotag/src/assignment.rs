// SPDX-License-Identifier: GPL-3.0-or-later

//! Optimal bipartite matching of observed items to canonical track slots,
//! via the Hungarian algorithm on an integer cost matrix.

use crate::constants::ASSIGNMENT_PRECISION_FACTOR;
use crate::track_distance::track_distance;
use harmonia_domain::{Item, TrackInfo};

fn f64_to_u64(value: f64) -> u64 {
    (value.max(0.0) * ASSIGNMENT_PRECISION_FACTOR).round() as u64
}

/// Assigns each item to the canonical slot that minimizes total track
/// distance. `include_artist` is always false here: the album-level artist
/// signal already covers artist agreement, and mixing it in here would
/// double-count it.
///
/// Returns `None` when `items.len() != tracks.len()`. Returns `Some(vec![])`
/// for the degenerate `N = 0` case.
pub fn order_items(items: &[Item], tracks: &[TrackInfo]) -> Option<Vec<Item>> {
    if items.len() != tracks.len() {
        return None;
    }

    let n = items.len();
    if n == 0 {
        return Some(Vec::new());
    }

    let mut cost_matrix = Vec::with_capacity(n * n);
    for item in items {
        for (slot, track) in tracks.iter().enumerate() {
            let d = track_distance(item, track, Some(slot + 1), false);
            cost_matrix.push(f64_to_u64(d));
        }
    }

    let assignment = hungarian::minimize(&cost_matrix, n, n);

    let mut ordered: Vec<Option<Item>> = vec![None; n];
    for (item_index, slot) in assignment.into_iter().enumerate() {
        let slot = slot?;
        ordered[slot] = Some(items[item_index].clone());
    }

    ordered.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonia_domain::CatalogTrackId;

    fn item(title: &str, track: u32) -> Item {
        Item {
            title: title.to_string(),
            track: Some(track),
            length: 200.0,
            ..Default::default()
        }
    }

    fn track(title: &str) -> TrackInfo {
        let mut t = TrackInfo::new(CatalogTrackId::new(), title);
        t.length = Some(200.0);
        t
    }

    #[test]
    fn mismatched_lengths_return_none() {
        let items = vec![item("A", 1)];
        let tracks = vec![track("A"), track("B")];
        assert!(order_items(&items, &tracks).is_none());
    }

    #[test]
    fn empty_input_returns_empty_ordering() {
        let items: Vec<Item> = Vec::new();
        let tracks: Vec<TrackInfo> = Vec::new();
        assert_eq!(order_items(&items, &tracks), Some(Vec::new()));
    }

    #[test]
    fn reorders_shuffled_items_to_match_canonical_slots() {
        let tracks = vec![track("Airbag"), track("Paranoid Android"), track("Subterranean Homesick Alien")];
        // Items supplied out of order relative to the canonical track list.
        let items = vec![
            item("Paranoid Android", 2),
            item("Subterranean Homesick Alien", 3),
            item("Airbag", 1),
        ];

        let ordered = order_items(&items, &tracks).expect("square assignment is always feasible");

        assert_eq!(ordered[0].title, "Airbag");
        assert_eq!(ordered[1].title, "Paranoid Android");
        assert_eq!(ordered[2].title, "Subterranean Homesick Alien");
    }

    #[test]
    fn assignment_minimizes_total_cost() {
        let tracks = vec![track("One"), track("Two")];
        let items = vec![item("Two", 2), item("One", 1)];

        let ordered = order_items(&items, &tracks).unwrap();
        let direct_cost: u64 = items
            .iter()
            .zip(tracks.iter())
            .map(|(i, t)| f64_to_u64(track_distance(i, t, None, false)))
            .sum();
        let chosen_cost: u64 = ordered
            .iter()
            .zip(tracks.iter())
            .map(|(i, t)| f64_to_u64(track_distance(i, t, None, false)))
            .sum();

        assert!(chosen_cost <= direct_cost);
    }
}
