// SPDX-License-Identifier: GPL-3.0-or-later

//! Writes chosen canonical values back onto items. Never persists to disk;
//! an external tag writer is responsible for that.

use harmonia_domain::{AlbumInfo, Item, TrackInfo};

/// Applies `album_info` to `ordered_items` in place. `ordered_items[i]` is
/// matched with `album_info.tracks[i]`; callers must have already produced
/// this ordering via the assignment step.
pub fn apply_metadata(ordered_items: &mut [Item], album_info: &AlbumInfo) {
    let track_total = album_info.tracks.len() as u32;

    for (i, track) in album_info.tracks.iter().enumerate() {
        let Some(item) = ordered_items.get_mut(i) else {
            continue;
        };

        item.artist = track.artist.clone().unwrap_or_else(|| album_info.artist.clone());
        item.albumartist = Some(album_info.artist.clone());
        item.album = album_info.album.clone();
        item.tracktotal = Some(track_total);

        if let Some(release_date) = &album_info.release_date {
            item.year = Some(release_date.year);
            if release_date.month.is_some() {
                item.month = release_date.month;
            }
            if release_date.day.is_some() {
                item.day = release_date.day;
            }
        }

        item.title = track.title.clone();
        item.track = Some(i as u32 + 1);
        item.catalog_track_id = Some(track.id);
        item.catalog_album_id = Some(album_info.album_id);
        item.catalog_artist_id = track.artist_id.or(album_info.artist_id);
        item.catalog_albumartist_id = album_info.artist_id;
        item.albumtype = album_info.albumtype.clone();
        item.compilation_flag = album_info.va;
    }
}

/// Single-item variant: sets only artist, title, and catalog track/artist
/// IDs. Used by the track tagger, which has no album context to draw the
/// rest of the fields from.
pub fn apply_item_metadata(item: &mut Item, track: &TrackInfo) {
    if let Some(artist) = &track.artist {
        item.artist = artist.clone();
    }
    item.title = track.title.clone();
    item.catalog_track_id = Some(track.id);
    if let Some(artist_id) = track.artist_id {
        item.catalog_artist_id = Some(artist_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonia_domain::{CatalogAlbumId, CatalogTrackId, ReleaseDate};

    fn make_album() -> AlbumInfo {
        let mut album = AlbumInfo::new(CatalogAlbumId::new(), "OK Computer", "Radiohead");
        album.release_date = Some(ReleaseDate::new(1997, Some(6), Some(16)));
        album.albumtype = Some("album".to_string());
        album.tracks = vec![
            TrackInfo::new(CatalogTrackId::new(), "Airbag"),
            TrackInfo::new(CatalogTrackId::new(), "Paranoid Android"),
        ];
        album
    }

    #[test]
    fn applies_every_documented_field() {
        let album = make_album();
        let mut items = vec![Item::default(), Item::default()];

        apply_metadata(&mut items, &album);

        assert_eq!(items[0].title, "Airbag");
        assert_eq!(items[0].artist, "Radiohead");
        assert_eq!(items[0].albumartist.as_deref(), Some("Radiohead"));
        assert_eq!(items[0].album, "OK Computer");
        assert_eq!(items[0].tracktotal, Some(2));
        assert_eq!(items[0].year, Some(1997));
        assert_eq!(items[0].month, Some(6));
        assert_eq!(items[0].day, Some(16));
        assert_eq!(items[0].track, Some(1));
        assert_eq!(items[0].catalog_track_id, Some(album.tracks[0].id));
        assert_eq!(items[0].catalog_album_id, Some(album.album_id));
        assert_eq!(items[0].albumtype.as_deref(), Some("album"));
        assert!(!items[0].compilation_flag);

        assert_eq!(items[1].track, Some(2));
        assert_eq!(items[1].title, "Paranoid Android");
    }

    #[test]
    fn is_idempotent() {
        let album = make_album();
        let mut items = vec![Item::default(), Item::default()];

        apply_metadata(&mut items, &album);
        let first_pass = items.clone();
        apply_metadata(&mut items, &album);

        assert_eq!(items, first_pass);
    }

    #[test]
    fn per_track_artist_overrides_album_artist() {
        let mut album = make_album();
        album.va = true;
        album.tracks[0].artist = Some("Thom Yorke".to_string());
        let mut items = vec![Item::default(), Item::default()];

        apply_metadata(&mut items, &album);

        assert_eq!(items[0].artist, "Thom Yorke");
        assert_eq!(items[1].artist, "Radiohead");
        assert!(items[0].compilation_flag);
    }

    #[test]
    fn item_variant_sets_only_its_documented_fields() {
        let mut item = Item {
            album: "Untouched".to_string(),
            ..Default::default()
        };
        let mut track = TrackInfo::new(CatalogTrackId::new(), "Airbag");
        track.artist = Some("Radiohead".to_string());

        apply_item_metadata(&mut item, &track);

        assert_eq!(item.title, "Airbag");
        assert_eq!(item.artist, "Radiohead");
        assert_eq!(item.catalog_track_id, Some(track.id));
        assert_eq!(item.album, "Untouched");
    }
}
