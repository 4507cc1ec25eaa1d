// SPDX-License-Identifier: MPL-2.0

//! Integration tests for constants module

use scanshot::constants;

#[test]
fn test_history_key_names_are_stable() {
    // Persisted blobs from earlier releases live under these exact
    // names; renaming either would orphan existing history
    assert_eq!(constants::PHOTO_HISTORY_KEY, "capturedPhotos");
    assert_eq!(constants::BARCODE_HISTORY_KEY, "barcodeHistory");
}

#[test]
fn test_zoom_bounds() {
    assert_eq!(constants::ZOOM_MIN, 0.0);
    assert_eq!(constants::ZOOM_MAX, 1.0);
    assert!(constants::ZOOM_MIN < constants::ZOOM_MAX);
}

#[test]
fn test_search_url_has_no_trailing_query() {
    // The payload is appended as "?q=<payload>"; the base must not
    // already carry a query string
    assert!(!constants::DEFAULT_SEARCH_URL.contains('?'));
}

#[test]
fn test_gallery_screen_name() {
    assert_eq!(constants::GALLERY_SCREEN, "Gallery");
}
