// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Store key for the captured photo history
///
/// The key name is shared with earlier releases, so stored history
/// survives an upgrade. Do not rename.
pub const PHOTO_HISTORY_KEY: &str = "capturedPhotos";

/// Store key for the barcode scan history
///
/// Same compatibility constraint as [`PHOTO_HISTORY_KEY`].
pub const BARCODE_HISTORY_KEY: &str = "barcodeHistory";

/// Default base URL for looking up barcode payloads that are not URLs
///
/// The payload is appended percent-encoded as the `q` query parameter.
pub const DEFAULT_SEARCH_URL: &str = "https://www.example.com/search";

/// Screen name the session navigates to after a successful capture
pub const GALLERY_SCREEN: &str = "Gallery";

/// Minimum camera zoom level
pub const ZOOM_MIN: f32 = 0.0;

/// Maximum camera zoom level
pub const ZOOM_MAX: f32 = 1.0;

/// Directory name used under the platform data/config directories
pub const APP_DIR_NAME: &str = "scanshot";
