// SPDX-License-Identifier: MPL-2.0

//! Camera device abstraction
//!
//! The camera owns picture taking and barcode decoding. The session
//! controller only pushes configuration down (facing, zoom, scan mode)
//! and consumes the results.

use crate::errors::CaptureError;
use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

/// Camera facing direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Facing {
    /// Rear camera (default)
    #[default]
    Back,
    /// Front camera (selfie)
    Front,
}

impl Facing {
    /// The opposite facing
    pub fn toggled(self) -> Self {
        match self {
            Facing::Back => Facing::Front,
            Facing::Front => Facing::Back,
        }
    }

    /// Get display name for the facing
    pub fn display_name(&self) -> &'static str {
        match self {
            Facing::Back => "Back",
            Facing::Front => "Front",
        }
    }
}

/// A captured photo, referenced by URI
///
/// The URI is an opaque reference produced by the camera backend. Photos
/// are append-only history entries and are never mutated after capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPhoto {
    /// Opaque reference to the image data
    pub uri: String,
}

/// A single decoded barcode event from the camera stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBarcode {
    /// Decoded payload, independent of symbology
    pub data: String,
}

/// Camera device trait
///
/// Implementations wrap a concrete capture pipeline. Decoding barcodes
/// is entirely the device's job; the stream yields finished payloads.
#[allow(async_fn_in_trait)]
pub trait CameraDevice {
    /// Take a picture with the current configuration
    async fn capture(&mut self) -> Result<CapturedPhoto, CaptureError>;

    /// Stream of decoded barcodes
    ///
    /// Lazy, infinite, and not restartable. Whether frames are fed to
    /// the decoder at all is governed by [`CameraDevice::set_scan_mode`].
    fn barcode_stream(&mut self) -> BoxStream<'static, DecodedBarcode>;

    /// Select the facing direction
    fn set_facing(&mut self, facing: Facing);

    /// Set the zoom level, already clamped to [0, 1] by the caller
    fn set_zoom(&mut self, zoom: f32);

    /// Enable or disable barcode scanning
    fn set_scan_mode(&mut self, enabled: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_toggled_is_involution() {
        assert_eq!(Facing::Back.toggled(), Facing::Front);
        assert_eq!(Facing::Front.toggled(), Facing::Back);
        assert_eq!(Facing::Back.toggled().toggled(), Facing::Back);
    }

    #[test]
    fn test_captured_photo_wire_format() {
        // History entries must serialize as {"uri": ...} for
        // compatibility with already-persisted blobs
        let photo = CapturedPhoto {
            uri: "file:///photos/0001.jpg".to_string(),
        };
        let json = serde_json::to_string(&photo).unwrap();
        assert_eq!(json, r#"{"uri":"file:///photos/0001.jpg"}"#);
    }
}
