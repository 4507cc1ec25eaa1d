// SPDX-License-Identifier: GPL-3.0-only

//! Session state types

use crate::backends::camera::Facing;
use crate::constants::{ZOOM_MAX, ZOOM_MIN};

/// Session phase state machine
///
/// The machine cycles for the life of the screen; there is no terminal
/// phase. Both asynchronous flows (capture, barcode confirmation) are
/// serialized through it: requests arriving outside `Idle` are ignored
/// rather than interleaved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for user action or a barcode event
    #[default]
    Idle,
    /// A photo capture is in flight
    AwaitingCapture,
    /// A barcode was decoded and the yes/no prompt is open
    AwaitingConfirmation,
}

impl SessionPhase {
    /// Check if the session is ready for a new capture or scan
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionPhase::Idle)
    }

    /// Check if a confirmation prompt is outstanding
    pub fn is_awaiting_confirmation(&self) -> bool {
        matches!(self, SessionPhase::AwaitingConfirmation)
    }
}

/// Per-session camera-facing state
///
/// Owned exclusively by the session controller and never persisted;
/// every new session starts from [`SessionState::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Current camera facing direction
    pub facing: Facing,
    /// Zoom level, always within [0, 1]
    pub zoom_level: f32,
    /// Whether barcode events are consumed at all
    pub scan_mode_enabled: bool,
    /// Payload of the barcode awaiting confirmation, if any
    ///
    /// Set only while the phase is `AwaitingConfirmation`; at most one
    /// confirmation is outstanding at a time.
    pub pending_barcode: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            facing: Facing::Back,
            zoom_level: ZOOM_MIN,
            scan_mode_enabled: true,
            pending_barcode: None,
        }
    }
}

impl SessionState {
    /// Clamp a requested zoom value into the supported range
    ///
    /// NaN maps to the minimum; `f32::clamp` would pass it through and
    /// hand the camera an unusable zoom.
    pub fn clamp_zoom(value: f32) -> f32 {
        if value.is_nan() {
            return ZOOM_MIN;
        }
        value.clamp(ZOOM_MIN, ZOOM_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = SessionState::default();
        assert_eq!(state.facing, Facing::Back);
        assert_eq!(state.zoom_level, 0.0);
        assert!(state.scan_mode_enabled);
        assert!(state.pending_barcode.is_none());
    }

    #[test]
    fn test_clamp_zoom_bounds() {
        assert_eq!(SessionState::clamp_zoom(-5.0), 0.0);
        assert_eq!(SessionState::clamp_zoom(5.0), 1.0);
        assert_eq!(SessionState::clamp_zoom(0.5), 0.5);
    }

    #[test]
    fn test_clamp_zoom_non_finite_input() {
        assert_eq!(SessionState::clamp_zoom(f32::NAN), 0.0);
        assert_eq!(SessionState::clamp_zoom(f32::NEG_INFINITY), 0.0);
        assert_eq!(SessionState::clamp_zoom(f32::INFINITY), 1.0);
    }

    #[test]
    fn test_phase_helpers() {
        assert!(SessionPhase::Idle.is_idle());
        assert!(!SessionPhase::AwaitingCapture.is_idle());
        assert!(SessionPhase::AwaitingConfirmation.is_awaiting_confirmation());
        assert!(!SessionPhase::Idle.is_awaiting_confirmation());
    }
}
