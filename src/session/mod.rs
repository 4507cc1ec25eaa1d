// SPDX-License-Identifier: GPL-3.0-only

//! Capture/scan session controller
//!
//! The controller mediates between the camera device, barcode events,
//! the user's confirmation prompt, and the persisted history. Both
//! asynchronous flows (photo capture, barcode confirmation) run through
//! the [`SessionPhase`] state machine, so a second request issued while
//! one is outstanding is ignored instead of interleaved.
//!
//! The confirmation prompt is fire-and-forget: the controller raises it
//! through [`ConfirmationPrompt::request`] and the UI later reports the
//! outcome by calling [`SessionController::confirm_open`] or
//! [`SessionController::confirm_cancel`].

pub mod link;
pub mod state;

pub use state::{SessionPhase, SessionState};

use crate::backends::camera::{CameraDevice, CapturedPhoto, DecodedBarcode};
use crate::config::Config;
use crate::constants::GALLERY_SCREEN;
use crate::errors::{OpenUrlError, SessionResult};
use crate::history::HistoryStore;
use crate::storage::KeyValueStore;
use futures::stream::BoxStream;
use tracing::{debug, error, info, trace, warn};

/// Launches an external handler for a URL
pub trait UrlOpener {
    /// Open `url` with the system handler
    fn open(&self, url: &str) -> Result<(), OpenUrlError>;
}

/// Opens URLs with the desktop's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<(), OpenUrlError> {
        open::that_detached(url).map_err(|err| OpenUrlError(err.to_string()))
    }
}

/// Transitions to another screen, fire-and-forget
pub trait ScreenNavigator {
    /// Request a transition to `screen`
    fn navigate_to(&self, screen: &str);
}

/// Raises the yes/no prompt for a scanned barcode
///
/// Implementations show the prompt and return immediately; the user's
/// answer comes back through the controller's confirm methods.
pub trait ConfirmationPrompt {
    /// Ask whether the scanned payload should be opened
    fn request(&self, payload: &str);
}

/// Capture/scan session controller
///
/// Owns the per-session state and drives the collaborators. One
/// controller exists per active camera screen; dropping it ends the
/// session. History outlives the session in the key-value store.
pub struct SessionController<C, S, O, N, P> {
    camera: C,
    history: HistoryStore<S>,
    opener: O,
    navigator: N,
    prompt: P,
    state: SessionState,
    phase: SessionPhase,
    search_url: String,
}

impl<C, S, O, N, P> SessionController<C, S, O, N, P>
where
    C: CameraDevice,
    S: KeyValueStore,
    O: UrlOpener,
    N: ScreenNavigator,
    P: ConfirmationPrompt,
{
    /// Start a session with default state
    ///
    /// The defaults (back camera, zoom 0, scan mode on) are pushed to
    /// the camera immediately.
    pub fn new(
        camera: C,
        history: HistoryStore<S>,
        opener: O,
        navigator: N,
        prompt: P,
        config: &Config,
    ) -> Self {
        let mut controller = Self {
            camera,
            history,
            opener,
            navigator,
            prompt,
            state: SessionState::default(),
            phase: SessionPhase::default(),
            search_url: config.search_url.clone(),
        };
        controller.sync_camera();
        controller
    }

    /// Current session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current phase of the session state machine
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The history store backing this session
    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// Flip between front and back camera
    ///
    /// Two toggles return to the original facing.
    pub fn toggle_facing(&mut self) {
        self.state.facing = self.state.facing.toggled();
        self.camera.set_facing(self.state.facing);
        debug!(facing = self.state.facing.display_name(), "Toggled camera facing");
    }

    /// Set the zoom level, clamped to [0, 1]
    pub fn set_zoom(&mut self, value: f32) {
        self.state.zoom_level = SessionState::clamp_zoom(value);
        self.camera.set_zoom(self.state.zoom_level);
    }

    /// Enable or disable barcode scanning
    ///
    /// While disabled, barcode events are dropped before touching the
    /// state machine; photo capture stays available in either mode.
    pub fn toggle_scan_mode(&mut self) {
        self.state.scan_mode_enabled = !self.state.scan_mode_enabled;
        self.camera.set_scan_mode(self.state.scan_mode_enabled);
        debug!(enabled = self.state.scan_mode_enabled, "Toggled scan mode");
    }

    /// Capture a photo, append it to history, and navigate to the gallery
    ///
    /// Valid only while idle; a capture requested while another capture
    /// or a confirmation is outstanding returns `Ok(None)`. Device and
    /// persistence failures surface to the caller and the session
    /// returns to idle with history untouched. Nothing is retried.
    pub async fn capture_photo(&mut self) -> SessionResult<Option<CapturedPhoto>> {
        if !self.phase.is_idle() {
            debug!(phase = ?self.phase, "Capture request ignored");
            return Ok(None);
        }
        self.phase = SessionPhase::AwaitingCapture;
        info!("Capturing photo...");

        let photo = match self.camera.capture().await {
            Ok(photo) => photo,
            Err(err) => {
                warn!(error = %err, "Photo capture failed");
                self.phase = SessionPhase::Idle;
                return Err(err.into());
            }
        };

        if let Err(err) = self.history.append_photo(photo.clone()).await {
            warn!(error = %err, uri = %photo.uri, "Failed to persist captured photo");
            self.phase = SessionPhase::Idle;
            return Err(err.into());
        }

        self.navigator.navigate_to(GALLERY_SCREEN);
        self.phase = SessionPhase::Idle;
        info!(uri = %photo.uri, "Photo captured");
        Ok(Some(photo))
    }

    /// Handle a decoded barcode from the camera stream
    ///
    /// Opens the confirmation prompt and records the payload as pending.
    /// Returns whether the event was accepted. Events are dropped while
    /// scan mode is off or while any capture/confirmation is already in
    /// flight, so at most one prompt is ever outstanding.
    pub fn on_barcode_detected(&mut self, data: &str) -> bool {
        if !self.state.scan_mode_enabled {
            trace!("Barcode event dropped, scan mode disabled");
            return false;
        }
        if !self.phase.is_idle() {
            debug!(phase = ?self.phase, "Barcode event dropped");
            return false;
        }

        self.phase = SessionPhase::AwaitingConfirmation;
        self.state.pending_barcode = Some(data.to_string());
        info!(payload = %data, "Barcode detected, asking for confirmation");
        self.prompt.request(data);
        true
    }

    /// User accepted the confirmation prompt
    ///
    /// Records the payload in the barcode history, resolves it to a URL
    /// (http/https payloads pass through unchanged, anything else turns
    /// into a search lookup) and hands it to the opener. An opener
    /// rejection is logged and swallowed; the user gets no retry loop.
    pub async fn confirm_open(&mut self) -> SessionResult<()> {
        if !self.phase.is_awaiting_confirmation() {
            debug!(phase = ?self.phase, "Stale confirmation ignored");
            return Ok(());
        }
        let payload = self.state.pending_barcode.take().unwrap_or_default();
        self.phase = SessionPhase::Idle;

        let appended = self.history.append_barcode(payload.clone()).await;

        let url = link::resolve(&payload, &self.search_url);
        info!(url = %url, "Opening URL from barcode");
        if let Err(err) = self.opener.open(&url) {
            error!(url = %url, error = %err, "Failed to open URL");
        }

        appended.map_err(Into::into)
    }

    /// User dismissed the confirmation prompt
    ///
    /// Clears the pending payload and returns to idle. No side effects.
    pub fn confirm_cancel(&mut self) {
        if !self.phase.is_awaiting_confirmation() {
            return;
        }
        self.state.pending_barcode = None;
        self.phase = SessionPhase::Idle;
        debug!("Barcode confirmation cancelled");
    }

    /// Obtain the camera's barcode stream
    ///
    /// The stream is infinite and does not borrow the controller, so
    /// the event loop can poll it between user actions: feed each event
    /// to [`SessionController::on_barcode_detected`] while
    /// [`SessionController::confirm_open`] and
    /// [`SessionController::confirm_cancel`] stay reachable for
    /// answering the prompt. Events arriving while a prompt is
    /// outstanding are dropped by the phase guard.
    pub fn barcode_stream(&mut self) -> BoxStream<'static, DecodedBarcode> {
        self.camera.barcode_stream()
    }

    fn sync_camera(&mut self) {
        self.camera.set_facing(self.state.facing);
        self.camera.set_zoom(self.state.zoom_level);
        self.camera.set_scan_mode(self.state.scan_mode_enabled);
    }
}
