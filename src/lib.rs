// SPDX-License-Identifier: MPL-2.0

//! scanshot - capture and barcode-scan session controller
//!
//! This library provides the core logic of a camera utility that takes
//! photos, scans barcodes, and keeps a persisted history of both.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`session`]: The capture/scan session controller and its state machine
//! - [`backends`]: Camera device abstraction
//! - [`history`]: Append-only persisted history lists
//! - [`storage`]: Key-value store backends (file-backed and in-memory)
//! - [`config`]: User configuration handling
//!
//! Hardware, navigation, and the confirmation dialog are collaborators
//! behind traits; the library contains no UI and no barcode decoding.

pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod history;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use backends::camera::{CameraDevice, CapturedPhoto, DecodedBarcode, Facing};
pub use config::Config;
pub use errors::{SessionError, SessionResult};
pub use history::HistoryStore;
pub use session::{
    ConfirmationPrompt, ScreenNavigator, SessionController, SessionPhase, SessionState,
    SystemUrlOpener, UrlOpener,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
