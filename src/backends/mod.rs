// SPDX-License-Identifier: MPL-2.0

//! Device backend abstractions
//!
//! The session controller never talks to hardware directly. Everything
//! device-shaped sits behind the traits in this module so the controller
//! can be driven by a real camera pipeline or by test doubles.

pub mod camera;

pub use camera::{CameraDevice, CapturedPhoto, DecodedBarcode, Facing};
