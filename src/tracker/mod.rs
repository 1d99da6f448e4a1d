//! Per-frame hand/boundary proximity pipeline.
//!
//! Overview
//! - Optionally mirrors the frame so on-screen motion matches the user's.
//! - Places the virtual rectangle for the current frame size.
//! - Segments the hand, preferring the blob nearest to the rectangle.
//! - Measures from the fingertip (falling back to the blob centre) to the
//!   rectangle and classifies the distance into a [`ProximityState`].
//!
//! Modules
//! - [`params`] – [`TrackerParams`] grouping every tunable.
//! - `pipeline` – the [`ProximityTracker`] implementation.
//!
//! [`ProximityState`]: crate::ProximityState

pub mod params;
mod pipeline;

pub use params::TrackerParams;
pub use pipeline::ProximityTracker;
