//! Per-frame diagnostics returned by the tracker.
//!
//! [`FrameReport`] is the main entry point: the proximity result plus a
//! [`DetectionTrace`] describing how the frame was processed (stage timings,
//! mask coverage, contour filtering). Everything except the mask buffer is
//! serializable to JSON.

pub mod mask;
pub mod report;
pub mod timing;

pub use mask::MaskStage;
pub use report::{DetectionTrace, FrameReport, InputDescriptor};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
