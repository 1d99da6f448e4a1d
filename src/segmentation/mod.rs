//! Skin-colour hand segmentation.
//!
//! Overview
//! - Converts the BGR frame to HSV and keeps pixels inside an inclusive skin
//!   band, producing a binary mask.
//! - Erodes once to drop speckle, then dilates twice so surviving regions end
//!   up slightly thicker than they started.
//! - Extracts external contours, drops those enclosing less than
//!   `min_contour_area` or whose enclosing circle is smaller than
//!   `min_radius`.
//! - Ranks the rest with a single lower-is-better [`CandidateScore`]: negated
//!   area when no target rectangle is given, distance from the circle centre
//!   to the rectangle otherwise. Equal scores keep the earlier contour
//!   (raster order of the contour's first pixel).
//! - Takes the topmost contour point of the winner as the fingertip
//!   (leftmost on ties). This assumes a finger pointing up in the image.

mod candidate;
mod detect;
mod options;

pub use candidate::{Candidate, CandidateScore, CandidateSummary, ScoreKind};
pub use detect::{
    detect_hand, detect_hand_in_mask, skin_mask, HandDetection, SelectionStats,
};
pub use options::SegmentationParams;
