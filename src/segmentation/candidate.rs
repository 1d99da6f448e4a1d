//! Candidate blobs and the score used to pick a single winner.
use crate::contours::Contour;
use crate::geometry::EnclosingCircle;
use nalgebra::Point2;
use serde::Serialize;
use std::cmp::Ordering;

/// How candidates are ranked for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreKind {
    /// No target rectangle: the largest blob wins.
    LargestArea,
    /// Target rectangle given: the blob whose centre is nearest to it wins.
    NearestToTarget,
}

/// Selection score where lower is always better.
///
/// Both ranking modes map onto the same ordering: area is negated so that
/// "larger area" and "smaller distance" are both "smaller score".
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CandidateScore(f64);

impl CandidateScore {
    pub fn from_area(area: f64) -> Self {
        Self(-area)
    }

    pub fn from_distance(distance: f64) -> Self {
        Self(distance)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Strictly better than `other`; equal scores keep the incumbent.
    pub fn beats(self, other: Self) -> bool {
        self < other
    }
}

impl PartialEq for CandidateScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CandidateScore {}

impl PartialOrd for CandidateScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CandidateScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A contour that passed the area and radius filters.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub contour: Contour,
    /// Area enclosed by the contour (px²).
    pub area: f64,
    pub circle: EnclosingCircle,
    /// Enclosing-circle centre truncated to whole pixels.
    pub center: Point2<i32>,
    /// Enclosing-circle radius truncated to whole pixels.
    pub radius: i32,
    /// Topmost contour point, leftmost on ties.
    pub fingertip: Point2<i32>,
    pub score: CandidateScore,
}

impl Candidate {
    pub fn summary(&self) -> CandidateSummary {
        CandidateSummary {
            center: [self.center.x, self.center.y],
            radius: self.circle.radius,
            area: self.area,
            pixels: self.contour.pixel_count,
            score: self.score.value(),
        }
    }
}

/// Serializable digest of one candidate for diagnostics.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub center: [i32; 2],
    pub radius: f64,
    pub area: f64,
    /// Mask pixels in the region, holes excluded.
    pub pixels: usize,
    pub score: f64,
}
