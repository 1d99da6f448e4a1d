use super::candidate::{Candidate, CandidateScore, CandidateSummary, ScoreKind};
use super::options::SegmentationParams;
use crate::color::hsv_in_range;
use crate::contours::find_external_contours;
use crate::geometry::{min_enclosing_circle, VirtualRect};
use crate::image::{ImageBgr8, Mask};
use crate::morphology::{dilate, erode};
use log::{debug, trace};
use nalgebra::Point2;
use serde::Serialize;

/// Outcome of one hand detection.
///
/// `center`, `fingertip` and `best` are all `None` (and `radius` is 0) when
/// no contour survives filtering; that is a normal result, not an error.
#[derive(Clone, Debug)]
pub struct HandDetection {
    pub center: Option<Point2<i32>>,
    pub radius: i32,
    pub fingertip: Option<Point2<i32>>,
    /// Cleaned skin mask the candidates were extracted from.
    pub mask: Mask,
    pub best: Option<Candidate>,
    pub stats: SelectionStats,
}

impl HandDetection {
    pub fn found(&self) -> bool {
        self.best.is_some()
    }
}

/// Counters describing how the contours of one mask were filtered.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStats {
    pub score_kind: ScoreKind,
    pub contours_total: usize,
    pub rejected_area: usize,
    pub rejected_radius: usize,
    /// Every surviving candidate, in contour order.
    pub candidates: Vec<CandidateSummary>,
    /// Index into `candidates` of the winner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
}

/// HSV threshold followed by erode/dilate cleanup.
pub fn skin_mask(frame: &ImageBgr8<'_>, params: &SegmentationParams) -> Mask {
    let raw = hsv_in_range(frame, &params.hsv_range());
    let eroded = erode(&raw, params.kernel(), params.erode_iterations);
    dilate(&eroded, params.kernel(), params.dilate_iterations)
}

/// Detect the best skin-coloured blob in a BGR frame.
///
/// With `target` set, the blob nearest to the rectangle wins (so a face of
/// similar size elsewhere loses); without it the largest blob wins.
pub fn detect_hand(
    frame: &ImageBgr8<'_>,
    target: Option<&VirtualRect>,
    params: &SegmentationParams,
) -> HandDetection {
    detect_hand_in_mask(skin_mask(frame, params), target, params)
}

/// Contour extraction, filtering and selection on an already cleaned mask.
pub fn detect_hand_in_mask(
    mask: Mask,
    target: Option<&VirtualRect>,
    params: &SegmentationParams,
) -> HandDetection {
    let contours = find_external_contours(&mask);
    let mut stats = SelectionStats {
        score_kind: if target.is_some() {
            ScoreKind::NearestToTarget
        } else {
            ScoreKind::LargestArea
        },
        contours_total: contours.len(),
        rejected_area: 0,
        rejected_radius: 0,
        candidates: Vec::new(),
        selected: None,
    };

    let mut best: Option<Candidate> = None;
    for contour in contours {
        let area = contour.area();
        if area < params.min_contour_area {
            trace!("contour rejected: area {:.1} < {:.1}", area, params.min_contour_area);
            stats.rejected_area += 1;
            continue;
        }
        let (Some(circle), Some(fingertip)) =
            (min_enclosing_circle(&contour.points), contour.topmost())
        else {
            continue;
        };
        if circle.radius < params.min_radius {
            trace!(
                "contour rejected: radius {:.2} < {:.2}",
                circle.radius,
                params.min_radius
            );
            stats.rejected_radius += 1;
            continue;
        }

        let center = Point2::new(circle.center.x as i32, circle.center.y as i32);
        let score = match target {
            Some(rect) => CandidateScore::from_distance(rect.distance_to(center)),
            None => CandidateScore::from_area(area),
        };
        let candidate = Candidate {
            contour,
            area,
            circle,
            center,
            radius: circle.radius as i32,
            fingertip,
            score,
        };
        stats.candidates.push(candidate.summary());

        let better = best.as_ref().map_or(true, |b| score.beats(b.score));
        if better {
            stats.selected = Some(stats.candidates.len() - 1);
            best = Some(candidate);
        }
    }

    debug!(
        "detect_hand contours={} rejected_area={} rejected_radius={} candidates={} found={}",
        stats.contours_total,
        stats.rejected_area,
        stats.rejected_radius,
        stats.candidates.len(),
        best.is_some()
    );

    HandDetection {
        center: best.as_ref().map(|b| b.center),
        radius: best.as_ref().map_or(0, |b| b.radius),
        fingertip: best.as_ref().map(|b| b.fingertip),
        mask,
        best,
        stats,
    }
}
