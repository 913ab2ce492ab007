//! Pairwise intersections between segments of different line classes.
//!
//! Lines are kept in homogeneous form `(a, b, c)` with `ax + by + c = 0`.
//! The intersection of two lines is their cross product; its third component
//! is the 2×2 determinant `a1·b2 − a2·b1`. Pairs whose determinant is below
//! [`PARALLEL_EPS`] are treated as parallel and produce nothing.
use crate::classify::LineClass;
use crate::lines::{Segment, SegmentId};
use log::debug;
use nalgebra::Vector3;
use serde::Serialize;

/// Determinant magnitude below which two normalized lines count as parallel.
pub const PARALLEL_EPS: f32 = 1e-6;

/// Unordered pair of distinct line classes, stored smaller first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClassPair(LineClass, LineClass);

impl ClassPair {
    /// `None` when both classes are the same.
    pub fn new(a: LineClass, b: LineClass) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self(a, b)),
            std::cmp::Ordering::Greater => Some(Self(b, a)),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn classes(self) -> [LineClass; 2] {
        [self.0, self.1]
    }
}

/// Implicit line of a classified segment.
#[derive(Clone, Copy, Debug)]
pub struct LineEquation {
    /// `(a, b, c)` with `a² + b² = 1`.
    pub coeffs: Vector3<f32>,
    pub class: LineClass,
    pub segment: SegmentId,
}

impl LineEquation {
    /// `None` for unclassified or zero-length segments.
    pub fn from_segment(seg: &Segment) -> Option<Self> {
        let class = seg.class?;
        let coeffs = seg.line()?;
        Some(Self {
            coeffs,
            class,
            segment: seg.id,
        })
    }

    /// Signed distance of `(x, y)` from the line.
    #[inline]
    pub fn residual(&self, x: f32, y: f32) -> f32 {
        self.coeffs[0] * x + self.coeffs[1] * y + self.coeffs[2]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionPoint {
    pub x: f32,
    pub y: f32,
    pub classes: ClassPair,
    pub segments: [SegmentId; 2],
}

impl IntersectionPoint {
    #[inline]
    pub fn position(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

/// Intersection of two lines of different classes.
///
/// Returns `None` for same-class or near-parallel pairs.
pub fn intersect(l1: &LineEquation, l2: &LineEquation) -> Option<IntersectionPoint> {
    let classes = ClassPair::new(l1.class, l2.class)?;
    let p = l1.coeffs.cross(&l2.coeffs);
    let det = p[2];
    if det.abs() < PARALLEL_EPS {
        return None;
    }
    Some(IntersectionPoint {
        x: p[0] / det,
        y: p[1] / det,
        classes,
        segments: [l1.segment, l2.segment],
    })
}

/// All intersections between classified segments of different classes.
///
/// Points are emitted in segment order (`i < j`), so the result is
/// deterministic for a fixed input order.
pub fn compute_intersections(segments: &[Segment]) -> Vec<IntersectionPoint> {
    let lines: Vec<LineEquation> = segments.iter().filter_map(LineEquation::from_segment).collect();
    let mut points = Vec::new();
    let mut parallel = 0usize;
    for (i, l1) in lines.iter().enumerate() {
        for l2 in &lines[i + 1..] {
            if l1.class == l2.class {
                continue;
            }
            match intersect(l1, l2) {
                Some(p) => points.push(p),
                None => parallel += 1,
            }
        }
    }
    debug!(
        "IntersectionEngine::run lines={} points={} parallel_skipped={}",
        lines.len(),
        points.len(),
        parallel
    );
    points
}
