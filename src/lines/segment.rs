use crate::angle::orientation_deg;
use crate::classify::LineClass;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Identifier of a segment within one detection run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u32);

/// Straight segment produced by the line extractor.
///
/// `angle_deg` is the undirected orientation in `[0, 180)`; `class` is filled
/// by the angle classifier and stays `None` for noise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: SegmentId,
    pub p0: [f32; 2],
    pub p1: [f32; 2],
    pub angle_deg: f32,
    pub length: f32,
    pub class: Option<LineClass>,
}

impl Segment {
    pub fn new(id: SegmentId, p0: [f32; 2], p1: [f32; 2]) -> Self {
        let dx = p1[0] - p0[0];
        let dy = p1[1] - p0[1];
        let length = (dx * dx + dy * dy).sqrt();
        let angle_deg = if length > 0.0 {
            orientation_deg(dx, dy)
        } else {
            0.0
        };
        Self {
            id,
            p0,
            p1,
            angle_deg,
            length,
            class: None,
        }
    }

    pub fn with_class(mut self, class: Option<LineClass>) -> Self {
        self.class = class;
        self
    }

    /// Line representation `ax + by + c = 0` with `sqrt(a² + b²) = 1`;
    /// `None` for a zero-length segment.
    pub fn line(&self) -> Option<Vector3<f32>> {
        let a = self.p1[1] - self.p0[1];
        let b = self.p0[0] - self.p1[0];
        let c = self.p1[0] * self.p0[1] - self.p0[0] * self.p1[1];
        let norm = (a * a + b * b).sqrt();
        (norm > 0.0).then(|| Vector3::new(a / norm, b / norm, c / norm))
    }

    /// Euclidean distance from `p` to the closest point of the segment.
    ///
    /// The projection of `p` onto the supporting line is clamped to the
    /// segment, so beyond either end this is the distance to that endpoint.
    pub fn distance_to_point(&self, p: [f32; 2]) -> f32 {
        let ax = p[0] - self.p0[0];
        let ay = p[1] - self.p0[1];
        let dx = self.p1[0] - self.p0[0];
        let dy = self.p1[1] - self.p0[1];
        let len_sq = dx * dx + dy * dy;
        if len_sq <= 0.0 {
            return (ax * ax + ay * ay).sqrt();
        }
        let t = ((ax * dx + ay * dy) / len_sq).clamp(0.0, 1.0);
        let ex = ax - t * dx;
        let ey = ay - t * dy;
        (ex * ex + ey * ey).sqrt()
    }

    /// Largest signed extent of the segment along `dir` measured from `origin`.
    pub fn reach_along(&self, origin: [f32; 2], dir: [f32; 2]) -> f32 {
        let s0 = (self.p0[0] - origin[0]) * dir[0] + (self.p0[1] - origin[1]) * dir[1];
        let s1 = (self.p1[0] - origin[0]) * dir[0] + (self.p1[1] - origin[1]) * dir[1];
        s0.max(s1)
    }
}
