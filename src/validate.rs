//! Star validation: match classified segments to the six spoke directions.
use crate::classify::SpokeDirection;
use crate::lines::{Segment, SegmentId};
use log::debug;
use serde::Serialize;

/// The segment chosen to support one spoke direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpokeSupport {
    pub direction: SpokeDirection,
    pub segment: SegmentId,
    /// Point-to-segment distance from the center.
    pub distance: f32,
}

/// A validated star center.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub x: f32,
    pub y: f32,
    /// At most one support per direction, in direction order.
    pub supports: Vec<SpokeSupport>,
    pub supported_directions: usize,
}

impl Center {
    pub fn support(&self, direction: SpokeDirection) -> Option<&SpokeSupport> {
        self.supports.iter().find(|s| s.direction == direction)
    }
}

/// Best supporting segment for `direction` at `center`.
///
/// A segment qualifies when its class matches the direction's line class, it
/// passes within `distance_tolerance` of the center, and it extends away from
/// the center along the direction by more than
/// `min(distance_tolerance, length / 4)`. The closest qualifying segment wins;
/// ties keep the earlier segment.
pub fn find_spoke_support(
    center: [f32; 2],
    direction: SpokeDirection,
    segments: &[Segment],
    distance_tolerance: f32,
) -> Option<SpokeSupport> {
    let class = direction.line_class();
    let dir = direction.unit();
    let mut best: Option<SpokeSupport> = None;
    for seg in segments.iter().filter(|s| s.class == Some(class)) {
        let distance = seg.distance_to_point(center);
        if distance > distance_tolerance {
            continue;
        }
        let min_reach = distance_tolerance.min(0.25 * seg.length);
        if seg.reach_along(center, dir) <= min_reach {
            continue;
        }
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(SpokeSupport {
                direction,
                segment: seg.id,
                distance,
            });
        }
    }
    best
}

/// Per-direction supports for a candidate center, valid or not.
pub fn evaluate_center(center: [f32; 2], segments: &[Segment], distance_tolerance: f32) -> Center {
    let supports: Vec<SpokeSupport> = SpokeDirection::ALL
        .iter()
        .filter_map(|&dir| find_spoke_support(center, dir, segments, distance_tolerance))
        .collect();
    Center {
        x: center[0],
        y: center[1],
        supported_directions: supports.len(),
        supports,
    }
}

/// `Some(center)` when at least `min_supported_directions` directions are
/// supported; `None` otherwise.
pub fn validate_center(
    center: [f32; 2],
    segments: &[Segment],
    distance_tolerance: f32,
    min_supported_directions: usize,
) -> Option<Center> {
    let evaluated = evaluate_center(center, segments, distance_tolerance);
    let valid = evaluated.supported_directions >= min_supported_directions;
    debug!(
        "StarValidator::check center=({:.1},{:.1}) supported={} required={} valid={}",
        center[0], center[1], evaluated.supported_directions, min_supported_directions, valid
    );
    valid.then_some(evaluated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_segments;

    fn spokes(center: [f32; 2], len: f32, dirs: &[SpokeDirection]) -> Vec<Segment> {
        let segs = dirs
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let u = d.unit();
                let tip = [center[0] + u[0] * len, center[1] + u[1] * len];
                Segment::new(SegmentId(i as u32), center, tip)
            })
            .collect();
        classify_segments(segs, 10.0)
    }

    #[test]
    fn full_star_supports_all_directions() {
        let segs = spokes([50.0, 50.0], 40.0, &SpokeDirection::ALL);
        let center = validate_center([51.0, 49.0], &segs, 20.0, 4).unwrap();
        assert_eq!(center.supported_directions, 6);
        for (i, dir) in SpokeDirection::ALL.iter().enumerate() {
            assert_eq!(center.support(*dir).unwrap().segment, SegmentId(i as u32));
        }
    }

    #[test]
    fn opposite_spokes_are_checked_independently() {
        let segs = spokes([50.0, 50.0], 40.0, &[SpokeDirection::Deg0]);
        let center = evaluate_center([50.0, 50.0], &segs, 20.0);
        assert!(center.support(SpokeDirection::Deg0).is_some());
        assert!(center.support(SpokeDirection::Deg180).is_none());
    }

    #[test]
    fn through_line_supports_both_opposite_directions() {
        let seg = Segment::new(SegmentId(0), [10.0, 50.0], [90.0, 50.0]);
        let segs = classify_segments(vec![seg], 10.0);
        let center = evaluate_center([50.0, 50.0], &segs, 20.0);
        assert!(center.support(SpokeDirection::Deg0).is_some());
        assert!(center.support(SpokeDirection::Deg180).is_some());
        assert_eq!(center.supported_directions, 2);
    }

    #[test]
    fn boundary_at_four_directions() {
        use SpokeDirection::*;
        let four = spokes([60.0, 60.0], 40.0, &[Deg0, Deg60, Deg180, Deg240]);
        assert!(validate_center([60.0, 60.0], &four, 20.0, 4).is_some());
        let three = spokes([60.0, 60.0], 40.0, &[Deg0, Deg60, Deg180]);
        assert!(validate_center([60.0, 60.0], &three, 20.0, 4).is_none());
    }

    #[test]
    fn far_segments_do_not_qualify() {
        let segs = spokes([50.0, 50.0], 40.0, &SpokeDirection::ALL);
        assert_eq!(evaluate_center([50.0, 90.0], &segs, 5.0).supported_directions, 0);
    }

    #[test]
    fn closest_segment_wins() {
        let near = Segment::new(SegmentId(0), [52.0, 53.0], [100.0, 53.0]);
        let nearer = Segment::new(SegmentId(1), [51.0, 51.0], [100.0, 51.0]);
        let segs = classify_segments(vec![near, nearer], 10.0);
        let s = find_spoke_support([50.0, 50.0], SpokeDirection::Deg0, &segs, 20.0).unwrap();
        assert_eq!(s.segment, SegmentId(1));
        assert!((s.distance - 2f32.sqrt()).abs() < 1e-4);
    }

    #[test]
    fn unclassified_segments_are_ignored() {
        let seg = Segment::new(SegmentId(0), [50.0, 50.0], [80.0, 80.0]);
        let segs = classify_segments(vec![seg], 10.0);
        assert!(segs[0].class.is_none());
        assert_eq!(evaluate_center([50.0, 50.0], &segs, 20.0).supported_directions, 0);
    }
}
