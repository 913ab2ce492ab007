use crate::lines::Segment;
use crate::reconstruct::Spoke;
use crate::validate::Center;
use serde::Serialize;

/// One detected star: validated center, its supporting segments and the six
/// reconstructed spokes.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    pub center: Center,
    /// Distinct segments referenced by `center.supports`, in id order.
    pub segments: Vec<Segment>,
    /// One spoke per direction, `0°` through `300°`.
    pub spokes: Vec<Spoke>,
    pub supported_directions: usize,
    /// Spokes whose walk ended at the radius limit or image border.
    pub complete_spokes: usize,
    /// Intersection points in the originating cluster.
    pub cluster_size: usize,
}

impl StarRecord {
    pub(crate) fn new(center: Center, all_segments: &[Segment], spokes: Vec<Spoke>, cluster_size: usize) -> Self {
        let mut ids: Vec<_> = center.supports.iter().map(|s| s.segment).collect();
        ids.sort();
        ids.dedup();
        let segments = all_segments
            .iter()
            .filter(|s| ids.binary_search(&s.id).is_ok())
            .cloned()
            .collect();
        Self {
            supported_directions: center.supported_directions,
            complete_spokes: spokes.iter().filter(|s| s.is_complete()).count(),
            center,
            segments,
            spokes,
            cluster_size,
        }
    }

    #[inline]
    pub fn position(&self) -> [f32; 2] {
        [self.center.x, self.center.y]
    }
}
