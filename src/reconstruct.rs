//! Gap-tolerant ray walking from a validated center.
use crate::classify::SpokeDirection;
use crate::mask::BinaryMask;
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayOptions {
    /// Longest run of background samples a walk may cross.
    pub gap_tolerance: u32,
    /// Number of samples taken along each ray.
    pub max_radius: u32,
}

impl Default for RayOptions {
    fn default() -> Self {
        Self {
            gap_tolerance: 5,
            max_radius: 300,
        }
    }
}

/// Why a ray walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpokeEnd {
    Gap,
    Boundary,
    MaxRadius,
}

/// Pixels traced along one spoke direction, center outward.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spoke {
    pub direction: SpokeDirection,
    pub pixels: Vec<[u32; 2]>,
    pub end: SpokeEnd,
    /// Distance from the center to the farthest traced pixel.
    pub length_px: f32,
    pub pixel_count: usize,
}

impl Spoke {
    /// The walk ran out of radius or image rather than hitting a gap.
    pub fn is_complete(&self) -> bool {
        self.end != SpokeEnd::Gap
    }
}

/// Walks from `center` along `direction` over `mask`.
///
/// Samples at radius `0, 1, …, max_radius − 1` are rounded to the nearest
/// pixel; a sample that rounds to the previous pixel is skipped. Lit pixels
/// are appended and reset the gap counter. The walk stops once the counter
/// exceeds `gap_tolerance` or a sample leaves the mask.
pub fn trace_spoke(mask: &BinaryMask, center: [f32; 2], direction: SpokeDirection, options: &RayOptions) -> Spoke {
    let [ux, uy] = direction.unit();
    let mut pixels: Vec<[u32; 2]> = Vec::new();
    let mut prev: Option<(isize, isize)> = None;
    let mut gap = 0u32;
    let mut end = SpokeEnd::MaxRadius;
    for r in 0..options.max_radius {
        let x = (center[0] + r as f32 * ux).round() as isize;
        let y = (center[1] + r as f32 * uy).round() as isize;
        if prev == Some((x, y)) {
            continue;
        }
        prev = Some((x, y));
        if x < 0 || y < 0 || x as usize >= mask.w() || y as usize >= mask.h() {
            end = SpokeEnd::Boundary;
            break;
        }
        if mask.get(x as usize, y as usize) {
            pixels.push([x as u32, y as u32]);
            gap = 0;
        } else {
            gap += 1;
            if gap > options.gap_tolerance {
                end = SpokeEnd::Gap;
                break;
            }
        }
    }
    let length_px = pixels
        .iter()
        .map(|p| ((p[0] as f32 - center[0]).powi(2) + (p[1] as f32 - center[1]).powi(2)).sqrt())
        .fold(0.0f32, f32::max);
    Spoke {
        direction,
        pixel_count: pixels.len(),
        pixels,
        end,
        length_px,
    }
}

/// All six spokes in direction order.
pub fn reconstruct_spokes(mask: &BinaryMask, center: [f32; 2], options: &RayOptions) -> Vec<Spoke> {
    let spokes: Vec<Spoke> = SpokeDirection::ALL
        .iter()
        .map(|&dir| trace_spoke(mask, center, dir, options))
        .collect();
    debug!(
        "RadialReconstructor::run center=({:.1},{:.1}) lengths=[{}]",
        center[0],
        center[1],
        spokes
            .iter()
            .map(|s| format!("{:.0}", s.length_px))
            .collect::<Vec<_>>()
            .join(",")
    );
    spokes
}
