use plstar_detector::lines::{Segment, SegmentId};
use plstar_detector::{BinaryMask, SpokeDirection};

/// Paints a stroke from `p0` to `p1` with round caps of the given radius.
pub fn draw_line(mask: &mut BinaryMask, p0: [f32; 2], p1: [f32; 2], radius: f32) {
    let (dx, dy) = (p1[0] - p0[0], p1[1] - p0[1]);
    let len = (dx * dx + dy * dy).sqrt();
    let steps = (len * 2.0).ceil().max(1.0) as usize;
    let r = radius.ceil() as isize;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let (cx, cy) = (p0[0] + dx * t, p0[1] + dy * t);
        for oy in -r..=r {
            for ox in -r..=r {
                let x = (cx + ox as f32).round();
                let y = (cy + oy as f32).round();
                if (x - cx).powi(2) + (y - cy).powi(2) > radius * radius + 1e-3 {
                    continue;
                }
                if x >= 0.0 && y >= 0.0 && (x as usize) < mask.w() && (y as usize) < mask.h() {
                    mask.set(x as usize, y as usize, true);
                }
            }
        }
    }
}

pub fn spoke_tip(center: [f32; 2], dir: SpokeDirection, length: f32) -> [f32; 2] {
    let u = dir.unit();
    [center[0] + u[0] * length, center[1] + u[1] * length]
}

/// Paints the listed spokes of a star.
pub fn draw_star(
    mask: &mut BinaryMask,
    center: [f32; 2],
    length: f32,
    stroke_radius: f32,
    dirs: &[SpokeDirection],
) {
    for &dir in dirs {
        draw_line(mask, center, spoke_tip(center, dir, length), stroke_radius);
    }
}

/// Mask with a single full six-spoke star.
pub fn star_mask(w: usize, h: usize, center: [f32; 2], length: f32, stroke_radius: f32) -> BinaryMask {
    let mut mask = BinaryMask::zeros(w, h);
    draw_star(&mut mask, center, length, stroke_radius, &SpokeDirection::ALL);
    mask
}

/// One segment per listed spoke, running from the center to the tip.
pub fn star_segments(center: [f32; 2], length: f32, dirs: &[SpokeDirection]) -> Vec<Segment> {
    dirs.iter()
        .enumerate()
        .map(|(i, &dir)| Segment::new(SegmentId(i as u32), center, spoke_tip(center, dir, length)))
        .collect()
}

/// Converts a mask into an 8-bit 0/255 rendering.
pub fn to_gray(mask: &BinaryMask) -> Vec<u8> {
    mask.as_bytes().iter().map(|&v| if v != 0 { 255 } else { 0 }).collect()
}

pub fn dist(a: [f32; 2], b: [f32; 2]) -> f32 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}
