//! Double-threshold hysteresis over a thinned magnitude image.
//!
//! Pixels at or above `high` seed edges; seeds grow through 8-connected
//! pixels at or above `low`.
use crate::image::ImageF32;
use crate::mask::BinaryMask;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub fn hysteresis(thin: &ImageF32, low: f32, high: f32) -> BinaryMask {
    let (w, h) = (thin.w, thin.h);
    let mut out = BinaryMask::zeros(w, h);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if thin.get(x, y) >= high && !out.get(x, y) {
                out.set(x, y, true);
                stack.push((x, y));
            }
        }
    }

    while let Some((x, y)) = stack.pop() {
        for (dx, dy) in NEIGH_OFFSETS {
            let xn = x as isize + dx;
            let yn = y as isize + dy;
            if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                continue;
            }
            let (xn, yn) = (xn as usize, yn as usize);
            if out.get(xn, yn) {
                continue;
            }
            let v = thin.get(xn, yn);
            if v > 0.0 && v >= low {
                out.set(xn, yn, true);
                stack.push((xn, yn));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_pixels_need_a_strong_neighbour() {
        let mut thin = ImageF32::new(8, 3);
        thin.set(1, 1, 0.9);
        thin.set(2, 1, 0.3);
        thin.set(3, 1, 0.3);
        thin.set(6, 1, 0.3);
        let edges = hysteresis(&thin, 0.2, 0.6);
        assert!(edges.get(1, 1));
        assert!(edges.get(2, 1));
        assert!(edges.get(3, 1));
        assert!(!edges.get(6, 1));
    }
}
