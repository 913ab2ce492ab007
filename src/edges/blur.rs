//! Separable Gaussian smoothing with replicated borders.
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Normalised 5-tap Gaussian `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

pub fn gaussian_blur(src: &ImageF32, taps: &[f32]) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    if w == 0 || h == 0 || taps.is_empty() {
        return src.clone();
    }
    let radius = (taps.len() / 2) as isize;

    let mut horiz = ImageF32::new(w, h);
    for y in 0..h {
        let row = src.row(y);
        let out = horiz.row_mut(y);
        for (x, o) in out.iter_mut().enumerate() {
            let mut acc = 0.0;
            for (k, &t) in taps.iter().enumerate() {
                let xs = (x as isize + k as isize - radius).clamp(0, w as isize - 1) as usize;
                acc += t * row[xs];
            }
            *o = acc;
        }
    }

    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &t) in taps.iter().enumerate() {
                let ys = (y as isize + k as isize - radius).clamp(0, h as isize - 1) as usize;
                acc += t * horiz.get(x, ys);
            }
            out.set(x, y, acc);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_image_is_unchanged() {
        let mut img = ImageF32::new(7, 5);
        img.data.iter_mut().for_each(|v| *v = 0.4);
        let out = gaussian_blur(&img, &GAUSSIAN_5TAP);
        assert!(out.data.iter().all(|v| (v - 0.4).abs() < 1e-6));
    }

    #[test]
    fn impulse_spreads_symmetrically() {
        let mut img = ImageF32::new(9, 9);
        img.set(4, 4, 1.0);
        let out = gaussian_blur(&img, &GAUSSIAN_5TAP);
        assert!((out.get(4, 4) - 0.375 * 0.375).abs() < 1e-6);
        assert!((out.get(3, 4) - out.get(5, 4)).abs() < 1e-7);
        assert!((out.get(4, 2) - 0.0625 * 0.375).abs() < 1e-6);
    }
}
