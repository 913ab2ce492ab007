//! Sobel image gradients with border clamping.
//!
//! Produces per-pixel `gx`, `gy` and the Euclidean magnitude. Orientation is
//! not cached; NMS derives the comparison direction from the signs and ratio
//! of `gx` and `gy`.
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

#[derive(Clone, Debug)]
pub struct Grad {
    pub gx: ImageF32,
    pub gy: ImageF32,
    pub mag: ImageF32,
}

pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let (w, h) = (l.w, l.h);
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let rows = [
            l.row(y.saturating_sub(1)),
            l.row(y),
            l.row((y + 1).min(h - 1)),
        ];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let cols = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut sx = 0.0;
            let mut sy = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                for (kx, &cx) in cols.iter().enumerate() {
                    let v = row[cx];
                    sx += v * SOBEL_X[ky][kx];
                    sy += v * SOBEL_Y[ky][kx];
                }
            }
            out_gx[x] = sx;
            out_gy[x] = sy;
            out_mag[x] = (sx * sx + sy * sy).sqrt();
        }
    }

    Grad { gx, gy, mag }
}
