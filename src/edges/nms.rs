//! Non-maximum suppression on gradient magnitude.
//!
//! For each pixel the two neighbours along the gradient direction (quantized
//! to 0°, 45°, 90°, 135°) are compared; the pixel survives only when it is not
//! smaller than either. The output is a thinned magnitude image with
//! suppressed pixels set to zero. The outermost 1-pixel frame is always
//! suppressed.
use super::grad::Grad;
use crate::image::{ImageF32, ImageView};

const TAN_22_5_DEG: f32 = 0.41421356237;

pub fn suppress_non_maxima(grad: &Grad) -> ImageF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag <= 0.0 {
                continue;
            }
            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (n1, n2) = if abs_gy <= abs_gx * TAN_22_5_DEG {
                (mag_row[x - 1], mag_row[x + 1])
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            // A two-pixel plateau keeps only its first pixel.
            if mag > n1 && mag >= n2 {
                out.set(x, y, mag);
            }
        }
    }
    out
}
