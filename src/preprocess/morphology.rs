//! Binary morphology with a disk-shaped structuring element.
//!
//! Pixels outside the image are neutral: they never light a pixel during
//! dilation and never clear one during erosion, so closing does not eat into
//! shapes touching the border.
use crate::mask::BinaryMask;

/// Offsets `(dx, dy)` of a disk of radius `r` (`dx² + dy² <= r²`).
///
/// Radius 1 yields the 3×3 cross, radius 0 the single centre pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuringElement {
    offsets: Vec<(isize, isize)>,
}

impl StructuringElement {
    pub fn disk(radius: usize) -> Self {
        let r = radius as isize;
        let mut offsets = Vec::new();
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    offsets.push((dx, dy));
                }
            }
        }
        Self { offsets }
    }

    pub fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }
}

pub fn dilate(mask: &BinaryMask, element: &StructuringElement) -> BinaryMask {
    let mut out = BinaryMask::zeros(mask.w(), mask.h());
    for (x, y) in mask.foreground() {
        for &(dx, dy) in element.offsets() {
            let xn = x as isize + dx;
            let yn = y as isize + dy;
            if xn >= 0 && yn >= 0 && (xn as usize) < mask.w() && (yn as usize) < mask.h() {
                out.set(xn as usize, yn as usize, true);
            }
        }
    }
    out
}

pub fn erode(mask: &BinaryMask, element: &StructuringElement) -> BinaryMask {
    let mut out = BinaryMask::zeros(mask.w(), mask.h());
    for (x, y) in mask.foreground() {
        let keep = element.offsets().iter().all(|&(dx, dy)| {
            let xn = x as isize + dx;
            let yn = y as isize + dy;
            let outside =
                xn < 0 || yn < 0 || xn as usize >= mask.w() || yn as usize >= mask.h();
            outside || mask.get(xn as usize, yn as usize)
        });
        if keep {
            out.set(x, y, true);
        }
    }
    out
}

/// Dilation followed by erosion; bridges gaps narrower than the element.
pub fn close(mask: &BinaryMask, element: &StructuringElement) -> BinaryMask {
    erode(&dilate(mask, element), element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_one_is_a_cross() {
        let se = StructuringElement::disk(1);
        assert_eq!(se.offsets().len(), 5);
        assert!(!se.offsets().contains(&(1, 1)));
    }

    #[test]
    fn closing_bridges_single_pixel_gap() {
        let mut mask = BinaryMask::zeros(9, 5);
        for y in 1..=3 {
            for x in 1..8 {
                if x != 4 {
                    mask.set(x, y, true);
                }
            }
        }
        let closed = close(&mask, &StructuringElement::disk(1));
        assert!(closed.get(4, 2));
        assert!(!closed.get(4, 0));
        assert!(!closed.get(4, 4));
    }

    #[test]
    fn closing_keeps_empty_mask_empty() {
        let mask = BinaryMask::zeros(6, 6);
        assert!(close(&mask, &StructuringElement::disk(1)).is_empty());
    }

    #[test]
    fn closing_preserves_border_pixels() {
        let mut mask = BinaryMask::zeros(4, 4);
        for x in 0..4 {
            mask.set(x, 0, true);
        }
        let closed = close(&mask, &StructuringElement::disk(1));
        for x in 0..4 {
            assert!(closed.get(x, 0), "border pixel {x} eroded");
        }
    }
}
