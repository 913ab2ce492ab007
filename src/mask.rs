//! Binary masks consumed by every pipeline stage.
//!
//! A [`BinaryMask`] stores one byte per pixel holding `0` (background) or `1`
//! (foreground). Raw sources are binarized on construction:
//!
//! - `f32` probability maps: foreground where `v >= threshold`.
//! - `u8` maps whose maximum is `<= 1` are already binary (non-zero is
//!   foreground); other `u8` maps are compared as `v / 255 >= threshold`.
//!
//! Shape mismatches are reported as [`InputError`]; nothing is truncated.
use crate::error::InputError;
use crate::image::{ImageF32, ImageU8, ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryMask {
    w: usize,
    h: usize,
    data: Vec<u8>,
}

impl BinaryMask {
    /// All-background mask of size `w × h`.
    pub fn zeros(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Wrap a row-major byte buffer; any non-zero byte becomes foreground.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Result<Self, InputError> {
        check_dimensions(w, h)?;
        if data.len() != w * h {
            return Err(InputError::LengthMismatch {
                expected: w * h,
                found: data.len(),
            });
        }
        let data = data.into_iter().map(|v| u8::from(v != 0)).collect();
        Ok(Self { w, h, data })
    }

    /// Binarize an 8-bit map.
    pub fn from_u8(view: ImageU8<'_>, threshold: f32) -> Result<Self, InputError> {
        view.validate()?;
        let already_binary = view.max_value() <= 1;
        let cut = threshold * 255.0;
        let mut out = Self::zeros(view.w, view.h);
        for (y, row) in view.rows().enumerate() {
            let dst = out.row_mut(y);
            for (d, &v) in dst.iter_mut().zip(row) {
                let on = if already_binary {
                    v != 0
                } else {
                    v as f32 >= cut
                };
                *d = u8::from(on);
            }
        }
        Ok(out)
    }

    /// Binarize a probability map.
    pub fn from_f32(image: &ImageF32, threshold: f32) -> Result<Self, InputError> {
        check_dimensions(image.w, image.h)?;
        if image.stride < image.w {
            return Err(InputError::StrideTooSmall {
                stride: image.stride,
                width: image.w,
            });
        }
        if image.data.len() < image.stride * (image.h - 1) + image.w {
            return Err(InputError::LengthMismatch {
                expected: image.w * image.h,
                found: image.data.len(),
            });
        }
        let mut out = Self::zeros(image.w, image.h);
        for (y, row) in image.rows().enumerate() {
            let dst = out.row_mut(y);
            for (d, &v) in dst.iter_mut().zip(row) {
                *d = u8::from(v >= threshold);
            }
        }
        Ok(out)
    }

    #[inline]
    pub fn w(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn h(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    /// Foreground test for signed coordinates; out-of-bounds is background.
    #[inline]
    pub fn is_set(&self, x: isize, y: isize) -> bool {
        self.contains(x, y) && self.get(x as usize, y as usize)
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.data[y * self.w + x] = u8::from(on);
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Foreground pixels in raster order.
    pub fn foreground(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(move |(i, _)| (i % self.w, i / self.w))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

fn check_dimensions(w: usize, h: usize) -> Result<(), InputError> {
    if w == 0 || h == 0 {
        Err(InputError::EmptyDimensions {
            width: w,
            height: h,
        })
    } else {
        Ok(())
    }
}

impl ImageView for BinaryMask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.w..(y + 1) * self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for BinaryMask {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        &mut self.data[y * self.w..(y + 1) * self.w]
    }
}
