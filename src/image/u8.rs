use crate::error::InputError;

/// Borrowed 8-bit raster with an explicit row stride.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Checks that the declared shape matches the backing buffer.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.w == 0 || self.h == 0 {
            return Err(InputError::EmptyDimensions {
                width: self.w,
                height: self.h,
            });
        }
        if self.stride < self.w {
            return Err(InputError::StrideTooSmall {
                stride: self.stride,
                width: self.w,
            });
        }
        let expected = (self.h - 1) * self.stride + self.w;
        if self.data.len() < expected {
            return Err(InputError::LengthMismatch {
                expected,
                found: self.data.len(),
            });
        }
        Ok(())
    }

    /// Largest value in the view.
    pub fn max_value(&self) -> u8 {
        (0..self.h)
            .filter_map(|y| {
                let start = y * self.stride;
                self.data[start..start + self.w].iter().copied().max()
            })
            .max()
            .unwrap_or(0)
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
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
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_short_buffer() {
        let data = vec![0u8; 10];
        let view = ImageU8 {
            w: 4,
            h: 3,
            stride: 4,
            data: &data,
        };
        assert_eq!(
            view.validate(),
            Err(InputError::LengthMismatch {
                expected: 12,
                found: 10
            })
        );
    }

    #[test]
    fn validate_accepts_padded_rows() {
        let data = vec![0u8; 2 * 6 + 4];
        let view = ImageU8 {
            w: 4,
            h: 3,
            stride: 6,
            data: &data,
        };
        assert!(view.validate().is_ok());
    }

    #[test]
    fn max_value_ignores_padding() {
        let mut data = vec![0u8; 12];
        data[4] = 200; // padding column of row 0
        data[7] = 9;
        let view = ImageU8 {
            w: 3,
            h: 2,
            stride: 6,
            data: &data,
        };
        assert_eq!(view.max_value(), 9);
    }
}
