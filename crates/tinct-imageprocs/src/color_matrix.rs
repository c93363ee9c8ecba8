/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Perform a color matrix operation
//!
//! A color matrix is a type of operation where the colors of an RGB image are multiplied by
//! an arbitrary 3*3 matrix.
//!
//! The matrix is equivalent to the operation
//! ```text
//! red   = m[0][0]*r + m[0][1]*g + m[0][2]*b
//! green = m[1][0]*r + m[1][1]*g + m[1][2]*b
//! blue  = m[2][0]*r + m[2][1]*g + m[2][2]*b
//!```
//! Results are rounded to the nearest integer and clamped to `0..=255`.
//!
//! ## Examples of color matrix
//!
//! - An identity color matrix that does nothing
//! ```text
//! [[1.0, 0.0, 0.0],
//!  [0.0, 1.0, 0.0],
//!  [0.0, 0.0, 1.0]]
//! ```
//! - The BT.601 greyscale matrix, see [`ColorMatrix::greyscale`]
//!
//! ```text
//! [[0.299, 0.587, 0.114],
//!  [0.299, 0.587, 0.114],
//!  [0.299, 0.587, 0.114]]
//! ```
use tinct_image::errors::ImageErrors;
use tinct_image::image::{Image, MAX_VALUE, NUM_CHANNELS};
use tinct_image::traits::OperationsTrait;

use crate::split::{map_pixels, Split};

/// BT.601 greyscale weights, every output channel gets the luma
pub const GREYSCALE: [[f64; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114]
];

pub const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131]
];

/// A color matrix filter
///
/// # Example
/// ```rust
/// use tinct_image::errors::ImageErrors;
/// use tinct_image::image::Image;
/// use tinct_image::traits::OperationsTrait;
/// use tinct_imageprocs::color_matrix::ColorMatrix;
///
/// fn main() -> Result<(), ImageErrors> {
///     let image = Image::fill([100, 200, 50], 100, 100);
///     // swap red and blue
///     let filter = ColorMatrix::new(
///         [[0.0, 0.0, 1.0],
///          [0.0, 1.0, 0.0],
///          [1.0, 0.0, 0.0]]);
///
///     let swapped = filter.execute(&image)?;
///     assert_eq!(swapped.pixel(0, 0), Some([50, 200, 100]));
///     Ok(())
/// }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ColorMatrix {
    matrix: [[f64; 3]; 3],
    split:  Split
}

impl ColorMatrix {
    /// Create a new color matrix
    #[must_use]
    pub fn new(matrix: [[f64; 3]; 3]) -> ColorMatrix {
        ColorMatrix {
            matrix,
            split: Split::Whole
        }
    }

    /// Greyscale using BT.601 luma weights
    #[must_use]
    pub fn greyscale() -> ColorMatrix {
        ColorMatrix::new(GREYSCALE)
    }

    /// A warm brown tone
    #[must_use]
    pub fn sepia() -> ColorMatrix {
        ColorMatrix::new(SEPIA)
    }

    /// Try to create a new color matrix from a slice
    /// of data, the length of the slice must be 9 otherwise
    /// this function will return None
    #[must_use]
    pub fn try_from_slice(slice: &[f64]) -> Option<ColorMatrix> {
        if slice.len() != 9 {
            return None;
        }
        let mut matrix = [[0_f64; 3]; 3];

        for (row, values) in matrix.iter_mut().zip(slice.chunks_exact(3)) {
            row.copy_from_slice(values);
        }
        Some(ColorMatrix::new(matrix))
    }

    /// Only apply the matrix left of `split`
    #[must_use]
    pub fn with_split(mut self, split: Split) -> ColorMatrix {
        self.split = split;
        self
    }
}

impl OperationsTrait for ColorMatrix {
    fn name(&self) -> &'static str {
        "Color Matrix"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        Ok(map_pixels(image, self.split, |pixel| {
            color_matrix_pixel(&self.matrix, pixel)
        }))
    }
}

#[allow(clippy::many_single_char_names)]
fn color_matrix_pixel(matrix: &[[f64; 3]; 3], pixel: [u16; NUM_CHANNELS]) -> [u16; NUM_CHANNELS] {
    let [r, g, b] = pixel.map(f64::from);

    matrix.map(|row| {
        let sum = row[0] * r + row[1] * g + row[2] * b;
        sum.round().clamp(0.0, f64::from(MAX_VALUE)) as u16
    })
}

#[cfg(test)]
mod tests {
    use tinct_image::image::Image;
    use tinct_image::traits::OperationsTrait;

    use crate::color_matrix::ColorMatrix;
    use crate::split::Split;

    #[test]
    fn greyscale_rows() {
        let rows = [[100, 150, 200], [50, 75, 100]];
        let image = Image::from_fn(3, 2, |row, col| [rows[row][col]; 3]);

        let grey = ColorMatrix::greyscale().execute(&image).unwrap();

        // weights sum to one, grey stays grey
        for (row, col) in image.positions() {
            assert_eq!(grey.pixel(row, col), Some([rows[row][col]; 3]));
        }
    }

    #[test]
    fn greyscale_color_pixel() {
        let image = Image::fill([200, 100, 50], 1, 1);
        let grey = ColorMatrix::greyscale().execute(&image).unwrap();
        // 59.8 + 58.7 + 5.7 = 124.2
        assert_eq!(grey.pixel(0, 0), Some([124, 124, 124]));
    }

    #[test]
    fn sepia_clamps() {
        let image = Image::fill([255, 255, 255], 2, 2);
        let sepia = ColorMatrix::sepia().execute(&image).unwrap();
        // blue row sums to 0.937
        assert_eq!(sepia.pixel(0, 0), Some([255, 255, 239]));
    }

    #[test]
    fn negative_results_clamp_to_zero() {
        let filter = ColorMatrix::new([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let out = filter.execute(&Image::fill([10, 20, 30], 1, 1)).unwrap();
        assert_eq!(out.pixel(0, 0), Some([0, 20, 30]));
    }

    #[test]
    fn split_greyscale() {
        let image = Image::fill([200, 100, 50], 4, 4);
        let grey = ColorMatrix::greyscale()
            .with_split(Split::Percent(50))
            .execute(&image)
            .unwrap();

        assert_eq!(grey.pixel(3, 1), Some([124, 124, 124]));
        assert_eq!(grey.pixel(3, 2), Some([200, 100, 50]));
    }

    #[test]
    fn from_slice_needs_nine_values() {
        assert!(ColorMatrix::try_from_slice(&[1.0; 8]).is_none());
        assert!(ColorMatrix::try_from_slice(&[1.0; 9]).is_some());
    }
}
