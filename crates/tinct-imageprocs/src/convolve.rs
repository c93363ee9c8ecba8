/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! 2D convolution on images
//!
//! This filter convolves every channel with an odd sized square kernel.
//! Pixels outside the image are treated as zero.
//!
//! The accumulator is an integer, every term is added in `f64`
//! and the running sum truncated toward zero before the next term is added.
//! The final sum is clamped to `0..=255`.
use log::trace;
use tinct_image::errors::ImageErrors;
use tinct_image::image::{Image, MAX_VALUE};
use tinct_image::traits::OperationsTrait;

use crate::split::Split;

/// An odd sized square matrix of weights
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size:    usize,
    weights: Vec<f64>
}

impl Kernel {
    /// Create a kernel from `size*size` row-major weights
    ///
    /// # Errors
    /// [`ImageErrors::InvalidParameter`] if `size` is even or zero or the
    /// number of weights isn't `size*size`
    pub fn new(size: usize, weights: Vec<f64>) -> Result<Kernel, ImageErrors> {
        if size % 2 == 0 {
            return Err(ImageErrors::InvalidParameter(format!(
                "Kernel size should be odd, found {}",
                size
            )));
        }
        if weights.len() != size * size {
            return Err(ImageErrors::InvalidParameter(format!(
                "A {0}x{0} kernel needs {1} weights, found {2}",
                size,
                size * size,
                weights.len()
            )));
        }
        Ok(Kernel { size, weights })
    }

    /// Create a kernel from its rows
    ///
    /// # Errors
    /// If the rows don't form an odd sized square
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Kernel, ImageErrors> {
        let size = rows.len();

        if rows.iter().any(|row| row.as_ref().len() != size) {
            return Err(ImageErrors::InvalidParameter(
                "Kernel rows should all be as long as the number of rows".to_string()
            ));
        }
        let weights = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();

        Kernel::new(size, weights)
    }

    /// 3x3 gaussian blur
    ///
    /// ```text
    /// 1/16 1/8 1/16
    /// 1/8  1/4 1/8
    /// 1/16 1/8 1/16
    /// ```
    #[must_use]
    pub fn gaussian_blur() -> Kernel {
        let weights = [1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0]
            .iter()
            .map(|x| x / 16.0)
            .collect();

        Kernel { size: 3, weights }
    }

    /// 5x5 sharpen
    ///
    /// ```text
    /// -1/8 -1/8 -1/8 -1/8 -1/8
    /// -1/8  1/4  1/4  1/4 -1/8
    /// -1/8  1/4   1   1/4 -1/8
    /// -1/8  1/4  1/4  1/4 -1/8
    /// -1/8 -1/8 -1/8 -1/8 -1/8
    /// ```
    #[must_use]
    pub fn sharpen() -> Kernel {
        let weights = (0..25)
            .map(|pos| {
                let (row, col) = (pos / 5, pos % 5);

                if row == 2 && col == 2 {
                    1.0
                } else if row == 0 || row == 4 || col == 0 || col == 4 {
                    -0.125
                } else {
                    0.25
                }
            })
            .collect();

        Kernel { size: 5, weights }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Kernel weights, row by row
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    fn radius(&self) -> usize {
        self.size / 2
    }
}

/// Convolve an image
///
/// # Example
/// - Blur the left half of an image
///
/// ```
/// use tinct_image::errors::ImageErrors;
/// use tinct_image::image::Image;
/// use tinct_image::traits::OperationsTrait;
/// use tinct_imageprocs::convolve::{Convolve, Kernel};
/// use tinct_imageprocs::split::Split;
///
/// let image = Image::from_fn(100, 100, |row, col| [(row + col) as u16, 0, 0]);
/// let blurred = Convolve::new(Kernel::gaussian_blur())
///     .with_split(Split::Percent(50))
///     .execute(&image)?;
///
/// assert_eq!(blurred.pixel(10, 70), image.pixel(10, 70));
/// # Ok::<(), ImageErrors>(())
/// ```
#[derive(Clone, Debug)]
pub struct Convolve {
    kernel: Kernel,
    split:  Split
}

impl Convolve {
    #[must_use]
    pub fn new(kernel: Kernel) -> Convolve {
        Convolve {
            kernel,
            split: Split::Whole
        }
    }

    /// Only convolve the part of the image left of `split`
    #[must_use]
    pub fn with_split(mut self, split: Split) -> Convolve {
        self.split = split;
        self
    }
}

impl OperationsTrait for Convolve {
    fn name(&self) -> &'static str {
        "2D convolution"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = image.dimensions();
        let split_column = self.split.split_column(width);

        trace!(
            "Convolving with a {0}x{0} kernel up to column {1}",
            self.kernel.size(),
            split_column.min(width)
        );

        let mut new_image = image.clone();

        for (in_channel, out_channel) in image
            .channels_ref()
            .iter()
            .zip(new_image.channels_mut().iter_mut())
        {
            convolve_channel(
                in_channel,
                out_channel,
                width,
                height,
                &self.kernel,
                split_column
            );
        }
        Ok(new_image)
    }
}

/// Convolve a single channel, writing columns before `split_column` into `out_channel`
///
/// Columns at or after `split_column` in `out_channel` are left alone
pub fn convolve_channel(
    in_channel: &[u16], out_channel: &mut [u16], width: usize, height: usize, kernel: &Kernel,
    split_column: usize
) {
    let radius = kernel.radius() as isize;
    let size = kernel.size();
    let columns = split_column.min(width);

    for row in 0..height {
        for col in 0..columns {
            let mut acc: i32 = 0;

            for ky in -radius..=radius {
                let y = row as isize + ky;

                if y < 0 || y >= height as isize {
                    continue;
                }
                let kernel_row = &kernel.weights[(ky + radius) as usize * size..][..size];
                let in_row = &in_channel[y as usize * width..][..width];

                for kx in -radius..=radius {
                    let x = col as isize + kx;

                    if x < 0 || x >= width as isize {
                        continue;
                    }
                    let weight = kernel_row[(kx + radius) as usize];
                    let term = weight * f64::from(in_row[x as usize]);

                    acc = (f64::from(acc) + term) as i32;
                }
            }
            out_channel[row * width + col] = acc.clamp(0, i32::from(MAX_VALUE)) as u16;
        }
    }
}
