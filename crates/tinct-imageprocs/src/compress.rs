/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Lossy Haar wavelet compression
//!
//! Every channel is zero padded to a square whose side is the next power of two,
//! transformed with a 2D [Haar transform](crate::compress::haar), and the smallest
//! `percent` of coefficients (by magnitude, pooled across all three channels) are
//! set to zero before transforming back.
//!
//! The result is an ordinary image of the source dimensions, rounded and clamped to `0..=255`.
//! The more coefficients are dropped the blockier the image gets.
use log::{debug, trace};
use tinct_image::errors::ImageErrors;
use tinct_image::image::{Image, MAX_VALUE};
use tinct_image::traits::OperationsTrait;

use crate::compress::haar::{haar_forward_2d, haar_inverse_2d};

pub mod haar;

/// Compress an image by dropping its smallest wavelet coefficients
///
/// # Example
/// ```
/// use tinct_image::errors::ImageErrors;
/// use tinct_image::image::Image;
/// use tinct_image::traits::OperationsTrait;
/// use tinct_imageprocs::compress::Compress;
///
/// let image = Image::from_fn(30, 20, |row, col| [(row * 8) as u16, (col * 8) as u16, 128]);
/// let compressed = Compress::new(80.0)?.execute(&image)?;
///
/// assert_eq!(compressed.dimensions(), (30, 20));
/// # Ok::<(), ImageErrors>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Compress {
    percent: f64
}

impl Compress {
    /// Create a new compression with `percent` of coefficients to drop
    ///
    /// # Errors
    /// [`ImageErrors::InvalidParameter`] if `percent` isn't in `0..=100`
    pub fn new(percent: f64) -> Result<Compress, ImageErrors> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(ImageErrors::InvalidParameter(format!(
                "Compression percentage should be between 0 and 100, found {}",
                percent
            )));
        }
        Ok(Compress { percent })
    }
}

/// Side of the square matrix an image of `width x height` is padded to
#[must_use]
pub fn padded_size(width: usize, height: usize) -> usize {
    width.max(height).max(1).next_power_of_two()
}

/// Find the magnitude at or below which coefficients are dropped
///
/// All magnitudes are pooled and sorted, the threshold is the one at
/// index `max(0, floor(len * percent / 100) - 1)`.
/// Returns `None` if there are no coefficients
#[must_use]
pub fn threshold(coefficients: &[Vec<f64>], percent: f64) -> Option<f64> {
    let mut magnitudes: Vec<f64> = coefficients
        .iter()
        .flat_map(|channel| channel.iter().map(|x| x.abs()))
        .collect();

    if magnitudes.is_empty() {
        return None;
    }
    let position = (magnitudes.len() as f64 * percent / 100.0).floor() as usize;
    let index = position.saturating_sub(1).min(magnitudes.len() - 1);

    let (_, value, _) = magnitudes.select_nth_unstable_by(index, f64::total_cmp);

    Some(*value)
}

impl OperationsTrait for Compress {
    fn name(&self) -> &'static str {
        "Haar compression"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = image.dimensions();
        let n = padded_size(width, height);

        trace!("Padding {}x{} image to {}x{}", width, height, n, n);

        let mut matrices: Vec<Vec<f64>> = image
            .channels_ref()
            .iter()
            .map(|channel| {
                let mut matrix = vec![0.0; n * n];

                if width > 0 {
                    for (in_row, out_row) in channel
                        .chunks_exact(width)
                        .zip(matrix.chunks_exact_mut(n))
                    {
                        for (out, value) in out_row.iter_mut().zip(in_row) {
                            *out = f64::from(*value);
                        }
                    }
                }
                haar_forward_2d(&mut matrix, n);
                matrix
            })
            .collect();

        if let Some(threshold) = threshold(&matrices, self.percent) {
            debug!("Dropping coefficients with magnitude <= {}", threshold);

            for coefficient in matrices.iter_mut().flatten() {
                if coefficient.abs() <= threshold {
                    *coefficient = 0.0;
                }
            }
        }

        let mut new_image = Image::new(width, height);

        for (matrix, out_channel) in matrices.iter_mut().zip(new_image.channels_mut()) {
            haar_inverse_2d(matrix, n);

            if width == 0 {
                continue;
            }
            for (in_row, out_row) in matrix
                .chunks_exact(n)
                .zip(out_channel.chunks_exact_mut(width))
            {
                for (out, value) in out_row.iter_mut().zip(in_row) {
                    *out = value.round().clamp(0.0, f64::from(MAX_VALUE)) as u16;
                }
            }
        }
        Ok(new_image)
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use tinct_image::errors::ImageErrors;
    use tinct_image::image::Image;
    use tinct_image::traits::OperationsTrait;

    use crate::compress::{padded_size, threshold, Compress};

    fn random_image(width: usize, height: usize) -> Image {
        let mut rand = nanorand::WyRand::new_seed(7);

        Image::from_fn(width, height, |_, _| {
            [
                rand.generate_range(0_u16..=255),
                rand.generate_range(0_u16..=255),
                rand.generate_range(0_u16..=255)
            ]
        })
    }

    #[test]
    fn padded_sizes() {
        assert_eq!(padded_size(0, 0), 1);
        assert_eq!(padded_size(1, 1), 1);
        assert_eq!(padded_size(3, 2), 4);
        assert_eq!(padded_size(4, 4), 4);
        assert_eq!(padded_size(5, 17), 32);
    }

    #[test]
    fn percent_out_of_range() {
        for percent in [-0.1, 100.5, f64::NAN] {
            assert!(matches!(
                Compress::new(percent),
                Err(ImageErrors::InvalidParameter(_))
            ));
        }
        assert!(Compress::new(0.0).is_ok());
        assert!(Compress::new(100.0).is_ok());
    }

    #[test]
    fn threshold_index() {
        let coefficients = vec![vec![-4.0, 1.0, 3.0], vec![2.0, -5.0, 0.5, 6.0]];

        // 7 magnitudes, sorted 0.5 1 2 3 4 5 6
        assert_eq!(threshold(&coefficients, 0.0), Some(0.5));
        assert_eq!(threshold(&coefficients, 10.0), Some(0.5));
        assert_eq!(threshold(&coefficients, 50.0), Some(2.0));
        assert_eq!(threshold(&coefficients, 100.0), Some(6.0));
        assert_eq!(threshold(&[], 50.0), None);
    }

    #[test]
    fn threshold_counts_duplicates() {
        let coefficients = vec![vec![1.0, 1.0, 1.0, 9.0]];
        // floor(4 * 0.75) - 1 = 2
        assert_eq!(threshold(&coefficients, 75.0), Some(1.0));
        // floor(4 * 1.0) - 1 = 3
        assert_eq!(threshold(&coefficients, 100.0), Some(9.0));
    }

    #[test]
    fn zero_percent_keeps_pixels() {
        // padding to 8x8 leaves plenty of zero coefficients, so nothing else is dropped
        let image = random_image(5, 3);
        let compressed = Compress::new(0.0).unwrap().execute(&image).unwrap();

        for (a, b) in compressed
            .channels_ref()
            .iter()
            .flatten()
            .zip(image.channels_ref().iter().flatten())
        {
            assert!(a.abs_diff(*b) <= 1);
        }
    }

    #[test]
    fn zero_percent_keeps_pixels_without_padding() {
        // power of two sides, the threshold is the smallest nonzero magnitude
        let image = random_image(8, 8);
        let compressed = Compress::new(0.0).unwrap().execute(&image).unwrap();

        for (a, b) in compressed
            .channels_ref()
            .iter()
            .flatten()
            .zip(image.channels_ref().iter().flatten())
        {
            assert!(a.abs_diff(*b) <= 1);
        }
    }

    #[test]
    fn hundred_percent_is_flat() {
        let image = random_image(6, 6);
        let compressed = Compress::new(100.0).unwrap().execute(&image).unwrap();

        assert_eq!(compressed.dimensions(), (6, 6));
        assert!(compressed.channels_ref().iter().flatten().all(|x| *x == 0));
    }

    #[test]
    fn flat_images_survive_heavy_compression() {
        let image = Image::fill([100, 150, 200], 4, 4);
        let compressed = Compress::new(90.0).unwrap().execute(&image).unwrap();

        assert_eq!(compressed, image);
    }

    #[test]
    fn compression_is_lossy_but_bounded() {
        let image = random_image(16, 16);

        let mut previous_error = 0.0;

        for percent in [20.0, 50.0, 90.0] {
            let compressed = Compress::new(percent).unwrap().execute(&image).unwrap();

            let error: f64 = compressed
                .channels_ref()
                .iter()
                .flatten()
                .zip(image.channels_ref().iter().flatten())
                .map(|(a, b)| (f64::from(*a) - f64::from(*b)).powi(2))
                .sum();

            assert!(error >= previous_error);
            previous_error = error;
        }
        assert!(previous_error > 0.0);
    }

    #[test]
    fn empty_image() {
        let image = Image::new(0, 0);
        let compressed = Compress::new(50.0).unwrap().execute(&image).unwrap();
        assert_eq!(compressed.dimensions(), (0, 0));
    }
}
