/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Levels adjustment
//!
//! A piecewise linear tone curve through three anchors, black `(b, 0)`,
//! mid `(m, 128)` and white `(w, 255)`.
//!
//!```text
//! 255 |               ______
//!     |             /
//! 128 |        __/
//!     |     _/
//!   0 |____/
//!     +----b------m------w----
//!```
//! Values at or below the black point become 0, values at or above the white
//! point become 255 and the rest are linearly interpolated between the anchors,
//! rounded to the nearest integer. Each channel is mapped independently.
use tinct_image::errors::ImageErrors;
use tinct_image::image::{Image, MAX_VALUE};
use tinct_image::traits::OperationsTrait;

use crate::split::{map_pixels, Split};

/// Adjust image levels
#[derive(Copy, Clone, Debug)]
pub struct Levels {
    black: u16,
    mid:   u16,
    white: u16,
    split: Split
}

impl Levels {
    /// Create a new levels adjustment
    ///
    /// # Errors
    /// [`ImageErrors::InvalidParameter`] unless `0 <= black < mid < white <= 255`
    pub fn new(black: i32, mid: i32, white: i32) -> Result<Levels, ImageErrors> {
        if !(0 <= black && black < mid && mid < white && white <= i32::from(MAX_VALUE)) {
            return Err(ImageErrors::InvalidParameter(format!(
                "Levels should satisfy 0 <= black < mid < white <= 255, found black={}, mid={}, white={}",
                black, mid, white
            )));
        }
        Ok(Levels {
            black: black as u16,
            mid:   mid as u16,
            white: white as u16,
            split: Split::Whole
        })
    }

    /// Only adjust the part of the image left of `split`
    #[must_use]
    pub fn with_split(mut self, split: Split) -> Levels {
        self.split = split;
        self
    }

    /// Map a single value through the curve
    #[must_use]
    pub fn map_value(&self, value: u16) -> u16 {
        let (black, mid, white) = (
            f64::from(self.black),
            f64::from(self.mid),
            f64::from(self.white)
        );
        let value_f = f64::from(value);

        if value <= self.black {
            0
        } else if value >= self.white {
            MAX_VALUE
        } else if value <= self.mid {
            (128.0 / (mid - black) * (value_f - black)).round() as u16
        } else {
            128 + (127.0 / (white - mid) * (value_f - mid)).round() as u16
        }
    }
}

impl OperationsTrait for Levels {
    fn name(&self) -> &'static str {
        "Levels adjust"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut table = [0_u16; 256];

        for (value, entry) in table.iter_mut().enumerate() {
            *entry = self.map_value(value as u16);
        }

        Ok(map_pixels(image, self.split, |pixel| {
            pixel.map(|value| table[usize::from(value.min(MAX_VALUE))])
        }))
    }
}

#[cfg(test)]
mod tests {
    use tinct_image::errors::ImageErrors;
    use tinct_image::image::Image;
    use tinct_image::traits::OperationsTrait;

    use crate::levels::Levels;
    use crate::split::Split;

    #[test]
    fn anchors_must_be_ordered() {
        for (b, m, w) in [(10, 10, 200), (-1, 100, 200), (0, 200, 100), (0, 128, 256)] {
            assert!(matches!(
                Levels::new(b, m, w),
                Err(ImageErrors::InvalidParameter(_))
            ));
        }
        assert!(Levels::new(0, 1, 2).is_ok());
    }

    #[test]
    fn default_levels_pass_anchors_through() {
        let levels = Levels::new(0, 128, 255).unwrap();

        assert_eq!(levels.map_value(0), 0);
        assert_eq!(levels.map_value(128), 128);
        assert_eq!(levels.map_value(255), 255);

        for value in 0..=255 {
            assert!(levels.map_value(value).abs_diff(value) <= 1);
        }
    }

    #[test]
    fn curve_hits_anchors_and_is_monotonic() {
        let levels = Levels::new(20, 100, 200).unwrap();

        assert_eq!(levels.map_value(10), 0);
        assert_eq!(levels.map_value(20), 0);
        assert_eq!(levels.map_value(100), 128);
        assert_eq!(levels.map_value(200), 255);
        assert_eq!(levels.map_value(230), 255);
        // 128/80*40 = 64
        assert_eq!(levels.map_value(60), 64);
        // 128 + 127/100*50 = 191.5
        assert_eq!(levels.map_value(150), 192);

        let mut previous = 0;
        for value in 0..=255 {
            let mapped = levels.map_value(value);
            assert!(mapped >= previous);
            previous = mapped;
        }
    }

    #[test]
    fn split_leaves_right_side() {
        let image = Image::fill([60, 150, 250], 10, 3);
        let levels = Levels::new(20, 100, 200)
            .unwrap()
            .with_split(Split::Percent(50));

        let out = levels.execute(&image).unwrap();

        for (row, col) in image.positions() {
            if col < 5 {
                assert_eq!(out.pixel(row, col), Some([64, 192, 255]));
            } else {
                assert_eq!(out.pixel(row, col), image.pixel(row, col));
            }
        }
    }
}
