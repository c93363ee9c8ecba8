/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Split previews
//!
//! Some filters can be applied to only the left part of an image, leaving the
//! rest as the untouched source, this gives a before/after preview of the effect.
//!
//! The split column is `width * percent / 100` (integer division), pixels at
//! columns before it are filtered, the rest are copied verbatim.
//!```text
//! percent = 60
//!┌──────────────────┐
//!│ filtered  │source│
//!│           │      │
//!└──────────────────┘
//!            ^ split column
//!```
use tinct_image::errors::ImageErrors;
use tinct_image::image::{Image, NUM_CHANNELS};

/// How much of an image a filter applies to
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Split {
    /// The filter applies to the whole image
    #[default]
    Whole,
    /// The filter applies to the leftmost `percent` of the image width.
    ///
    /// Percentages over 100 behave like [`Split::Whole`]
    Percent(u32)
}

impl Split {
    /// Create a split from a signed percentage
    ///
    /// # Errors
    /// [`ImageErrors::InvalidParameter`] if `percent` is negative or too large
    pub fn from_percent(percent: i64) -> Result<Split, ImageErrors> {
        u32::try_from(percent).map(Split::Percent).map_err(|_| {
            ImageErrors::InvalidParameter(format!(
                "Split percentage should be a non negative number, found {}",
                percent
            ))
        })
    }

    /// First column of an image of width `width` that should **not** be filtered
    ///
    /// Can be larger than the width
    #[must_use]
    pub fn split_column(self, width: usize) -> usize {
        match self {
            Split::Whole => usize::MAX,
            Split::Percent(percent) => width.saturating_mul(percent as usize) / 100
        }
    }
}

/// Build a new image where every pixel left of the split column is
/// `func(source_pixel)` and every other one is the source pixel
pub(crate) fn map_pixels<F>(image: &Image, split: Split, mut func: F) -> Image
where
    F: FnMut([u16; NUM_CHANNELS]) -> [u16; NUM_CHANNELS]
{
    let (width, height) = image.dimensions();
    let split_column = split.split_column(width);

    Image::from_fn(width, height, |row, col| {
        let pixel = image.pixel(row, col).unwrap_or_default();

        if col < split_column {
            func(pixel)
        } else {
            pixel
        }
    })
}

#[cfg(test)]
mod tests {
    use tinct_image::image::Image;

    use crate::split::{map_pixels, Split};

    #[test]
    fn negative_percent_is_invalid() {
        assert!(Split::from_percent(-1).is_err());
        assert_eq!(Split::from_percent(0).unwrap(), Split::Percent(0));
        assert_eq!(Split::from_percent(50).unwrap(), Split::Percent(50));
    }

    #[test]
    fn split_column_truncates() {
        assert_eq!(Split::Percent(50).split_column(5), 2);
        assert_eq!(Split::Percent(33).split_column(100), 33);
        assert_eq!(Split::Percent(0).split_column(100), 0);
        assert_eq!(Split::Percent(150).split_column(10), 15);
        assert!(Split::Whole.split_column(10) >= 10);
    }

    #[test]
    fn only_left_side_is_mapped() {
        let image = Image::fill([10, 10, 10], 10, 2);
        let mapped = map_pixels(&image, Split::Percent(30), |_| [0, 0, 0]);

        for (row, col) in image.positions() {
            let expected = if col < 3 { [0, 0, 0] } else { [10, 10, 10] };
            assert_eq!(mapped.pixel(row, col), Some(expected));
        }
    }
}
