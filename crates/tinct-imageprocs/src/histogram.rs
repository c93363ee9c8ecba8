/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate channel histogram statistics
//!
//! An image histogram is a graph that shows the number of pixels in an image at each intensity value
//!
//! Histograms always have 256 bins, values above 255 (only the unclamped value
//! component produces those) are counted in the last bin.
use tinct_image::image::{Image, MAX_VALUE, NUM_CHANNELS};

use crate::channel::ColorChannel;

/// Number of bins in a histogram
pub const BINS: usize = 256;

/// Range histogram peaks are searched in when color correcting, values
/// close to black and white are ignored
pub const PEAK_RANGE: std::ops::Range<usize> = 10..245;

/// Count of every intensity in a single channel
pub type Histogram = [u32; BINS];

/// Calculate the histogram of a single channel
#[must_use]
pub fn histogram(channel: &[u16]) -> Histogram {
    let mut counts = [0_u32; BINS];

    for value in channel {
        counts[usize::from((*value).min(MAX_VALUE))] += 1;
    }
    counts
}

/// Calculate the histogram of a channel of an image
#[must_use]
pub fn channel_histogram(image: &Image, channel: ColorChannel) -> Histogram {
    histogram(image.channel(channel.index()))
}

/// Calculate the red, green and blue histograms of an image
///
/// # Example
/// ```rust
/// use tinct_image::image::Image;
/// use tinct_imageprocs::histogram::image_histograms;
///
/// let image = Image::fill([100, 0, 255], 100, 100);
/// let [red, green, blue] = image_histograms(&image);
///
/// assert_eq!(red[100], 100 * 100);
/// assert_eq!(green[0], 100 * 100);
/// assert_eq!(blue[255], 100 * 100);
/// ```
#[must_use]
pub fn image_histograms(image: &Image) -> [Histogram; NUM_CHANNELS] {
    ColorChannel::ALL.map(|channel| channel_histogram(image, channel))
}

/// Index of the largest count in `histogram[start..end]`
///
/// Ties go to the lowest index, so a range with no counts returns `start`.
/// `end` is capped at the number of bins and an empty range returns `start`
#[must_use]
pub fn find_peak(histogram: &Histogram, start: usize, end: usize) -> usize {
    let end = end.min(BINS);

    let mut peak = start;
    let mut max_count = 0;

    for (index, count) in histogram.iter().enumerate().take(end).skip(start) {
        if *count > max_count {
            max_count = *count;
            peak = index;
        }
    }
    peak
}

/// Largest count across all given histograms
#[must_use]
pub fn max_count(histograms: &[Histogram]) -> u32 {
    histograms
        .iter()
        .flat_map(|histogram| histogram.iter())
        .copied()
        .max()
        .unwrap_or(0)
}

/// Mean value of a histogram, or `None` if it is empty
#[must_use]
pub fn mean(histogram: &Histogram) -> Option<f64> {
    let total: u64 = histogram.iter().map(|x| u64::from(*x)).sum();

    if total == 0 {
        return None;
    }
    let weighted: u64 = histogram
        .iter()
        .enumerate()
        .map(|(value, count)| value as u64 * u64::from(*count))
        .sum();

    Some(weighted as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use tinct_image::image::Image;

    use crate::channel::ColorChannel;
    use crate::histogram::{channel_histogram, find_peak, histogram, max_count, mean, BINS};

    #[test]
    fn single_count_peak() {
        let mut counts = [0; BINS];
        counts[200] = 1;
        assert_eq!(find_peak(&counts, 10, 245), 200);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let mut counts = [0; BINS];
        counts[50] = 7;
        counts[30] = 7;
        counts[250] = 100;
        assert_eq!(find_peak(&counts, 10, 245), 30);
    }

    #[test]
    fn empty_range_returns_start() {
        let counts = [0; BINS];
        assert_eq!(find_peak(&counts, 10, 245), 10);
        assert_eq!(find_peak(&counts, 20, 20), 20);
    }

    #[test]
    fn end_is_exclusive() {
        let mut counts = [0; BINS];
        counts[245] = 9;
        counts[100] = 1;
        assert_eq!(find_peak(&counts, 10, 245), 100);
        assert_eq!(find_peak(&counts, 10, 1000), 245);
    }

    #[test]
    fn small_images_count_every_pixel_once() {
        let image = Image::from_fn(3, 2, |row, _| [row as u16 * 10, 0, 0]);
        let counts = channel_histogram(&image, ColorChannel::Red);

        assert_eq!(counts[0], 3);
        assert_eq!(counts[10], 3);
        assert_eq!(counts.iter().sum::<u32>(), 6);
    }

    #[test]
    fn large_values_land_in_last_bin() {
        let counts = histogram(&[600, 255, 3]);
        assert_eq!(counts[255], 2);
        assert_eq!(counts[3], 1);
    }

    #[test]
    fn stats() {
        let a = histogram(&[1, 1, 3]);
        let b = histogram(&[9]);

        assert_eq!(max_count(&[a, b]), 2);
        assert_eq!(max_count(&[]), 0);
        assert!((mean(&a).unwrap() - 5.0 / 3.0).abs() < 1e-9);
        assert_eq!(mean(&histogram(&[])), None);
    }
}
