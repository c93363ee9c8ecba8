/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Render the red, green and blue histograms of an image as line graphs
//!
//! The canvas is `max(256, width) x max(256, height)` with a white background,
//! intensity runs along the x axis and counts along the y axis, scaled so the
//! tallest bin of all three channels touches the top of the canvas.
//! Lines are drawn red first, then green, then blue, so blue wins where they overlap.
use log::trace;
use tinct_image::errors::ImageErrors;
use tinct_image::image::{Image, NUM_CHANNELS};
use tinct_image::traits::OperationsTrait;

use crate::histogram::{image_histograms, max_count, Histogram, BINS};

const WHITE: [u16; NUM_CHANNELS] = [255, 255, 255];
const LINE_COLORS: [[u16; NUM_CHANNELS]; NUM_CHANNELS] = [[255, 0, 0], [0, 255, 0], [0, 0, 255]];

/// Minimum canvas side
pub const MIN_CANVAS_SIZE: usize = 256;

/// Plot the histogram of an image
///
/// The result is a new image, like any other operation
#[derive(Copy, Clone, Debug, Default)]
pub struct HistogramPlot;

impl HistogramPlot {
    #[must_use]
    pub fn new() -> HistogramPlot {
        HistogramPlot
    }
}

impl OperationsTrait for HistogramPlot {
    fn name(&self) -> &'static str {
        "Histogram plot"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let width = image.width().max(MIN_CANVAS_SIZE);
        let height = image.height().max(MIN_CANVAS_SIZE);

        let mut canvas = Image::fill(WHITE, width, height);

        let histograms = image_histograms(image);
        let max_count = max_count(&histograms);

        trace!("Plotting histogram on {}x{} canvas, max count {}", width, height, max_count);

        if max_count == 0 {
            return Ok(canvas);
        }
        for (histogram, color) in histograms.iter().zip(LINE_COLORS) {
            plot_histogram(&mut canvas, histogram, color, max_count);
        }
        Ok(canvas)
    }
}

fn plot_histogram(
    canvas: &mut Image, histogram: &Histogram, color: [u16; NUM_CHANNELS], max_count: u32
) {
    let height = canvas.height() as i64;

    let scaled = |count: u32| -> i64 {
        ((f64::from(count) / f64::from(max_count)) * height as f64) as i64
    };

    for i in 1..BINS {
        let prev_height = scaled(histogram[i - 1]);
        let curr_height = scaled(histogram[i]);

        draw_line(
            canvas,
            (i as i64 - 1, height - prev_height),
            (i as i64, height - curr_height),
            color
        );
    }
}

/// Bresenham line from `start` to `end` inclusive, points are `(x, y)`
///
/// Points outside the canvas are skipped
pub fn draw_line(canvas: &mut Image, start: (i64, i64), end: (i64, i64), color: [u16; NUM_CHANNELS]) {
    let (mut x, mut y) = start;
    let (x1, y1) = end;

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let step_x = if x < x1 { 1 } else { -1 };
    let step_y = if y < y1 { 1 } else { -1 };
    let mut error = dx + dy;

    loop {
        if x >= 0 && y >= 0 {
            canvas.set_pixel(y as usize, x as usize, color);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * error;

        if e2 >= dy {
            error += dy;
            x += step_x;
        }
        if e2 <= dx {
            error += dx;
            y += step_y;
        }
    }
}
