/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The pixel grid every operation consumes and produces
//!
//! An [`Image`] is always three channels (red, green and blue), stored planar,
//! i.e each channel is its own continuous vector laid out row by row.
//!
//! Values are conceptually in `0..=255` but this is not enforced by the image,
//! producers are responsible for clamping. The one producer that deliberately
//! does not clamp is the "value" component which can reach `3*255`, this is why
//! samples are stored as `u16`.
//!
//! Pixels are addressed by `(row, col)`, reading outside the grid gives `None`
//! rather than panicking, and writes outside the grid are ignored.
use zune_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;

/// Number of channels every image carries
pub const NUM_CHANNELS: usize = 3;

/// Largest value a channel can hold when it's meant for display or storage
pub const MAX_VALUE: u16 = 255;

/// A three channel image of fixed dimensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    channels: [Vec<u16>; NUM_CHANNELS],
    width:    usize,
    height:   usize
}

impl Image {
    /// Create a new black image of the given dimensions
    #[must_use]
    pub fn new(width: usize, height: usize) -> Image {
        Image::fill([0; NUM_CHANNELS], width, height)
    }

    /// Create an image where every pixel is `pixel`
    #[must_use]
    pub fn fill(pixel: [u16; NUM_CHANNELS], width: usize, height: usize) -> Image {
        let size = width * height;

        Image {
            channels: [
                vec![pixel[0]; size],
                vec![pixel[1]; size],
                vec![pixel[2]; size]
            ],
            width,
            height
        }
    }

    /// Create an image by calling `func` for every `(row, col)` position.
    ///
    /// # Example
    /// ```
    /// use tinct_image::image::Image;
    /// // a red horizontal gradient
    /// let image = Image::from_fn(100, 10, |_, col| [(col * 2) as u16, 0, 0]);
    /// assert_eq!(image.pixel(3, 50), Some([100, 0, 0]));
    /// ```
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Image
    where
        F: FnMut(usize, usize) -> [u16; NUM_CHANNELS]
    {
        let mut image = Image::new(width, height);

        for row in 0..height {
            for col in 0..width {
                let pixel = func(row, col);
                image.set_pixel(row, col, pixel);
            }
        }
        image
    }

    /// Create an image from already separated channels
    ///
    /// # Errors
    /// If any channel length isn't `width*height`
    pub fn from_channels(
        channels: [Vec<u16>; NUM_CHANNELS], width: usize, height: usize
    ) -> Result<Image, ImageErrors> {
        let expected = width * height;

        for channel in &channels {
            if channel.len() != expected {
                return Err(ImageErrors::GenericString(format!(
                    "Channel length {} does not match dimensions {}x{}",
                    channel.len(),
                    width,
                    height
                )));
            }
        }
        Ok(Image {
            channels,
            width,
            height
        })
    }

    /// Create an image from interleaved 8-bit pixels
    ///
    /// `pixels` has to contain `width*height*components` bytes, with
    /// components being 1 (gray), 2 (gray+alpha), 3 (RGB) or 4 (RGBA).
    /// Gray is replicated to all three channels and alpha is dropped.
    ///
    /// # Errors
    /// If the length of `pixels` doesn't match the dimensions or components
    /// is unsupported
    pub fn from_interleaved_u8(
        pixels: &[u8], width: usize, height: usize, components: usize
    ) -> Result<Image, ImageErrors> {
        if !(1..=4).contains(&components) {
            return Err(ImageErrors::GenericString(format!(
                "Unsupported number of components {}",
                components
            )));
        }
        if pixels.len() != width * height * components {
            return Err(ImageErrors::GenericString(format!(
                "Expected {} bytes for a {}x{} image with {} components but found {}",
                width * height * components,
                width,
                height,
                components,
                pixels.len()
            )));
        }
        let mut image = Image::new(width, height);

        let [red, green, blue] = &mut image.channels;

        for (((pix, r), g), b) in pixels
            .chunks_exact(components)
            .zip(red.iter_mut())
            .zip(green.iter_mut())
            .zip(blue.iter_mut())
        {
            if components < 3 {
                // gray or gray + alpha
                *r = u16::from(pix[0]);
                *g = u16::from(pix[0]);
                *b = u16::from(pix[0]);
            } else {
                *r = u16::from(pix[0]);
                *g = u16::from(pix[1]);
                *b = u16::from(pix[2]);
            }
        }
        Ok(image)
    }

    /// Get image dimensions as a tuple of (width,height)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the image has no pixels
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The colorspace the image is stored in, this is always RGB
    #[must_use]
    pub const fn colorspace(&self) -> ColorSpace {
        ColorSpace::RGB
    }

    /// Get the `[r, g, b]` triple at `(row, col)`
    ///
    /// Returns `None` if the position lies outside the image
    #[must_use]
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u16; NUM_CHANNELS]> {
        if row < self.height && col < self.width {
            let pos = row * self.width + col;
            Some([
                self.channels[0][pos],
                self.channels[1][pos],
                self.channels[2][pos]
            ])
        } else {
            None
        }
    }

    /// Set the `[r, g, b]` triple at `(row, col)`
    ///
    /// Writes outside the image are ignored
    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: [u16; NUM_CHANNELS]) {
        if row < self.height && col < self.width {
            let pos = row * self.width + col;

            self.channels[0][pos] = pixel[0];
            self.channels[1][pos] = pixel[1];
            self.channels[2][pos] = pixel[2];
        }
    }

    /// Return a reference to a single channel, 0 is red, 1 green and 2 blue
    ///
    /// # Panics
    /// If `index` is greater than 2
    #[must_use]
    pub fn channel(&self, index: usize) -> &[u16] {
        &self.channels[index]
    }

    /// Return references to all three channels
    #[must_use]
    pub fn channels_ref(&self) -> &[Vec<u16>; NUM_CHANNELS] {
        &self.channels
    }

    /// Return a mutable view into the image channels
    pub fn channels_mut(&mut self) -> &mut [Vec<u16>; NUM_CHANNELS] {
        &mut self.channels
    }

    /// Consume the image returning its channels
    #[must_use]
    pub fn into_channels(self) -> [Vec<u16>; NUM_CHANNELS] {
        self.channels
    }

    /// Flatten the image into interleaved `[R,G,B,R,G,B...]` bytes
    ///
    /// Values above 255 are clamped, this is the form encoders consume.
    #[must_use]
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out_pixel = vec![0; self.width * self.height * NUM_CHANNELS];

        let [red, green, blue] = &self.channels;

        for (((out, r), g), b) in out_pixel
            .chunks_exact_mut(NUM_CHANNELS)
            .zip(red)
            .zip(green)
            .zip(blue)
        {
            out[0] = (*r).min(MAX_VALUE) as u8;
            out[1] = (*g).min(MAX_VALUE) as u8;
            out[2] = (*b).min(MAX_VALUE) as u8;
        }
        out_pixel
    }

    /// Iterate over every `(row, col)` position of this image, row by row
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| (row, col)))
    }
}
