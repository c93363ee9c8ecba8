/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::time::Instant;

use log::{debug, trace};

use crate::errors::ImageErrors;
use crate::image::Image;

/// Encapsulates an image decoder.
///
/// All supported image decoders must implement this trait
pub trait DecoderTrait {
    /// Decode a buffer already in memory into an image
    ///
    /// # Errors
    ///  - Any image decoding errors will be propagated to the caller.
    fn decode(&mut self, data: &[u8]) -> Result<Image, ImageErrors>;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;
}

/// Encapsulates an image encoder.
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// Encode an image returning the encoded bytes
    ///
    /// Channel values above 255 are clamped before encoding
    ///
    /// # Errors
    /// Any encoding errors will be propagated to the caller
    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors>;
}

/// This encapsulates an image operation.
///
/// An operation takes a source image and produces a freshly allocated
/// result, the source is never modified.
///
/// Operations that take or produce several images (splitting and
/// combining channels) are free functions instead.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Run the operation without logging
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors>;

    /// Execute the operation on `image` returning the result
    ///
    /// # Example
    /// ```
    /// use tinct_image::errors::ImageErrors;
    /// use tinct_image::image::Image;
    /// use tinct_image::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn name(&self) -> &'static str {
    ///         "Invert"
    ///     }
    ///     fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
    ///         let (w, h) = image.dimensions();
    ///         Ok(Image::from_fn(w, h, |row, col| {
    ///             let [r, g, b] = image.pixel(row, col).unwrap_or_default();
    ///             [255 - r.min(255), 255 - g.min(255), 255 - b.min(255)]
    ///         }))
    ///     }
    /// }
    /// let image = Image::fill([255, 0, 10], 3, 3);
    /// let inverted = Invert.execute(&image)?;
    /// assert_eq!(inverted.pixel(0, 0), Some([0, 255, 245]));
    /// # Ok::<(), ImageErrors>(())
    /// ```
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute(&self, image: &Image) -> Result<Image, ImageErrors> {
        let (width, height) = image.dimensions();

        trace!("Running {} on a {}x{} image", self.name(), width, height);

        let start = Instant::now();
        let result = self.execute_impl(image)?;

        debug!(
            "Finished running `{}` in {} ms",
            self.name(),
            start.elapsed().as_millis()
        );
        Ok(result)
    }
}
