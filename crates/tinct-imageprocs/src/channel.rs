/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel extraction, weighted components and channel splitting/combining
//!
//! # Components
//! A component sets every channel of a pixel to the same weighted sum of the
//! source channels, truncated toward zero
//!
//! | Component | Weights (r, g, b)          |
//! |-----------|----------------------------|
//! | value     | 1, 1, 1                    |
//! | intensity | 1/3, 1/3, 1/3              |
//! | luma      | 0.2126, 0.7152, 0.0722     |
//!
//! The value component is **not** clamped by default and may hold values up to
//! `3*255`, use [`WeightedComponent::clamped`] to get a displayable result.
use log::trace;
use tinct_image::errors::ImageErrors;
use tinct_image::image::{Image, MAX_VALUE, NUM_CHANNELS};
use tinct_image::traits::OperationsTrait;

/// A single color channel of an image
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue
}

impl ColorChannel {
    /// All channels in storage order
    pub const ALL: [ColorChannel; NUM_CHANNELS] =
        [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue];

    /// Position of this channel in a pixel
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2
        }
    }
}

impl TryFrom<usize> for ColorChannel {
    type Error = ImageErrors;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        ColorChannel::ALL.get(value).copied().ok_or_else(|| {
            ImageErrors::InvalidParameter(format!(
                "Channel index should be 0, 1 or 2, found {}",
                value
            ))
        })
    }
}

/// Keep one channel of an image, zeroing the other two
///
/// # Example
/// ```
/// use tinct_image::image::Image;
/// use tinct_image::traits::OperationsTrait;
/// use tinct_imageprocs::channel::{ColorChannel, ExtractChannel};
///
/// let image = Image::fill([10, 20, 30], 4, 4);
/// let green = ExtractChannel::new(ColorChannel::Green).execute(&image).unwrap();
/// assert_eq!(green.pixel(2, 2), Some([0, 20, 0]));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ExtractChannel {
    channel: ColorChannel
}

impl ExtractChannel {
    #[must_use]
    pub fn new(channel: ColorChannel) -> ExtractChannel {
        ExtractChannel { channel }
    }
}

impl OperationsTrait for ExtractChannel {
    fn name(&self) -> &'static str {
        match self.channel {
            ColorChannel::Red => "Red component",
            ColorChannel::Green => "Green component",
            ColorChannel::Blue => "Blue component"
        }
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        Ok(extract_channel(image, self.channel))
    }
}

/// Return a copy of `image` with only `channel` kept
#[must_use]
pub fn extract_channel(image: &Image, channel: ColorChannel) -> Image {
    let mut new_image = Image::new(image.width(), image.height());

    let index = channel.index();
    new_image.channels_mut()[index].copy_from_slice(image.channel(index));

    new_image
}

/// Well known weighted components
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Component {
    /// Sum of all channels
    Value,
    /// Average of all channels
    Intensity,
    /// Rec. 709 luma
    Luma
}

impl Component {
    #[must_use]
    pub const fn coefficients(self) -> [f64; NUM_CHANNELS] {
        match self {
            Component::Value => [1.0, 1.0, 1.0],
            Component::Intensity => [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
            Component::Luma => [0.2126, 0.7152, 0.0722]
        }
    }
}

/// Set every channel to `floor(Σ coefficient[k] * channel[k])`
#[derive(Copy, Clone, Debug)]
pub struct WeightedComponent {
    coefficients: [f64; NUM_CHANNELS],
    clamp:        bool
}

impl WeightedComponent {
    /// Create a new weighted component, results are not clamped
    #[must_use]
    pub fn new(coefficients: [f64; NUM_CHANNELS]) -> WeightedComponent {
        WeightedComponent {
            coefficients,
            clamp: false
        }
    }

    #[must_use]
    pub fn from_component(component: Component) -> WeightedComponent {
        WeightedComponent::new(component.coefficients())
    }

    /// Clamp results to `0..=255`
    #[must_use]
    pub fn clamped(mut self) -> WeightedComponent {
        self.clamp = true;
        self
    }
}

impl OperationsTrait for WeightedComponent {
    fn name(&self) -> &'static str {
        "Weighted component"
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let max_value = if self.clamp { MAX_VALUE } else { u16::MAX };

        let mut new_image = Image::new(image.width(), image.height());

        let [r, g, b] = image.channels_ref();
        let [out_r, out_g, out_b] = new_image.channels_mut();

        for (((((r, g), b), out_r), out_g), out_b) in r
            .iter()
            .zip(g)
            .zip(b)
            .zip(out_r.iter_mut())
            .zip(out_g.iter_mut())
            .zip(out_b.iter_mut())
        {
            let value = weighted_sum(&self.coefficients, [*r, *g, *b], max_value);
            *out_r = value;
            *out_g = value;
            *out_b = value;
        }
        Ok(new_image)
    }
}

#[inline]
fn weighted_sum(
    coefficients: &[f64; NUM_CHANNELS], pixel: [u16; NUM_CHANNELS], max_value: u16
) -> u16 {
    let sum: f64 = coefficients
        .iter()
        .zip(pixel)
        .map(|(c, p)| c * f64::from(p))
        .sum();

    sum.floor().clamp(0.0, f64::from(max_value)) as u16
}

/// Split an image into three, each keeping a single channel of the source
///
/// The returned images are in red, green, blue order
#[must_use]
pub fn split_channels(image: &Image) -> [Image; NUM_CHANNELS] {
    trace!("Splitting {}x{} image", image.width(), image.height());

    ColorChannel::ALL.map(|channel| extract_channel(image, channel))
}

/// Combine the red channel of `red`, the green channel of `green`
/// and the blue channel of `blue` into a new image
///
/// # Errors
/// [`ImageErrors::DimensionsMisMatch`] if the three images do not share dimensions
pub fn combine_channels(red: &Image, green: &Image, blue: &Image) -> Result<Image, ImageErrors> {
    let dimensions = red.dimensions();

    for other in [green, blue] {
        if other.dimensions() != dimensions {
            return Err(ImageErrors::DimensionsMisMatch(
                dimensions,
                other.dimensions()
            ));
        }
    }
    let (width, height) = dimensions;

    Image::from_channels(
        [
            red.channel(0).to_vec(),
            green.channel(1).to_vec(),
            blue.channel(2).to_vec()
        ],
        width,
        height
    )
}

#[cfg(test)]
mod tests {
    use tinct_image::errors::ImageErrors;
    use tinct_image::image::Image;
    use tinct_image::traits::OperationsTrait;

    use crate::channel::{
        combine_channels, split_channels, ColorChannel, Component, ExtractChannel,
        WeightedComponent
    };

    #[test]
    fn extract_keeps_selected_channel() {
        let image = Image::fill([10, 20, 30], 3, 2);

        for (channel, expected) in ColorChannel::ALL
            .iter()
            .zip([[10, 0, 0], [0, 20, 0], [0, 0, 30]])
        {
            let out = ExtractChannel::new(*channel).execute(&image).unwrap();
            assert_eq!(out.pixel(1, 2), Some(expected));
        }
    }

    #[test]
    fn bad_channel_index() {
        assert_eq!(ColorChannel::try_from(2).unwrap(), ColorChannel::Blue);
        assert!(matches!(
            ColorChannel::try_from(3),
            Err(ImageErrors::InvalidParameter(_))
        ));
    }

    #[test]
    fn value_is_unclamped_by_default() {
        let image = Image::fill([200, 200, 100], 2, 2);

        let value = WeightedComponent::from_component(Component::Value)
            .execute(&image)
            .unwrap();
        assert_eq!(value.pixel(0, 0), Some([500, 500, 500]));

        let clamped = WeightedComponent::from_component(Component::Value)
            .clamped()
            .execute(&image)
            .unwrap();
        assert_eq!(clamped.pixel(0, 0), Some([255, 255, 255]));
    }

    #[test]
    fn components_truncate() {
        let image = Image::fill([10, 20, 31], 1, 1);

        let intensity = WeightedComponent::from_component(Component::Intensity)
            .execute(&image)
            .unwrap();
        // 61 / 3 = 20.33
        assert_eq!(intensity.pixel(0, 0), Some([20, 20, 20]));

        let luma = WeightedComponent::from_component(Component::Luma)
            .execute(&image)
            .unwrap();
        // 2.126 + 14.304 + 2.2382 = 18.6682
        assert_eq!(luma.pixel(0, 0), Some([18, 18, 18]));
    }

    #[test]
    fn split_then_combine_is_identity() {
        let image = Image::from_fn(5, 4, |row, col| [row as u16, col as u16, (row * col) as u16]);

        let [red, green, blue] = split_channels(&image);
        assert_eq!(green.pixel(3, 4), Some([0, 4, 0]));

        let combined = combine_channels(&red, &green, &blue).unwrap();
        assert_eq!(combined, image);
    }

    #[test]
    fn combine_rejects_mismatched_sizes() {
        let a = Image::new(4, 4);
        let b = Image::new(4, 5);

        let err = combine_channels(&a, &a, &b).unwrap_err();
        assert!(matches!(
            err,
            ImageErrors::DimensionsMisMatch((4, 4), (4, 5))
        ));
    }
}
