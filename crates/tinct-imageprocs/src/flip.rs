/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip filter: Mirror an image about one of its midlines
//!
use tinct_image::errors::ImageErrors;
use tinct_image::image::Image;
use tinct_image::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipDirection {
    /// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Horizontal,

    /// Flip the image vertically, reflecting rows around the central x-axis
    ///
    /// ```text
    ///
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    ///
    Vertical
}

/// Flip an image to a certain direction
pub struct Flip {
    flip_direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(flip_direction: FlipDirection) -> Flip {
        Self { flip_direction }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        match self.flip_direction {
            FlipDirection::Horizontal => "Horizontal flip",
            FlipDirection::Vertical => "Vertical flip"
        }
    }

    fn execute_impl(&self, image: &Image) -> Result<Image, ImageErrors> {
        let mut new_image = image.clone();
        let width = image.width();

        if new_image.is_empty() {
            return Ok(new_image);
        }
        for channel in new_image.channels_mut() {
            match self.flip_direction {
                FlipDirection::Horizontal => flop(channel, width),
                FlipDirection::Vertical => vertical_flip(channel, width)
            }
        }
        Ok(new_image)
    }
}

/// Flip an image on the vertical axis
///
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
///
pub fn vertical_flip<T: Copy + Default>(channel: &mut [T], width: usize) {
    // split the image in half, swapping the top
    // rows with the bottom ones. An odd middle row stays in place
    let len = channel.len();

    let (top, bottom) = channel.split_at_mut(len / 2);

    let mut stride = vec![T::default(); width];
    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        stride.copy_from_slice(t);
        t.copy_from_slice(b);
        b.copy_from_slice(&stride);
    }
}

/// Flop an image
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
///
pub fn flop<T: Copy>(in_out_image: &mut [T], width: usize) {
    debug_assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );

    for width_chunks in in_out_image.chunks_exact_mut(width) {
        width_chunks.reverse();
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use tinct_image::image::Image;
    use tinct_image::traits::OperationsTrait;

    use crate::flip::{Flip, FlipDirection};

    #[test]
    fn horizontal_flip_mirrors_columns() {
        let image = Image::from_fn(3, 2, |row, col| [(row * 3 + col) as u16, 0, 0]);
        let flipped = Flip::new(FlipDirection::Horizontal).execute(&image).unwrap();

        assert_eq!(flipped.channel(0), &[2, 1, 0, 5, 4, 3]);
    }

    #[test]
    fn vertical_flip_mirrors_rows() {
        let image = Image::from_fn(2, 3, |row, col| [0, (row * 2 + col) as u16, 0]);
        let flipped = Flip::new(FlipDirection::Vertical).execute(&image).unwrap();

        assert_eq!(flipped.channel(1), &[4, 5, 2, 3, 0, 1]);
    }

    #[test]
    fn flipping_twice_is_identity() {
        let mut rand = nanorand::WyRand::new();

        for (width, height) in [(1, 1), (7, 3), (4, 8), (0, 5)] {
            let image = Image::from_fn(width, height, |_, _| {
                [
                    rand.generate_range(0_u16..=255),
                    rand.generate_range(0_u16..=255),
                    rand.generate_range(0_u16..=255)
                ]
            });
            for direction in [FlipDirection::Horizontal, FlipDirection::Vertical] {
                let flip = Flip::new(direction);
                let twice = flip.execute(&flip.execute(&image).unwrap()).unwrap();
                assert_eq!(twice, image);
            }
        }
    }
}
