/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Editing sessions
//!
//! A [`Session`] owns the [`ImageStore`] and runs [`Operation`] requests against it.
//! Every request names the images it reads and the images it writes, sources are
//! resolved first and results are only stored once the whole operation succeeded,
//! so a failed request never leaves partial results behind.
use std::time::Instant;

use log::{debug, info};
use tinct_image::errors::ImageErrors;
use tinct_image::image::Image;
use tinct_image::store::ImageStore;
use tinct_image::traits::OperationsTrait;

use crate::brighten::Brighten;
use crate::channel::{
    combine_channels, split_channels, ColorChannel, Component, ExtractChannel, WeightedComponent
};
use crate::color_correct::ColorCorrect;
use crate::color_matrix::ColorMatrix;
use crate::compress::Compress;
use crate::convolve::{Convolve, Kernel};
use crate::flip::{Flip, FlipDirection};
use crate::histogram_plot::HistogramPlot;
use crate::levels::Levels;
use crate::split::Split;

/// A single request against a session, with its typed parameters
/// and the names of the images it reads and writes
#[derive(Clone, Debug)]
pub enum Operation {
    /// Keep a single channel
    ExtractChannel {
        channel:     ColorChannel,
        source:      String,
        destination: String
    },
    /// Value, intensity or luma component
    Component {
        component:   Component,
        clamp:       bool,
        source:      String,
        destination: String
    },
    Flip {
        direction:   FlipDirection,
        source:      String,
        destination: String
    },
    Brighten {
        value:       i32,
        source:      String,
        destination: String
    },
    /// Split an image into three single channel images
    SplitChannels {
        source: String,
        red:    String,
        green:  String,
        blue:   String
    },
    /// Combine the red, green and blue channels of three images
    CombineChannels {
        red:         String,
        green:       String,
        blue:        String,
        destination: String
    },
    /// Convolve with a kernel, blur and sharpen are built in kernels
    Convolve {
        kernel:      Kernel,
        split:       Split,
        source:      String,
        destination: String
    },
    /// Multiply by a 3x3 matrix, greyscale and sepia are built in matrices
    ColorMatrix {
        matrix:      [[f64; 3]; 3],
        split:       Split,
        source:      String,
        destination: String
    },
    ColorCorrect {
        split:       Split,
        source:      String,
        destination: String
    },
    Levels {
        black:       i32,
        mid:         i32,
        white:       i32,
        split:       Split,
        source:      String,
        destination: String
    },
    Compress {
        percent:     f64,
        source:      String,
        destination: String
    },
    /// Plot the histogram of an image
    Histogram {
        source:      String,
        destination: String
    }
}

impl Operation {
    /// A short name used in logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ExtractChannel { .. } => "extract-channel",
            Operation::Component { .. } => "component",
            Operation::Flip { .. } => "flip",
            Operation::Brighten { .. } => "brighten",
            Operation::SplitChannels { .. } => "rgb-split",
            Operation::CombineChannels { .. } => "rgb-combine",
            Operation::Convolve { .. } => "convolve",
            Operation::ColorMatrix { .. } => "color-matrix",
            Operation::ColorCorrect { .. } => "color-correct",
            Operation::Levels { .. } => "levels-adjust",
            Operation::Compress { .. } => "compress",
            Operation::Histogram { .. } => "histogram"
        }
    }

    /// Return the single image filter this operation maps to, with the source and destination
    /// names, or `None` for operations that read or write several images
    fn single_image_filter(&self) -> Result<Option<SingleImageFilter>, ImageErrors> {
        let (filter, source, destination): (Box<dyn OperationsTrait>, _, _) = match self {
            Operation::ExtractChannel {
                channel,
                source,
                destination
            } => (Box::new(ExtractChannel::new(*channel)), source, destination),
            Operation::Component {
                component,
                clamp,
                source,
                destination
            } => {
                let mut filter = WeightedComponent::from_component(*component);
                if *clamp {
                    filter = filter.clamped();
                }
                (Box::new(filter), source, destination)
            }
            Operation::Flip {
                direction,
                source,
                destination
            } => (Box::new(Flip::new(*direction)), source, destination),
            Operation::Brighten {
                value,
                source,
                destination
            } => (Box::new(Brighten::new(*value)), source, destination),
            Operation::Convolve {
                kernel,
                split,
                source,
                destination
            } => (
                Box::new(Convolve::new(kernel.clone()).with_split(*split)),
                source,
                destination
            ),
            Operation::ColorMatrix {
                matrix,
                split,
                source,
                destination
            } => (
                Box::new(ColorMatrix::new(*matrix).with_split(*split)),
                source,
                destination
            ),
            Operation::ColorCorrect {
                split,
                source,
                destination
            } => (
                Box::new(ColorCorrect::new().with_split(*split)),
                source,
                destination
            ),
            Operation::Levels {
                black,
                mid,
                white,
                split,
                source,
                destination
            } => (
                Box::new(Levels::new(*black, *mid, *white)?.with_split(*split)),
                source,
                destination
            ),
            Operation::Compress {
                percent,
                source,
                destination
            } => (Box::new(Compress::new(*percent)?), source, destination),
            Operation::Histogram {
                source,
                destination
            } => (Box::new(HistogramPlot::new()), source, destination),
            Operation::SplitChannels { .. } | Operation::CombineChannels { .. } => {
                return Ok(None)
            }
        };
        Ok(Some(SingleImageFilter {
            filter,
            source: source.as_str(),
            destination: destination.as_str()
        }))
    }
}

struct SingleImageFilter<'a> {
    filter:      Box<dyn OperationsTrait>,
    source:      &'a str,
    destination: &'a str
}

/// An editing session, owning every image loaded or produced
#[derive(Default, Debug)]
pub struct Session {
    store: ImageStore
}

impl Session {
    #[must_use]
    pub fn new() -> Session {
        Session::default()
    }

    /// Store `image` under `name`, replacing any image already there
    pub fn insert(&mut self, name: impl Into<String>, image: Image) {
        self.store.insert(name, image);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Image> {
        self.store.get(name)
    }

    /// Get the image stored under `name`
    ///
    /// # Errors
    /// [`ImageErrors::ImageNotFound`] if nothing is stored under `name`
    pub fn try_get(&self, name: &str) -> Result<&Image, ImageErrors> {
        self.store.try_get(name)
    }

    /// Names of all images in this session, sorted
    #[must_use]
    pub fn image_names(&self) -> Vec<&str> {
        self.store.names()
    }

    #[must_use]
    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// Run `operation`, storing its results
    ///
    /// # Errors
    /// - [`ImageErrors::ImageNotFound`] if a source image doesn't exist
    /// - Any error from the operation itself, e.g invalid parameters
    ///
    /// On error nothing is stored
    pub fn apply(&mut self, operation: &Operation) -> Result<(), ImageErrors> {
        let start = Instant::now();

        if let Some(single) = operation.single_image_filter()? {
            let source = self.store.try_get(single.source)?;
            let result = single.filter.execute(source)?;

            self.store.insert(single.destination, result);
        } else {
            match operation {
                Operation::SplitChannels {
                    source,
                    red,
                    green,
                    blue
                } => {
                    let [r, g, b] = split_channels(self.store.try_get(source)?);

                    self.store.insert(red.as_str(), r);
                    self.store.insert(green.as_str(), g);
                    self.store.insert(blue.as_str(), b);
                }
                Operation::CombineChannels {
                    red,
                    green,
                    blue,
                    destination
                } => {
                    let combined = combine_channels(
                        self.store.try_get(red)?,
                        self.store.try_get(green)?,
                        self.store.try_get(blue)?
                    )?;
                    self.store.insert(destination.as_str(), combined);
                }
                _ => {
                    return Err(ImageErrors::GenericStr(
                        "Operation has no single image filter and no multi image handler"
                    ))
                }
            }
        }
        debug!(
            "Applied `{}` in {} ms",
            operation.name(),
            start.elapsed().as_millis()
        );
        info!("Session holds {} images", self.store.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tinct_image::errors::ImageErrors;
    use tinct_image::image::Image;

    use crate::channel::ColorChannel;
    use crate::session::{Operation, Session};
    use crate::split::Split;

    fn session() -> Session {
        let mut session = Session::new();
        session.insert("src", Image::fill([10, 20, 30], 4, 4));
        session
    }

    #[test]
    fn missing_source_is_not_found() {
        let mut session = session();
        let err = session
            .apply(&Operation::Brighten {
                value:       10,
                source:      "nope".to_string(),
                destination: "dst".to_string()
            })
            .unwrap_err();

        assert!(matches!(err, ImageErrors::ImageNotFound(name) if name == "nope"));
        assert!(session.get("dst").is_none());
    }

    #[test]
    fn invalid_levels_store_nothing() {
        let mut session = session();
        let result = session.apply(&Operation::Levels {
            black:       100,
            mid:         50,
            white:       200,
            split:       Split::Whole,
            source:      "src".to_string(),
            destination: "dst".to_string()
        });

        assert!(matches!(result, Err(ImageErrors::InvalidParameter(_))));
        assert!(session.get("dst").is_none());
        // the session is still usable
        assert_eq!(session.image_names(), vec!["src"]);
    }

    #[test]
    fn results_are_stored_under_destination() {
        let mut session = session();
        session
            .apply(&Operation::ExtractChannel {
                channel:     ColorChannel::Blue,
                source:      "src".to_string(),
                destination: "blue".to_string()
            })
            .unwrap();

        assert_eq!(session.get("blue").unwrap().pixel(0, 0), Some([0, 0, 30]));
        assert_eq!(session.get("src").unwrap().pixel(0, 0), Some([10, 20, 30]));
    }

    #[test]
    fn destination_may_be_the_source() {
        let mut session = session();
        session
            .apply(&Operation::Brighten {
                value:       5,
                source:      "src".to_string(),
                destination: "src".to_string()
            })
            .unwrap();

        assert_eq!(session.get("src").unwrap().pixel(3, 3), Some([15, 25, 35]));
    }

    #[test]
    fn split_and_combine() {
        let mut session = session();
        session
            .apply(&Operation::SplitChannels {
                source: "src".to_string(),
                red:    "r".to_string(),
                green:  "g".to_string(),
                blue:   "b".to_string()
            })
            .unwrap();
        session
            .apply(&Operation::CombineChannels {
                red:         "r".to_string(),
                green:       "g".to_string(),
                blue:        "b".to_string(),
                destination: "out".to_string()
            })
            .unwrap();

        assert_eq!(session.get("out"), session.get("src"));
        assert_eq!(session.image_names(), vec!["b", "g", "out", "r", "src"]);
    }
}
