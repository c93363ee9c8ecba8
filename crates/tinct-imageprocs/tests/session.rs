/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end runs of operation chains through a session
use nanorand::Rng;
use tinct_image::errors::ImageErrors;
use tinct_image::image::Image;
use tinct_imageprocs::channel::Component;
use tinct_imageprocs::color_matrix::GREYSCALE;
use tinct_imageprocs::convolve::Kernel;
use tinct_imageprocs::flip::FlipDirection;
use tinct_imageprocs::session::{Operation, Session};
use tinct_imageprocs::split::Split;

fn grey_rows() -> Image {
    let rows = [[100, 150, 200], [50, 75, 100], [25, 50, 75]];
    Image::from_fn(3, 3, |row, col| [rows[row][col]; 3])
}

fn random_image(width: usize, height: usize) -> Image {
    let mut rand = nanorand::WyRand::new_seed(1234);

    Image::from_fn(width, height, |_, _| {
        [
            rand.generate_range(0_u16..=255),
            rand.generate_range(0_u16..=255),
            rand.generate_range(0_u16..=255)
        ]
    })
}

fn op_names(source: &str, destination: &str) -> (String, String) {
    (source.to_string(), destination.to_string())
}

#[test]
fn greyscale_then_brighten() {
    let mut session = Session::new();
    session.insert("source", grey_rows());

    let (source, destination) = op_names("source", "grey");
    session
        .apply(&Operation::ColorMatrix {
            matrix: GREYSCALE,
            split: Split::Whole,
            source,
            destination
        })
        .unwrap();

    let (source, destination) = op_names("grey", "bright");
    session
        .apply(&Operation::Brighten {
            value: 50,
            source,
            destination
        })
        .unwrap();

    let bright = session.get("bright").unwrap();
    let expected = [[150, 200, 250], [100, 125, 150]];

    for (row, values) in expected.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            assert_eq!(bright.pixel(row, col), Some([*value; 3]));
        }
    }
}

#[test]
fn sharpen_example() {
    let mut session = Session::new();
    session.insert("source", grey_rows());

    let (source, destination) = op_names("source", "sharp");
    session
        .apply(&Operation::Convolve {
            kernel: Kernel::sharpen(),
            split: Split::Whole,
            source,
            destination
        })
        .unwrap();

    assert_eq!(
        session.get("sharp").unwrap().pixel(0, 0),
        Some([108, 108, 108])
    );
}

#[test]
fn horizontal_flip_twice() {
    let mut session = Session::new();
    session.insert("source", random_image(13, 6));

    for (source, destination) in [("source", "once"), ("once", "twice")] {
        let (source, destination) = op_names(source, destination);
        session
            .apply(&Operation::Flip {
                direction: FlipDirection::Horizontal,
                source,
                destination
            })
            .unwrap();
    }
    assert_ne!(session.get("once"), session.get("source"));
    assert_eq!(session.get("twice"), session.get("source"));
}

#[test]
fn split_previews_leave_the_right_side_alone() {
    let image = random_image(21, 7);

    for percent in [0, 25, 50, 80, 100] {
        let mut session = Session::new();
        session.insert("source", image.clone());

        let split = Split::Percent(percent);
        let operations = [
            Operation::Convolve {
                kernel: Kernel::gaussian_blur(),
                split,
                source: "source".to_string(),
                destination: "blur".to_string()
            },
            Operation::ColorMatrix {
                matrix: GREYSCALE,
                split,
                source: "source".to_string(),
                destination: "grey".to_string()
            },
            Operation::ColorCorrect {
                split,
                source: "source".to_string(),
                destination: "corrected".to_string()
            },
            Operation::Levels {
                black: 20,
                mid: 100,
                white: 220,
                split,
                source: "source".to_string(),
                destination: "levels".to_string()
            }
        ];
        let split_column = 21 * percent as usize / 100;

        for operation in &operations {
            session.apply(operation).unwrap();
        }
        for name in ["blur", "grey", "corrected", "levels"] {
            let out = session.get(name).unwrap();

            for (row, col) in image.positions() {
                if col >= split_column {
                    assert_eq!(out.pixel(row, col), image.pixel(row, col), "{name} {percent}%");
                }
            }
        }
    }
}

#[test]
fn value_component_clamped_and_unclamped() {
    let mut session = Session::new();
    session.insert("source", Image::fill([255, 255, 255], 2, 2));

    for (clamp, destination) in [(false, "raw"), (true, "clamped")] {
        session
            .apply(&Operation::Component {
                component: Component::Value,
                clamp,
                source: "source".to_string(),
                destination: destination.to_string()
            })
            .unwrap();
    }
    assert_eq!(session.get("raw").unwrap().pixel(0, 0), Some([765; 3]));
    assert_eq!(session.get("clamped").unwrap().pixel(0, 0), Some([255; 3]));
}

#[test]
fn combine_mismatched_sizes() {
    let mut session = Session::new();
    session.insert("a", Image::new(3, 3));
    session.insert("b", Image::new(3, 4));

    let result = session.apply(&Operation::CombineChannels {
        red:         "a".to_string(),
        green:       "b".to_string(),
        blue:        "a".to_string(),
        destination: "out".to_string()
    });

    assert!(matches!(
        result,
        Err(ImageErrors::DimensionsMisMatch(_, _))
    ));
    assert!(session.get("out").is_none());
}

#[test]
fn compress_extremes() {
    let mut session = Session::new();
    // padding 6x5 to 8x8 leaves zero coefficients
    session.insert("source", random_image(6, 5));

    for (percent, destination) in [(0.0, "none"), (100.0, "all")] {
        session
            .apply(&Operation::Compress {
                percent,
                source: "source".to_string(),
                destination: destination.to_string()
            })
            .unwrap();
    }
    let source = session.get("source").unwrap();
    let none = session.get("none").unwrap();

    for (a, b) in source
        .channels_ref()
        .iter()
        .flatten()
        .zip(none.channels_ref().iter().flatten())
    {
        assert!(a.abs_diff(*b) <= 1);
    }
    let all = session.get("all").unwrap();
    assert!(all.channels_ref().iter().flatten().all(|x| *x == 0));

    let bad = session.apply(&Operation::Compress {
        percent:     120.0,
        source:      "source".to_string(),
        destination: "bad".to_string()
    });
    assert!(matches!(bad, Err(ImageErrors::InvalidParameter(_))));
}

#[test]
fn histogram_plot_is_stored() {
    let mut session = Session::new();
    session.insert("source", random_image(300, 10));

    session
        .apply(&Operation::Histogram {
            source:      "source".to_string(),
            destination: "hist".to_string()
        })
        .unwrap();

    assert_eq!(session.get("hist").unwrap().dimensions(), (300, 256));
}
