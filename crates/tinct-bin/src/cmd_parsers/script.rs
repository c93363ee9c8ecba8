/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Parsing of script lines into commands
//!
//! A line is a command name followed by whitespace separated arguments,
//! blank lines and lines starting with `#` carry no command.
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use tinct_image::errors::ImageErrors;
use tinct_imageprocs::channel::{ColorChannel, Component};
use tinct_imageprocs::color_matrix::{GREYSCALE, SEPIA};
use tinct_imageprocs::convolve::Kernel;
use tinct_imageprocs::flip::FlipDirection;
use tinct_imageprocs::session::Operation;
use tinct_imageprocs::split::Split;

/// A single parsed script command
#[derive(Clone, Debug)]
pub enum Command {
    /// Read an image file into the session
    Load { path: PathBuf, name: String },
    /// Write a session image to a file
    Save { path: PathBuf, name: String },
    /// Print a summary of an image
    Info { name: String },
    /// Run another script
    Run { script: PathBuf },
    /// Stop reading commands
    Quit,
    Operation(Operation)
}

pub enum CommandErrors {
    UnknownCommand(String),
    /// Command name and the number of arguments it needs
    MissingArguments(String, usize),
    UnexpectedArgument(String),
    NumericParse(String),
    /// Scripts nested deeper than the given depth
    ScriptDepth(usize),
    /// A command failed at the given line
    AtLine(usize, Box<CommandErrors>),
    ImageErrors(ImageErrors),
    SerializeErrors(serde_json::Error),
    IoErrors(std::io::Error)
}

impl Debug for CommandErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(name) => writeln!(f, "Unknown command {:?}", name),
            Self::MissingArguments(name, count) => {
                writeln!(f, "Command {:?} needs {} arguments", name, count)
            }
            Self::UnexpectedArgument(arg) => writeln!(f, "Unexpected argument {:?}", arg),
            Self::NumericParse(arg) => writeln!(f, "Could not parse {:?} as a number", arg),
            Self::ScriptDepth(depth) => {
                writeln!(f, "Scripts nested more than {} levels deep", depth)
            }
            Self::AtLine(line, err) => write!(f, "Line {}: {:?}", line, err),
            Self::ImageErrors(err) => write!(f, "{:?}", err),
            Self::SerializeErrors(err) => writeln!(f, "Serializing failed: {}", err),
            Self::IoErrors(err) => writeln!(f, "I/O error: {}", err)
        }
    }
}

impl Display for CommandErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for CommandErrors {}

impl From<ImageErrors> for CommandErrors {
    fn from(value: ImageErrors) -> Self {
        CommandErrors::ImageErrors(value)
    }
}

impl From<std::io::Error> for CommandErrors {
    fn from(value: std::io::Error) -> Self {
        CommandErrors::IoErrors(value)
    }
}

impl From<serde_json::Error> for CommandErrors {
    fn from(value: serde_json::Error) -> Self {
        CommandErrors::SerializeErrors(value)
    }
}

fn number<T: FromStr>(arg: &str) -> Result<T, CommandErrors> {
    arg.parse::<T>()
        .map_err(|_| CommandErrors::NumericParse(arg.to_string()))
}

/// Check `args` has exactly `count` entries
fn exact<'a>(name: &str, args: &'a [&'a str], count: usize) -> Result<&'a [&'a str], CommandErrors> {
    if args.len() < count {
        return Err(CommandErrors::MissingArguments(name.to_string(), count));
    }
    if let Some(extra) = args.get(count) {
        return Err(CommandErrors::UnexpectedArgument((*extra).to_string()));
    }
    Ok(args)
}

/// Check `args` has `count` entries, optionally followed by `split <percent>`
fn with_split<'a>(
    name: &str, args: &'a [&'a str], count: usize
) -> Result<(&'a [&'a str], Split), CommandErrors> {
    if args.len() <= count {
        return Ok((exact(name, args, count)?, Split::Whole));
    }
    match &args[count..] {
        ["split", percent] => Ok((&args[..count], Split::from_percent(number(percent)?)?)),
        ["split"] => Err(CommandErrors::MissingArguments(name.to_string(), count + 2)),
        [extra, ..] => Err(CommandErrors::UnexpectedArgument((*extra).to_string())),
        [] => Ok((args, Split::Whole))
    }
}

fn source_destination(args: &[&str]) -> (String, String) {
    (args[0].to_string(), args[1].to_string())
}

fn extract(name: &str, args: &[&str], channel: ColorChannel) -> Result<Operation, CommandErrors> {
    let (source, destination) = source_destination(exact(name, args, 2)?);

    Ok(Operation::ExtractChannel {
        channel,
        source,
        destination
    })
}

fn component(name: &str, args: &[&str], component: Component) -> Result<Operation, CommandErrors> {
    let clamp = match args {
        [_, _, "clamp"] => true,
        _ => {
            exact(name, args, 2)?;
            false
        }
    };
    let (source, destination) = source_destination(args);

    Ok(Operation::Component {
        component,
        clamp,
        source,
        destination
    })
}

fn flip(name: &str, args: &[&str], direction: FlipDirection) -> Result<Operation, CommandErrors> {
    let (source, destination) = source_destination(exact(name, args, 2)?);

    Ok(Operation::Flip {
        direction,
        source,
        destination
    })
}

fn convolve(name: &str, args: &[&str], kernel: Kernel) -> Result<Operation, CommandErrors> {
    let (args, split) = with_split(name, args, 2)?;
    let (source, destination) = source_destination(args);

    Ok(Operation::Convolve {
        kernel,
        split,
        source,
        destination
    })
}

fn color_matrix(name: &str, args: &[&str], matrix: [[f64; 3]; 3]) -> Result<Operation, CommandErrors> {
    let (args, split) = with_split(name, args, 2)?;
    let (source, destination) = source_destination(args);

    Ok(Operation::ColorMatrix {
        matrix,
        split,
        source,
        destination
    })
}

fn operation(name: &str, args: &[&str]) -> Result<Operation, CommandErrors> {
    let operation = match name {
        "red-component" => extract(name, args, ColorChannel::Red)?,
        "green-component" => extract(name, args, ColorChannel::Green)?,
        "blue-component" => extract(name, args, ColorChannel::Blue)?,
        "value-component" => component(name, args, Component::Value)?,
        "intensity-component" => component(name, args, Component::Intensity)?,
        "luma-component" => component(name, args, Component::Luma)?,
        "horizontal-flip" => flip(name, args, FlipDirection::Horizontal)?,
        "vertical-flip" => flip(name, args, FlipDirection::Vertical)?,
        "blur" => convolve(name, args, Kernel::gaussian_blur())?,
        "sharpen" => convolve(name, args, Kernel::sharpen())?,
        "greyscale" => color_matrix(name, args, GREYSCALE)?,
        "sepia" => color_matrix(name, args, SEPIA)?,
        "brighten" => {
            let args = exact(name, args, 3)?;
            Operation::Brighten {
                value:       number(args[0])?,
                source:      args[1].to_string(),
                destination: args[2].to_string()
            }
        }
        "rgb-split" => {
            let args = exact(name, args, 4)?;
            Operation::SplitChannels {
                source: args[0].to_string(),
                red:    args[1].to_string(),
                green:  args[2].to_string(),
                blue:   args[3].to_string()
            }
        }
        "rgb-combine" => {
            let args = exact(name, args, 4)?;
            Operation::CombineChannels {
                destination: args[0].to_string(),
                red:         args[1].to_string(),
                green:       args[2].to_string(),
                blue:        args[3].to_string()
            }
        }
        "color-correct" => {
            let (args, split) = with_split(name, args, 2)?;
            let (source, destination) = source_destination(args);
            Operation::ColorCorrect {
                split,
                source,
                destination
            }
        }
        "levels-adjust" => {
            let (args, split) = with_split(name, args, 5)?;
            Operation::Levels {
                black: number(args[0])?,
                mid: number(args[1])?,
                white: number(args[2])?,
                split,
                source: args[3].to_string(),
                destination: args[4].to_string()
            }
        }
        "compress" => {
            let args = exact(name, args, 3)?;
            Operation::Compress {
                percent:     number(args[0])?,
                source:      args[1].to_string(),
                destination: args[2].to_string()
            }
        }
        "histogram" => {
            let (source, destination) = source_destination(exact(name, args, 2)?);
            Operation::Histogram {
                source,
                destination
            }
        }
        _ => return Err(CommandErrors::UnknownCommand(name.to_string()))
    };
    Ok(operation)
}

/// Parse a single script line
///
/// Returns `Ok(None)` for blank lines and comments
///
/// # Errors
/// If the command is unknown, has the wrong number of arguments, or an argument
/// that should be numeric isn't
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandErrors> {
    let line = line.trim();

    if line.starts_with('#') {
        return Ok(None);
    }
    let mut tokens = line.split_whitespace();

    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match name {
        "load" => {
            let args = exact(name, &args, 2)?;
            Command::Load {
                path: PathBuf::from(args[0]),
                name: args[1].to_string()
            }
        }
        "save" => {
            let args = exact(name, &args, 2)?;
            Command::Save {
                path: PathBuf::from(args[0]),
                name: args[1].to_string()
            }
        }
        "info" => Command::Info {
            name: exact(name, &args, 1)?[0].to_string()
        },
        "run" | "-file" => Command::Run {
            script: PathBuf::from(exact(name, &args, 1)?[0])
        },
        "quit" | "exit" => {
            exact(name, &args, 0)?;
            Command::Quit
        }
        _ => Command::Operation(operation(name, &args)?)
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use tinct_imageprocs::session::Operation;
    use tinct_imageprocs::split::Split;

    use crate::cmd_parsers::script::{parse_line, Command, CommandErrors};

    #[test]
    fn comments_and_blank_lines() {
        assert!(parse_line("").unwrap().is_none());
        assert!(parse_line("   \t").unwrap().is_none());
        assert!(parse_line("# load a.ppm a").unwrap().is_none());
        assert!(parse_line("   # indented").unwrap().is_none());
    }

    #[test]
    fn split_suffix() {
        let command = parse_line("blur src dst split 40").unwrap().unwrap();
        assert!(matches!(
            command,
            Command::Operation(Operation::Convolve {
                split: Split::Percent(40),
                ..
            })
        ));

        let command = parse_line("levels-adjust 10 128 240 src dst").unwrap().unwrap();
        assert!(matches!(
            command,
            Command::Operation(Operation::Levels {
                black: 10,
                mid: 128,
                white: 240,
                split: Split::Whole,
                ..
            })
        ));
    }

    #[test]
    fn negative_split_is_invalid() {
        assert!(matches!(
            parse_line("sepia src dst split -5"),
            Err(CommandErrors::ImageErrors(_))
        ));
        assert!(matches!(
            parse_line("sepia src dst split"),
            Err(CommandErrors::MissingArguments(_, 4))
        ));
        assert!(matches!(
            parse_line("sepia src dst splat 5"),
            Err(CommandErrors::UnexpectedArgument(arg)) if arg == "splat"
        ));
    }

    #[test]
    fn argument_counts() {
        assert!(matches!(
            parse_line("brighten 10 src"),
            Err(CommandErrors::MissingArguments(_, 3))
        ));
        assert!(matches!(
            parse_line("horizontal-flip a b c"),
            Err(CommandErrors::UnexpectedArgument(arg)) if arg == "c"
        ));
        assert!(matches!(
            parse_line("brighten ten src dst"),
            Err(CommandErrors::NumericParse(arg)) if arg == "ten"
        ));
        assert!(matches!(
            parse_line("unsharp a b"),
            Err(CommandErrors::UnknownCommand(name)) if name == "unsharp"
        ));
    }

    #[test]
    fn combine_takes_destination_first() {
        let command = parse_line("rgb-combine out r g b").unwrap().unwrap();

        match command {
            Command::Operation(Operation::CombineChannels {
                red,
                green,
                blue,
                destination
            }) => {
                assert_eq!(destination, "out");
                assert_eq!([red, green, blue], ["r", "g", "b"]);
            }
            other => panic!("Unexpected command {:?}", other)
        }
    }

    #[test]
    fn component_clamp() {
        assert!(matches!(
            parse_line("value-component a b clamp").unwrap().unwrap(),
            Command::Operation(Operation::Component { clamp: true, .. })
        ));
        assert!(matches!(
            parse_line("luma-component a b").unwrap().unwrap(),
            Command::Operation(Operation::Component { clamp: false, .. })
        ));
        assert!(parse_line("luma-component a b c").is_err());
    }

    #[test]
    fn session_commands() {
        assert!(matches!(
            parse_line("-file script.txt").unwrap().unwrap(),
            Command::Run { .. }
        ));
        assert!(matches!(parse_line("exit").unwrap().unwrap(), Command::Quit));
        assert!(matches!(
            parse_line("save out.png img").unwrap().unwrap(),
            Command::Save { name, .. } if name == "img"
        ));
    }
}
