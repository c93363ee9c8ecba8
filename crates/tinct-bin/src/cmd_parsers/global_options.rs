/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource::CommandLine;
use clap::ArgMatches;
use log::{info, Level};

#[derive(Debug, Clone, Default)]
pub struct CmdOptions {
    pub script:      Option<PathBuf>,
    pub strict_mode: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions::default()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if options.value_source("file") == Some(CommandLine) {
        cmd_options.script = options.get_one::<PathBuf>("file").cloned();
        info!("Reading commands from {:?}", cmd_options.script);
    } else {
        info!("Reading commands from stdin");
    }

    if options.get_flag("strict") {
        info!("Strict mode, stopping at the first failed command");
        cmd_options.strict_mode = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {}", err);
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
