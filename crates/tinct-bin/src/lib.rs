/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The `tinct` command line editor
//!
//! Commands are read one per line, either from a script given with `--file`
//! or from standard input, and run against a single editing session.
use std::process::exit;

use log::error;

use crate::workflow::run_from_cmd;

mod cmd_args;
pub mod cmd_parsers;
mod file_io;
mod serde;
pub mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    if let Err(err) = run_from_cmd(&parsed_opts) {
        println!();
        error!(" Could not complete workflow, reason {:?}", err);
        println!();
        exit(-1);
    }
}
