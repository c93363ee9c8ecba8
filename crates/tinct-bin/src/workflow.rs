/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Running commands against an editing session
use std::fs::File;
use std::io::{stdin, BufRead, BufReader};
use std::path::Path;

use log::{debug, error, info};
use tinct_imageprocs::session::Session;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::script::{parse_line, Command, CommandErrors};
use crate::file_io::ImageFile;
use crate::serde::ImageSummary;

/// How deep `run` commands may nest
pub const MAX_SCRIPT_DEPTH: usize = 16;

/// Whether to keep reading commands after one was run
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit
}

/// Runs commands against a single session
#[derive(Debug, Default)]
pub struct Workflow {
    session: Session,
    strict:  bool,
    depth:   usize
}

impl Workflow {
    pub fn new(strict: bool) -> Workflow {
        Workflow {
            session: Session::new(),
            strict,
            depth: 0
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// JSON summary of the image stored under `name`
    pub fn info_json(&self, name: &str) -> Result<String, CommandErrors> {
        let image = self.session.try_get(name)?;

        Ok(serde_json::to_string_pretty(&ImageSummary::new(name, image))?)
    }

    /// Run a single command
    pub fn run_command(&mut self, command: Command) -> Result<Flow, CommandErrors> {
        match command {
            Command::Load { path, name } => {
                let image = ImageFile::new(path).load()?;
                self.session.insert(name, image);
            }
            Command::Save { path, name } => {
                let image = self.session.try_get(&name)?;
                ImageFile::new(path).save(image)?;
            }
            Command::Info { name } => {
                println!("{}", self.info_json(&name)?);
            }
            Command::Run { script } => return self.run_script(script),
            Command::Quit => return Ok(Flow::Quit),
            Command::Operation(operation) => self.session.apply(&operation)?
        }
        Ok(Flow::Continue)
    }

    /// Run every line of `reader` until its end or a quit command
    ///
    /// Failed lines are logged and skipped, in strict mode the first failure is returned
    pub fn run_lines<R: BufRead>(&mut self, reader: R) -> Result<Flow, CommandErrors> {
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = number + 1;

            let result = parse_line(&line).and_then(|command| match command {
                Some(command) => {
                    debug!("Line {}: {}", line_number, line.trim());
                    self.run_command(command)
                }
                None => Ok(Flow::Continue)
            });

            match result {
                Ok(Flow::Quit) => {
                    info!("Quit at line {}", line_number);
                    return Ok(Flow::Quit);
                }
                Ok(Flow::Continue) => (),
                Err(err) if self.strict => {
                    return Err(CommandErrors::AtLine(line_number, Box::new(err)));
                }
                Err(err) => error!("Line {}: {:?}", line_number, err)
            }
        }
        Ok(Flow::Continue)
    }

    /// Run the script at `path`
    pub fn run_script<P: AsRef<Path>>(&mut self, path: P) -> Result<Flow, CommandErrors> {
        if self.depth >= MAX_SCRIPT_DEPTH {
            return Err(CommandErrors::ScriptDepth(MAX_SCRIPT_DEPTH));
        }
        info!("Running script {:?}", path.as_ref());

        let reader = BufReader::new(File::open(path)?);

        self.depth += 1;
        let result = self.run_lines(reader);
        self.depth -= 1;

        result
    }
}

pub(crate) fn run_from_cmd(cmd_opts: &CmdOptions) -> Result<(), CommandErrors> {
    let mut workflow = Workflow::new(cmd_opts.strict_mode);

    match &cmd_opts.script {
        Some(script) => workflow.run_script(script)?,
        None => workflow.run_lines(stdin().lock())?
    };
    info!("Session ended with {} images", workflow.session().image_names().len());

    Ok(())
}
