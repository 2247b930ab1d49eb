//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

/*!
Module to log messages from the lib to the terminal.

The lib logs through the `log` facade, so any logger works. This is just a quick way to get one for tools and
tests that don't bring their own. Note that it needs to be initialized by calling `Logger::init()`.
!*/

pub use log::{info, warn};
use simplelog::{ColorChoice, CombinedLogger, LevelFilter, SharedLogger, TermLogger, TerminalMode};

use crate::error::Result;

#[cfg(test)] mod log_test;

//-------------------------------------------------------------------------------//
//                              Enums & Structs
//-------------------------------------------------------------------------------//

/// This struct is the entry point to set up the terminal logger.
#[derive(Debug)]
pub struct Logger;

//-------------------------------------------------------------------------------//
//                              Implementations
//-------------------------------------------------------------------------------//

impl Logger {

    /// This function initializes a terminal logger for everything logged with a level of `level` or higher.
    ///
    /// Only one logger can be set per program. If there's already one, this returns an error.
    pub fn init(level: LevelFilter) -> Result<()> {
        let loggers: Vec<Box<dyn SharedLogger + 'static>> = vec![TermLogger::new(level, simplelog::Config::default(), TerminalMode::Mixed, ColorChoice::Auto)];
        let combined_logger = CombinedLogger::new(loggers);

        log::set_boxed_logger(combined_logger)?;
        log::set_max_level(level);

        info!("Logger initialized.");
        Ok(())
    }
}
