//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! Tests for the terminal [`Logger`].
//!
//! [`Logger`]: crate::integrations::log::Logger

use simplelog::LevelFilter;

use crate::error::GLibError;

use super::Logger;

#[test]
fn test_logger_init_twice() {
    assert!(Logger::init(LevelFilter::Warn).is_ok());
    assert!(matches!(Logger::init(LevelFilter::Warn), Err(GLibError::SetLoggerError(_))));
}
