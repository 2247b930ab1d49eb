//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Gamingway project.
//
// This file is licensed under the MIT license.
//---------------------------------------------------------------------------//

//! This module contains integrations with external crates, each one of them behind its own feature.

#[cfg(feature = "integration_log")] pub mod log;
