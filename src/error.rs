// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for text file and font I/O.
//!
//! Only conditions that stop an invocation are errors. Problems with a
//! single line of an anchor file are reported as
//! [`Diagnostic`](crate::anchors::Diagnostic)s instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for anchor operations.
pub type Result<T> = std::result::Result<T, AnchorsError>;

/// Errors that abort an anchor operation.
#[derive(Error, Debug)]
pub enum AnchorsError {
    /// An input file (or directory) could not be read.
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be created or written.
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A UFO could not be loaded.
    #[error("failed to load UFO from {path:?}")]
    LoadFont {
        path: PathBuf,
        #[source]
        source: norad::error::FontLoadError,
    },

    /// A UFO could not be saved.
    #[error("failed to save UFO to {path:?}")]
    SaveFont {
        path: PathBuf,
        #[source]
        source: norad::error::FontWriteError,
    },

    /// No single encoding file to pick next to a font.
    #[error("expected one .enc file in {dir:?}, found {found}")]
    EncodingFile { dir: PathBuf, found: usize },

    /// A name is not allowed in a UFO (empty, or contains control characters).
    #[error("invalid name '{0}'")]
    InvalidName(String),
}
