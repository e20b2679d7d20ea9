// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type.
//!
//! Store operations themselves never fail: a stale or unknown toast id is a
//! no-op. Errors only arise at the edges, when reading or writing the
//! configuration file, installing the process-wide store, or starting the
//! timer runtime.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// The process-wide store was already created or installed.
    #[error("a process-wide toast store is already installed")]
    AlreadyInstalled,

    /// The dedicated timer runtime could not be started.
    #[error("failed to start timer runtime")]
    Runtime(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
