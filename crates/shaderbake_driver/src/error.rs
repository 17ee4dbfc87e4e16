use std::{ffi::OsString, io};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Failed to list shader directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to launch shader compiler {program:?}: {source}")]
    Spawn {
        program: OsString,
        #[source]
        source: io::Error,
    },
}
