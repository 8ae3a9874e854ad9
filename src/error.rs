//! Error types for cmdnotify

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Too few arguments!\nUsage: cmdnotify <program> [args...]")]
    Usage,

    #[error("invalid program name {0:?}: expected a bare executable name")]
    InvalidProgramName(String),

    #[error("refusing to run commands as root")]
    Superuser,

    #[error("notifier not found at {}", .0.display())]
    NotifierMissing(PathBuf),

    #[error("program not found at {}", .0.display())]
    ProgramMissing(PathBuf),

    #[error("failed to wait on child: {0}")]
    Wait(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
