use std::ffi::{OsStr, OsString};

use crate::error::{Error, Result};

/// The program to wrap and its argument vector, exactly as given on the
/// command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandSpec {
    /// Build from the tool's full argv, including argv[0].
    pub fn from_args<I>(argv: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut rest = argv.into_iter().skip(1).map(Into::into);
        let program = rest.next().ok_or(Error::Usage)?;

        let name = program.to_string_lossy();
        if name.is_empty() || name.contains('/') {
            return Err(Error::InvalidProgramName(name.into_owned()));
        }

        Ok(Self {
            program,
            args: rest.collect(),
        })
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Human-readable command line. Only used for display; execution always
    /// goes through the argument vector.
    pub fn display(&self) -> String {
        let mut out = self.program.to_string_lossy().into_owned();
        for arg in &self.args {
            out.push(' ');
            out.push_str(&arg.to_string_lossy());
        }
        out
    }
}
