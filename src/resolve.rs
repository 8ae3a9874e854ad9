use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Resolves bare executable names against a fixed list of directories.
#[derive(Debug, Clone)]
pub struct Resolver {
    dirs: Vec<PathBuf>,
}

impl Resolver {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Return the first `dir/name` that exists.
    ///
    /// On a miss the path under the first directory is returned as the
    /// error so callers can report where they looked.
    pub fn locate(&self, name: impl AsRef<OsStr>) -> Result<PathBuf, PathBuf> {
        let name = Path::new(name.as_ref());
        self.dirs
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.exists())
            .ok_or_else(|| match self.dirs.first() {
                Some(dir) => dir.join(name),
                None => name.to_path_buf(),
            })
    }
}
