//! Helpers shared by the integration tests

#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use cmdnotify::config::{Config, General, NotifyConfig};
use tempfile::TempDir;

/// Serializes tests that write executables, so no concurrently forked
/// child can hold a stub open for writing when it is exec'd (ETXTBSY).
pub static EXEC_LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());

pub const STUB_NOTIFIER: &str = "notify-send";

/// A bin directory holding a stub notifier that records its arguments,
/// one per line, in `notify.log`.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("bin")).unwrap();
        let sandbox = Self { dir };
        let log = sandbox.notify_log();
        sandbox.write_script(
            STUB_NOTIFIER,
            &format!("printf '%s\\n' \"$@\" > '{}'\n", log.display()),
        );
        sandbox
    }

    pub fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    pub fn notify_log(&self) -> PathBuf {
        self.dir.path().join("notify.log")
    }

    pub fn marker(&self) -> PathBuf {
        self.dir.path().join("ran")
    }

    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.bin().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Config searching the sandbox first, then the system `/bin` for
    /// real programs like `true` and `sh`.
    pub fn config(&self) -> Config {
        Config {
            general: General {
                bin_dirs: vec![self.bin(), PathBuf::from("/bin")],
                notifier: STUB_NOTIFIER.to_string(),
            },
            notification: NotifyConfig::default(),
        }
    }

    /// Arguments the stub notifier was called with, if it ran.
    pub fn notified(&self) -> Option<Vec<String>> {
        read_lines(&self.notify_log())
    }

    /// Write a config pointing at the sandbox under
    /// `<dir>/config/cmdnotify/config.toml`, for use as `XDG_CONFIG_HOME`
    /// when running the binary.
    pub fn write_config_home(&self) -> PathBuf {
        self.write_config_home_with(&format!(
            "[general]\nbin-dirs = [\"{}\", \"/bin\"]\nnotifier = \"{STUB_NOTIFIER}\"\n",
            self.bin().display()
        ))
    }

    pub fn write_config_home_with(&self, contents: &str) -> PathBuf {
        let home = self.config_home();
        fs::create_dir_all(home.join("cmdnotify")).unwrap();
        fs::write(home.join("cmdnotify").join("config.toml"), contents).unwrap();
        home
    }

    pub fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }
}

fn read_lines(path: &Path) -> Option<Vec<String>> {
    let contents = fs::read_to_string(path).ok()?;
    Some(contents.lines().map(str::to_string).collect())
}

pub fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("cmdnotify")
        .chain(args.iter().copied())
        .map(str::to_string)
        .collect()
}
