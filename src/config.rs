use serde::Deserialize;
use std::path::PathBuf;

fn default_bin_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("/bin")]
}

fn default_notifier() -> String {
    "notify-send".to_string()
}

fn default_timeout() -> u32 {
    3500
}

fn default_success_urgency() -> Urgency {
    Urgency::Normal
}

fn default_failure_urgency() -> Urgency {
    Urgency::Critical
}

fn default_max_command_len() -> usize {
    200
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Normal,
    Critical,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: General,

    #[serde(default)]
    pub notification: NotifyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// Directories searched, in order, for both the wrapped program and the
    /// notifier. `PATH` is never consulted.
    #[serde(default = "default_bin_dirs", rename = "bin-dirs")]
    pub bin_dirs: Vec<PathBuf>,

    #[serde(default = "default_notifier")]
    pub notifier: String,
}

impl Default for General {
    fn default() -> Self {
        Self {
            bin_dirs: default_bin_dirs(),
            notifier: default_notifier(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    /// Display duration handed to the notifier, in milliseconds.
    #[serde(default = "default_timeout")]
    pub timeout: u32,

    #[serde(default = "default_success_urgency", rename = "success-urgency")]
    pub success_urgency: Urgency,

    #[serde(default = "default_failure_urgency", rename = "failure-urgency")]
    pub failure_urgency: Urgency,

    #[serde(default = "default_max_command_len", rename = "max-command-len")]
    pub max_command_len: usize,

    #[serde(default, rename = "app-name")]
    pub app_name: Option<String>,

    #[serde(default)]
    pub icon: Option<String>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            success_urgency: default_success_urgency(),
            failure_urgency: default_failure_urgency(),
            max_command_len: default_max_command_len(),
            app_name: None,
            icon: None,
        }
    }
}

impl Config {
    /// Load config from `~/.config/cmdnotify/config.toml`.
    ///
    /// Returns defaults if the file is missing. A file that cannot be read
    /// or fails to parse also yields defaults, with a warning in the log.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config");
                return Self::default();
            }
        };
        Self::parse(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparseable config");
            Self::default()
        })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub(crate) fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("cmdnotify").join("config.toml"))
    }
}
