//! Configuration manager for the profile page.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::Credentials;
use crate::profile::Profile;
use crate::strings::Strings;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_LOCALE: &str = "en";
const DEFAULT_LOG_FILTER: &str = "profilepage=info";
const DEFAULT_WORKER_THREADS: usize = 2;

/// Errors while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read configuration file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("`worker_threads` must be at least 1")]
    NoWorkers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Locale of the string table.
    pub locale: String,
    /// `tracing` filter, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Threads of the worker runtime running backend calls.
    pub worker_threads: usize,
    /// Localized strings, by key.
    pub strings: HashMap<String, String>,
    /// Account seeded into the in-memory backend by the demo binary.
    #[serde(skip_serializing)]
    pub demo: Option<Demo>,
    #[serde(skip)]
    path: PathBuf,
    #[serde(skip)]
    source: Option<PathBuf>,
}

/// Demo account.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demo {
    pub credentials: Credentials,
    #[serde(default)]
    pub profile: Profile,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            worker_threads: DEFAULT_WORKER_THREADS,
            strings: HashMap::new(),
            demo: None,
            path: PathBuf::new(),
            source: None,
        }
    }
}

impl Configuration {
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    ///
    /// A missing file is not an error: defaults are used and
    /// [`Configuration::source`] stays `None`.
    pub fn read(self) -> Result<Arc<Self>, ConfigError> {
        let file_path = if self.path.is_file() {
            self.path.clone()
        } else {
            PathBuf::from(DEFAULT_CONFIG_PATH)
        };

        match File::open(&file_path) {
            Ok(file) => {
                let mut config = Self::parse(file)?;
                config.path = self.path;
                config.source = Some(file_path);
                Ok(Arc::new(config))
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Ok(Arc::new(self))
            },
            Err(err) => Err(err.into()),
        }
    }

    /// Parse a YAML configuration.
    pub fn parse(reader: impl Read) -> Result<Self, ConfigError> {
        let config: Configuration = serde_yaml::from_reader(reader)?;
        if config.worker_threads == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(config)
    }

    /// File the configuration was loaded from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// String table of the configured locale.
    pub fn strings(&self) -> Strings {
        Strings::new(&self.locale, self.strings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::StringKey;

    #[test]
    fn test_parse() {
        let yaml = r#"
locale: fr
worker_threads: 4
strings:
  error_retrieving_data: "Impossible de récupérer vos données."
demo:
  credentials:
    username: tj
    email: tj@example.com
    password: hunter2
  profile:
    name: TJ
    photoURL: ""
"#;
        let config = Configuration::parse(yaml.as_bytes()).unwrap();
        assert_eq!(config.locale, "fr");
        assert_eq!(config.worker_threads, 4);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(
            config.strings().resolve(StringKey::ErrorRetrievingData),
            "Impossible de récupérer vos données."
        );

        let demo = config.demo.unwrap();
        assert_eq!(demo.credentials.password(), "hunter2");
        assert_eq!(demo.profile.name, "TJ");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Configuration::parse("worker_threads: 0".as_bytes()),
            Err(ConfigError::NoWorkers)
        ));
        assert!(matches!(
            Configuration::parse("strings: [".as_bytes()),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_read_falls_back_to_default_path() {
        // Tests run from the crate root, which ships `config.yaml`.
        let config = Configuration::default()
            .path("does/not/exist.yaml")
            .read()
            .unwrap();
        assert_eq!(config.source(), Some(Path::new(DEFAULT_CONFIG_PATH)));
        assert!(config.demo.is_some());
    }
}
