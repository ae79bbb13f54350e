use crate::checker::tokenizer::DEFAULT_MAX_WORD_LENGTH;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".spchk.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File name suffixes picked up when walking directories, without the dot
    pub extensions: Vec<String>,

    pub max_word_length: usize,

    pub parallel: bool,

    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string()],
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            parallel: false,
            color: true,
        }
    }
}

/// One config file as written; keys it leaves out stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub extensions: Option<Vec<String>>,
    pub max_word_length: Option<usize>,
    pub parallel: Option<bool>,
    pub color: Option<bool>,
}

/// Settings given on the command line; `None`/empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub extensions: Vec<String>,
    pub max_word_length: Option<usize>,
    pub parallel: bool,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        config.apply(overrides)
    }

    pub fn from_file(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        toml::from_str(&contents).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(extensions) = layer.extensions {
            self.extensions = extensions;
        }
        if let Some(max) = layer.max_word_length {
            self.max_word_length = max;
        }
        if let Some(parallel) = layer.parallel {
            self.parallel = parallel;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Result<Self> {
        if !overrides.extensions.is_empty() {
            self.extensions = overrides.extensions;
        }
        if let Some(max) = overrides.max_word_length {
            self.max_word_length = max;
        }
        if overrides.parallel {
            self.parallel = true;
        }
        if overrides.no_color {
            self.color = false;
        }

        self.extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();

        if self.extensions.is_empty() {
            return Err(Error::Config("at least one file extension is required".into()));
        }
        if self.max_word_length == 0 {
            return Err(Error::Config("max_word_length must be greater than zero".into()));
        }

        Ok(self)
    }

    /// Whether a file name found during traversal should be checked.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            file_name.len() > ext.len()
                && file_name.ends_with(ext.as_str())
                && file_name.as_bytes()[file_name.len() - ext.len() - 1] == b'.'
        })
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spchk").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
