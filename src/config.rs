//! TOML configuration for the renderers.
//!
//! ```toml
//! [html]
//! list_class = "list-disc list-inside"
//! bullet_rule = "list-block"
//!
//! [description]
//! bullet_rule = "description"
//! ```

use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf};
use thiserror::Error;

use crate::bullet::BulletRuleName;
use crate::list_block::DEFAULT_LIST_CLASS;
use crate::renderer::{DescriptionRendererOptions, HtmlRendererOptions};

const CONFIG_NAMESPACE: &str = "cms-markup";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub html: HtmlSection,
    #[serde(default)]
    pub description: DescriptionSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlSection {
    #[serde(default = "default_list_class")]
    pub list_class: String,
    #[serde(default = "default_html_rule")]
    pub bullet_rule: BulletRuleName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionSection {
    #[serde(default = "default_description_rule")]
    pub bullet_rule: BulletRuleName,
}

fn default_list_class() -> String {
    DEFAULT_LIST_CLASS.to_string()
}

fn default_html_rule() -> BulletRuleName {
    BulletRuleName::ListBlock
}

fn default_description_rule() -> BulletRuleName {
    BulletRuleName::Description
}

impl Default for HtmlSection {
    fn default() -> Self {
        Self {
            list_class: default_list_class(),
            bullet_rule: default_html_rule(),
        }
    }
}

impl Default for DescriptionSection {
    fn default() -> Self {
        Self {
            bullet_rule: default_description_rule(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoadResult {
    pub config: Config,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to determine configuration directory via XDG environment variables")]
    MissingConfigDir,
    #[error("failed to read config file at {path:?}: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config file at {path:?}: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
        path: PathBuf,
    },
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config_text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        toml::from_str(&config_text).map_err(|source| ConfigError::Parse {
            source,
            path: path.to_path_buf(),
        })
    }

    pub fn html_options(&self) -> HtmlRendererOptions {
        HtmlRendererOptions {
            list_class: self.html.list_class.clone(),
            bullet_rule: self.html.bullet_rule.rule(),
        }
    }

    pub fn description_options(&self, pretty: bool) -> DescriptionRendererOptions {
        DescriptionRendererOptions {
            bullet_rule: self.description.bullet_rule.rule(),
            pretty,
        }
    }
}

/// Loads the config from the default location. A missing file is not an error.
pub fn load_config() -> Result<Option<ConfigLoadResult>, ConfigError> {
    let path = match resolve_config_path() {
        Ok(path) => path,
        Err(ConfigError::MissingConfigDir) => return Ok(None),
        Err(err) => return Err(err),
    };

    if !path.exists() {
        return Ok(None);
    }

    let config = Config::load_from_path(&path)?;
    Ok(Some(ConfigLoadResult { config, path }))
}

pub fn resolve_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_home_dir()?
        .join(CONFIG_NAMESPACE)
        .join(CONFIG_FILENAME))
}

fn config_home_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(dir));
    }

    #[cfg(windows)]
    if let Some(dir) = env::var_os("APPDATA") {
        return Ok(PathBuf::from(dir));
    }

    if let Some(home) = env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".config"));
    }

    Err(ConfigError::MissingConfigDir)
}
