use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".podistrc.json";

/// A group of project files installed into one target directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DataFiles {
    /// Absolute targets are placed under the install root, relative ones
    /// under `<root><prefix>`.
    pub target: String,
    pub files: Vec<String>,
}

/// Program names for the gettext tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsConfig {
    #[serde(default = "default_xgettext")]
    pub xgettext: String,
    #[serde(default = "default_msgmerge")]
    pub msgmerge: String,
    #[serde(default = "default_msgfmt")]
    pub msgfmt: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_long_description")]
    pub long_description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_email: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_license")]
    pub license: String,
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
    #[serde(default = "default_scripts")]
    pub scripts: Vec<String>,
    #[serde(default = "default_data_files")]
    pub data_files: Vec<DataFiles>,
    #[serde(default = "default_po_dir")]
    pub po_dir: String,
    /// Files scanned for translatable strings. Empty means the main script.
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_keyword")]
    pub keyword: String,
    #[serde(default = "default_build_dir")]
    pub build_dir: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_locale_dir")]
    pub locale_dir: String,
    #[serde(default)]
    pub tools: ToolsConfig,
}

fn default_name() -> String {
    "install-brother-printer".to_string()
}

fn default_version() -> String {
    "0.1".to_string()
}

fn default_description() -> String {
    "Simple tool to install Brother printer drivers".to_string()
}

fn default_long_description() -> String {
    "A GUI tool for installing Brother printer drivers over the Internet".to_string()
}

fn default_license() -> String {
    "GPLv2".to_string()
}

fn default_platforms() -> Vec<String> {
    vec!["Linux".to_string()]
}

fn default_scripts() -> Vec<String> {
    vec![default_name()]
}

fn default_data_files() -> Vec<DataFiles> {
    vec![DataFiles {
        target: "/usr/share/brother-driver-installer".to_string(),
        files: vec!["LICENSE.driver".to_string()],
    }]
}

fn default_po_dir() -> String {
    "po".to_string()
}

fn default_source_language() -> String {
    "Python".to_string()
}

fn default_keyword() -> String {
    "_".to_string()
}

fn default_build_dir() -> String {
    "build".to_string()
}

fn default_prefix() -> String {
    "/usr".to_string()
}

fn default_locale_dir() -> String {
    "usr/share/locale".to_string()
}

fn default_xgettext() -> String {
    "xgettext".to_string()
}

fn default_msgmerge() -> String {
    "msgmerge".to_string()
}

fn default_msgfmt() -> String {
    "msgfmt".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            xgettext: default_xgettext(),
            msgmerge: default_msgmerge(),
            msgfmt: default_msgfmt(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            description: default_description(),
            long_description: default_long_description(),
            author: String::new(),
            author_email: String::new(),
            url: String::new(),
            license: default_license(),
            platforms: default_platforms(),
            scripts: default_scripts(),
            data_files: default_data_files(),
            po_dir: default_po_dir(),
            sources: Vec::new(),
            source_language: default_source_language(),
            keyword: default_keyword(),
            build_dir: default_build_dir(),
            prefix: default_prefix(),
            locale_dir: default_locale_dir(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The package name ends up in file names (`<name>.pot`, `<name>.mo`),
    /// so it must be a single non-empty path segment.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("'name' must not be empty");
        }
        if self.name.contains('/') || self.name.contains('\\') {
            bail!("'name' must not contain path separators: \"{}\"", self.name);
        }
        if self.po_dir.trim().is_empty() {
            bail!("'poDir' must not be empty");
        }
        if self.locale_dir.trim().is_empty() {
            bail!("'localeDir' must not be empty");
        }

        for (key, program) in [
            ("tools.xgettext", &self.tools.xgettext),
            ("tools.msgmerge", &self.tools.msgmerge),
            ("tools.msgfmt", &self.tools.msgfmt),
        ] {
            if program.trim().is_empty() {
                bail!("'{}' must not be empty", key);
            }
        }

        for group in &self.data_files {
            if group.target.trim().is_empty() {
                bail!("'dataFiles' entry has an empty target");
            }
            reject_parent_dir("dataFiles[].target", &group.target)?;
        }

        // These are joined below the install root.
        reject_parent_dir("prefix", &self.prefix)?;
        reject_parent_dir("localeDir", &self.locale_dir)?;

        Ok(())
    }

    /// Package metadata as labelled values, skipping unset fields.
    pub fn metadata(&self) -> Vec<(&'static str, String)> {
        let author = match (self.author.is_empty(), self.author_email.is_empty()) {
            (false, false) => format!("{} <{}>", self.author, self.author_email),
            (false, true) => self.author.clone(),
            (true, _) => self.author_email.clone(),
        };

        [
            ("name", self.name.clone()),
            ("version", self.version.clone()),
            ("description", self.description.clone()),
            ("long description", self.long_description.clone()),
            ("author", author),
            ("url", self.url.clone()),
            ("license", self.license.clone()),
            ("platforms", self.platforms.join(", ")),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    /// Files handed to the extraction tool.
    pub fn source_files(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![self.name.clone()]
        } else {
            self.sources.clone()
        }
    }
}

fn reject_parent_dir(key: &str, value: &str) -> Result<()> {
    if Path::new(value)
        .components()
        .any(|c| c == Component::ParentDir)
    {
        bail!("'{}' must not contain '..': \"{}\"", key, value);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file location, or None when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
