//! Configuration file support for aurora.
//!
//! Loads optional `aurora.toml` from the working directory. Every key is
//! optional; command-line flags win over the file, the file wins over the
//! built-in defaults.
//!
//! ```toml
//! [site]
//! title = "Northwind – Ship faster"
//! description = "Our product homepage"
//! lang = "en"
//!
//! [assets]
//! stylesheet = "assets/tailwind.css"
//!
//! [output]
//! path = "dist/index.html"
//! ```

use std::path::{Path, PathBuf};

use aurora_page::{PageOptions, SiteMeta};
use serde::Deserialize;
use tracing::{debug, warn};

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuroraConfig {
    pub site: SiteConfig,
    pub assets: AssetsConfig,
    pub output: OutputConfig,
}

/// Document metadata overrides
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Href of the compiled utility-class stylesheet
    pub stylesheet: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where `aurora render` writes when `--out` is not given
    pub path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl AuroraConfig {
    pub const FILE_NAME: &'static str = "aurora.toml";

    /// Load `aurora.toml` from `root` if present.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn discover(root: &Path) -> Self {
        let path = root.join(Self::FILE_NAME);
        if !path.exists() {
            debug!("no {} in {}", Self::FILE_NAME, root.display());
            return Self::default();
        }

        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}: {}; using defaults", error_source(&err));
                Self::default()
            }
        }
    }

    /// Load config from a specific path. Missing or malformed files are errors.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Page options for `year`, with configured metadata over the defaults.
    pub fn page_options(&self, year: i32) -> PageOptions {
        let defaults = SiteMeta::default();
        PageOptions {
            meta: SiteMeta {
                title: self.site.title.clone().unwrap_or(defaults.title),
                description: self.site.description.clone().unwrap_or(defaults.description),
                lang: self.site.lang.clone().unwrap_or(defaults.lang),
            },
            stylesheet_href: self.assets.stylesheet.clone(),
            year,
        }
    }
}

fn error_source(err: &ConfigError) -> String {
    match err {
        ConfigError::Read { source, .. } => source.to_string(),
        ConfigError::Parse { source, .. } => source.message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AuroraConfig::default();
        assert!(config.site.title.is_none());
        assert!(config.assets.stylesheet.is_none());
        assert!(config.output.path.is_none());

        let options = config.page_options(2026);
        assert_eq!(options, PageOptions::for_year(2026));
    }

    #[test]
    fn test_discover_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        assert_eq!(AuroraConfig::discover(temp.path()), AuroraConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join(AuroraConfig::FILE_NAME),
            r#"
[site]
title = "Northwind"
lang = "de"

[assets]
stylesheet = "assets/app.css"

[output]
path = "dist/index.html"
"#,
        )
        .expect("write config");

        let config = AuroraConfig::discover(temp.path());
        assert_eq!(config.site.title.as_deref(), Some("Northwind"));
        assert_eq!(config.output.path, Some(PathBuf::from("dist/index.html")));

        let options = config.page_options(2030);
        assert_eq!(options.meta.title, "Northwind");
        assert_eq!(options.meta.lang, "de");
        assert_eq!(options.meta.description, SiteMeta::default().description);
        assert_eq!(options.stylesheet_href.as_deref(), Some("assets/app.css"));
        assert_eq!(options.year, 2030);
    }

    #[test]
    fn test_discover_invalid_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(AuroraConfig::FILE_NAME), "[site\ntitle = ")
            .expect("write config");

        assert_eq!(AuroraConfig::discover(temp.path()), AuroraConfig::default());
    }

    #[test]
    fn test_explicit_invalid_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[assets]\nstylesheet = 42\n").expect("write config");

        let err = AuroraConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn test_explicit_missing_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = AuroraConfig::load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
