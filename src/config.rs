use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::Locale;

pub const CONFIG_FILE_NAME: &str = ".kartorc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding `<locale>.json` tables. Unset means the tables
    /// compiled into the binary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages_root: Option<String>,
    /// Locale a fresh resolver starts in.
    #[serde(default)]
    pub default_locale: Locale,
    /// Locale the other tables are compared against.
    #[serde(default)]
    pub primary_locale: Locale,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_true")]
    pub ignore_test_files: bool,
    /// Refuse to resolve from tables whose shapes differ.
    #[serde(default = "default_true")]
    pub strict_shape: bool,
}

fn default_includes() -> Vec<String> {
    ["src", "app", "components"].map(String::from).to_vec()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: None,
            default_locale: Locale::default(),
            primary_locale: Locale::default(),
            includes: default_includes(),
            ignores: Vec::new(),
            ignore_test_files: true,
            strict_shape: true,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }

    /// Messages directory resolved against `root_dir`, if one is configured.
    pub fn messages_dir(&self, root_dir: &Path) -> Option<PathBuf> {
        self.messages_root.as_ref().map(|root| {
            let p = Path::new(root);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                root_dir.join(p.strip_prefix(".").unwrap_or(p))
            }
        })
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` looking for the config file, stopping at the
/// repository root (a directory containing `.git`).
///
/// Relative starts such as `.` are made absolute first so the walk can
/// leave them.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.ignores.is_empty());
        assert!(config.messages_root.is_none());
        assert_eq!(config.default_locale, Locale::Fr);
        assert_eq!(config.primary_locale, Locale::Fr);
        assert!(config.strict_shape);
        assert!(config.ignore_test_files);
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "messagesRoot": "./messages",
              "defaultLocale": "en",
              "primaryLocale": "en",
              "includes": ["components"],
              "strictShape": false
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.messages_root.as_deref(), Some("./messages"));
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.primary_locale, Locale::En);
        assert_eq!(config.includes, vec!["components"]);
        assert!(!config.strict_shape);
    }

    #[test]
    fn test_parse_config_rejects_unknown_locale() {
        let json = r#"{ "defaultLocale": "de" }"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "ignores": ["**/dist/**"] }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.ignores, vec!["**/dist/**"]);
        assert_eq!(config.includes, default_includes());
        assert!(config.strict_shape);
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let expected = dir.path().canonicalize().unwrap().join(CONFIG_FILE_NAME);
        assert_eq!(find_config_file(&sub_dir), Some(expected.clone()));
        assert_eq!(
            find_config_file(&sub_dir.join("..").join("..")),
            Some(expected)
        );
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["**/test/**"] }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.ignores, vec!["**/test/**"]);
    }

    #[test]
    fn test_load_config_with_invalid_pattern_fails() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["[invalid"] }"#,
        )
        .unwrap();

        let err = load_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains("ignores"));
    }

    #[test]
    fn test_validate_literal_include_with_brackets() {
        let config = Config {
            includes: vec!["app/[locale]".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_messages_dir_resolution() {
        let root = Path::new("/project");

        let config = Config::default();
        assert_eq!(config.messages_dir(root), None);

        let config = Config {
            messages_root: Some("./messages".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.messages_dir(root),
            Some(PathBuf::from("/project/messages"))
        );

        let config = Config {
            messages_root: Some("/srv/messages".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.messages_dir(root),
            Some(PathBuf::from("/srv/messages"))
        );
    }

    #[test]
    fn test_default_config_json_omits_messages_root() {
        let json = default_config_json().unwrap();
        assert!(!json.contains("messagesRoot"));
        assert!(json.contains("\"defaultLocale\": \"fr\""));
        assert!(json.contains("\"strictShape\": true"));
    }
}
