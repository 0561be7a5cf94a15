use std::{
    cell::OnceCell,
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        AllLocaleMessages, Catalog, KeyUsage, Locale, LocaleMessages, ShapeDrift,
        file_scanner::scan_files,
        parsers::{
            calls::extract_key_usages,
            json::{MessageScanWarning, scan_message_files},
        },
    },
    issues::ParseErrorIssue,
};

/// Configuration merged from CLI arguments, the config file and defaults,
/// plus the directory it applies to.
pub struct Project {
    pub config: Config,
    pub root_dir: PathBuf,
}

impl Project {
    /// Load configuration with priority CLI args > `.kartorc.json` > defaults.
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let root_dir = common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            tracing::debug!("no .kartorc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(primary_locale) = common.primary_locale {
            config.primary_locale = primary_locale;
        }
        if let Some(ref messages_root) = common.messages_root {
            config.messages_root = Some(messages_root.to_string_lossy().into_owned());
        }

        Ok(Self { config, root_dir })
    }

    pub fn messages_dir(&self) -> Option<PathBuf> {
        self.config.messages_dir(&self.root_dir)
    }

    /// Catalog for resolving: the configured tables or the bundled ones,
    /// with the configured primary locale.
    ///
    /// With `strictShape` on, tables that disagree are refused.
    pub fn open_catalog(&self) -> Result<Catalog> {
        let catalog = match self.messages_dir() {
            Some(dir) => Catalog::from_dir(&dir, self.config.primary_locale)?.0,
            None => Catalog::bundled()?.with_primary(self.config.primary_locale),
        };
        if self.config.strict_shape {
            catalog.ensure_consistent()?;
        }
        Ok(catalog)
    }
}

/// Everything a `check` run needs, loaded once.
///
/// Message tables are loaded eagerly so configuration problems surface
/// before any rule runs. Source files are read and scanned for call sites
/// lazily, on first use.
pub struct CheckContext {
    pub config: Config,

    pub root_dir: PathBuf,

    /// Source files to scan for call sites (TSX/JSX/TS/JS).
    pub files: BTreeSet<String>,

    /// Tables for every locale; locales without a usable file get an
    /// empty table and are listed in `unavailable`.
    pub catalog: Catalog,

    /// Locales whose file was missing or unparsable.
    pub unavailable: Vec<Locale>,

    /// Number of locale files that loaded.
    pub locale_files_checked: usize,

    message_parse_errors: Vec<ParseErrorIssue>,

    key_usages: OnceCell<Vec<KeyUsage>>,

    source_read_errors: OnceCell<Vec<ParseErrorIssue>>,

    shape_drift: OnceCell<Vec<ShapeDrift>>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// Tables are loaded permissively: shape drift is what `check` reports,
    /// so `strictShape` does not apply here.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - Messages directory doesn't exist
    /// - Primary locale messages are not found
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let Project { config, root_dir } = Project::load(common)?;
        let messages_dir = config.messages_dir(&root_dir);

        let (scan_result, loaded) = rayon::join(
            || {
                scan_files(
                    &root_dir,
                    &config.includes,
                    &config.ignores,
                    config.ignore_test_files,
                )
            },
            || load_messages(messages_dir.as_deref()),
        );

        if scan_result.skipped_count > 0 {
            tracing::warn!(
                count = scan_result.skipped_count,
                "paths skipped due to access errors"
            );
        }

        let (mut messages, warnings) = loaded?;

        let message_parse_errors: Vec<ParseErrorIssue> = warnings
            .iter()
            .map(|warning| ParseErrorIssue {
                file_path: warning.file_path.clone(),
                error: warning.error.clone(),
            })
            .collect();

        let location = messages_dir
            .as_deref()
            .map_or_else(|| "bundled tables".to_string(), |d| d.display().to_string());

        if !messages.contains_key(&config.primary_locale) {
            return Err(anyhow!(
                "Primary locale '{}' messages not found in '{}'",
                config.primary_locale,
                location
            ));
        }

        let locale_files_checked = messages.len();
        let mut unavailable = Vec::new();
        for locale in Locale::ALL {
            if !messages.contains_key(&locale) {
                tracing::warn!(locale = %locale, "no usable messages, skipping locale");
                unavailable.push(locale);
                let file_path = match messages_dir.as_deref() {
                    Some(dir) => dir.join(format!("{}.json", locale)).display().to_string(),
                    None => format!("messages/{}.json", locale),
                };
                messages.insert(locale, LocaleMessages::new(locale, file_path));
            }
        }

        let catalog = Catalog::from_messages(messages, config.primary_locale)?;

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            catalog,
            unavailable,
            locale_files_checked,
            message_parse_errors,
            key_usages: OnceCell::new(),
            source_read_errors: OnceCell::new(),
            shape_drift: OnceCell::new(),
        })
    }

    /// Locales that have a usable table, in locale order.
    pub fn available_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| !self.unavailable.contains(locale))
            .collect()
    }

    /// Literal `t()` / `ta()` call sites in all source files (lazy).
    ///
    /// Files are read and scanned in parallel; unreadable files are
    /// collected separately and can be retrieved via `source_read_errors()`.
    pub fn key_usages(&self) -> &[KeyUsage] {
        self.key_usages.get_or_init(|| {
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| {
                    let usages = std::fs::read_to_string(file_path)
                        .map(|source| extract_key_usages(file_path, &source));
                    (file_path, usages)
                })
                .collect();

            let mut usages = Vec::new();
            let mut errors = Vec::new();
            for (file_path, result) in results {
                match result {
                    Ok(found) => usages.extend(found),
                    Err(e) => {
                        tracing::warn!(file = %file_path, error = %e, "failed to read source file");
                        errors.push(ParseErrorIssue {
                            file_path: file_path.clone(),
                            error: format!("Failed to read file: {}", e),
                        });
                    }
                }
            }

            tracing::debug!(
                files = self.files.len(),
                usages = usages.len(),
                "extracted call sites"
            );
            let _ = self.source_read_errors.set(errors);
            usages
        })
    }

    /// Unreadable source files. Populated when `key_usages()` first runs.
    pub fn source_read_errors(&self) -> &[ParseErrorIssue] {
        self.source_read_errors.get_or_init(Vec::new)
    }

    /// Message files that could not be loaded.
    pub fn message_parse_errors(&self) -> &[ParseErrorIssue] {
        &self.message_parse_errors
    }

    /// Shape drift against the primary locale, excluding unavailable
    /// locales (lazy).
    pub fn shape_drift(&self) -> &[ShapeDrift] {
        self.shape_drift.get_or_init(|| {
            self.catalog
                .shape_drift()
                .into_iter()
                .filter(|drift| !self.unavailable.contains(&drift.locale))
                .collect()
        })
    }
}

/// Tables from `dir`, or the bundled ones when no directory is configured.
fn load_messages(dir: Option<&Path>) -> Result<(AllLocaleMessages, Vec<MessageScanWarning>)> {
    match dir {
        Some(dir) => {
            let scanned = scan_message_files(dir)?;
            Ok((scanned.messages, scanned.warnings))
        }
        None => {
            let catalog = Catalog::bundled()?;
            let mut messages = AllLocaleMessages::new();
            for table in catalog.tables() {
                messages.insert(table.locale, table.clone());
            }
            Ok((messages, Vec::new()))
        }
    }
}
