use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default lexicons shipped with the repository, embedded at compile time.
pub const BUILTIN_LEXICONS_YAML: &str = include_str!("../../../config/lexicons.yaml");

/// Raw lexicon lists as they appear in the YAML file.
///
/// Entries are single words or space-separated phrases. Duplicates are legal
/// and collapse once the lists are turned into sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconsFile {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub suggestion: Vec<String>,
}

impl LexiconsFile {
    /// The built-in lexicons.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded YAML fails to parse or validate.
    pub fn builtin() -> Result<Self, ConfigError> {
        parse_lexicons(BUILTIN_LEXICONS_YAML)
    }

    /// Iterate `(list name, entries)` in the fixed positive, negative, suggestion order.
    pub fn lists(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            ("positive", self.positive.as_slice()),
            ("negative", self.negative.as_slice()),
            ("suggestion", self.suggestion.as_slice()),
        ]
        .into_iter()
    }
}

/// Load and validate lexicons from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_lexicons(path: &Path) -> Result<LexiconsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_lexicons(&content)
}

/// Parse and validate lexicons from a YAML string.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_lexicons(content: &str) -> Result<LexiconsFile, ConfigError> {
    let lexicons: LexiconsFile =
        serde_yaml::from_str(content).map_err(ConfigError::LexiconFileParse)?;

    validate_lexicons(&lexicons)?;

    Ok(lexicons)
}

fn validate_lexicons(lexicons: &LexiconsFile) -> Result<(), ConfigError> {
    for (name, entries) in lexicons.lists() {
        if entries.is_empty() {
            return Err(ConfigError::Validation(format!(
                "{name} lexicon must contain at least one entry"
            )));
        }

        for entry in entries {
            if entry.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{name} lexicon contains a blank entry"
                )));
            }

            // Normalized tokens are lowercase ASCII letters, so anything else
            // could never match.
            let well_formed = entry
                .split(' ')
                .all(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()));
            if !well_formed {
                return Err(ConfigError::Validation(format!(
                    "{name} lexicon entry '{entry}' must be lowercase letters \
                     separated by single spaces"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "lexicons_test.rs"]
mod tests;
