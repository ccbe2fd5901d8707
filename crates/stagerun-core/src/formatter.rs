// Rust guideline compliant 2026-10-19

//! Formatter option set.
//!
//! The record serializes with the camelCase keys the external formatter and
//! its import-sorting plugin read, so it can be written out verbatim as a
//! formatter configuration file.

use crate::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default file name the options are written to.
pub const FORMATTER_CONFIG_FILE: &str = ".prettierrc.json";

/// Where the formatter inserts trailing commas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrailingComma {
    /// Wherever syntactically legal.
    #[default]
    All,
    /// Only where ES5 allows them.
    Es5,
    /// Never.
    None,
}

/// Formatting preferences handed to the external formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterOptions {
    /// Trailing comma placement.
    #[serde(default)]
    pub trailing_comma: TrailingComma,

    /// Indentation width in spaces.
    #[serde(default = "default_tab_width")]
    pub tab_width: u8,

    /// Terminate statements with semicolons.
    #[serde(default = "default_true")]
    pub semi: bool,

    /// Prefer single-quoted string literals.
    #[serde(default = "default_true")]
    pub single_quote: bool,

    /// Ordered regular expressions defining import groups. Imports matching
    /// none of them form an implicit group placed after the listed ones.
    #[serde(default = "default_import_order")]
    pub import_order: Vec<String>,

    /// Blank line between import groups.
    #[serde(default = "default_true")]
    pub import_order_separation: bool,

    /// Sort named specifiers inside one import statement.
    #[serde(default = "default_true")]
    pub import_order_sort_specifiers: bool,

    /// Keep namespace imports in their own group.
    #[serde(default = "default_true")]
    pub import_order_group_namespace_specifiers: bool,

    /// Compare case-insensitively when sorting.
    #[serde(default = "default_true")]
    pub import_order_case_insensitive: bool,
}

fn default_tab_width() -> u8 {
    2
}

fn default_true() -> bool {
    true
}

fn default_import_order() -> Vec<String> {
    vec!["^[./]".to_string(), "^@/(.*)$".to_string()]
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            trailing_comma: TrailingComma::All,
            tab_width: default_tab_width(),
            semi: true,
            single_quote: true,
            import_order: default_import_order(),
            import_order_separation: true,
            import_order_sort_specifiers: true,
            import_order_group_namespace_specifiers: true,
            import_order_case_insensitive: true,
        }
    }
}

impl FormatterOptions {
    /// Validates the option values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tabWidth` is zero
    /// - an `importOrder` entry is not a valid regular expression
    pub fn validate(&self) -> Result<()> {
        if self.tab_width == 0 {
            return Err(Error::InvalidConfig(
                "formatter.tabWidth must be greater than 0".to_string(),
            ));
        }

        for pattern in &self.import_order {
            Regex::new(pattern).map_err(|e| {
                Error::InvalidConfig(format!(
                    "formatter.importOrder entry {:?} is not a valid regex: {}",
                    pattern, e
                ))
            })?;
        }

        Ok(())
    }

    /// Serializes the options as pretty-printed JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Writes the options to `path` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_options() {
        let options = FormatterOptions::default();
        assert_eq!(options.trailing_comma, TrailingComma::All);
        assert_eq!(options.tab_width, 2);
        assert!(options.semi);
        assert!(options.single_quote);
        assert_eq!(options.import_order, vec!["^[./]", "^@/(.*)$"]);
        assert!(options.import_order_separation);
        assert!(options.import_order_sort_specifiers);
        assert!(options.import_order_group_namespace_specifiers);
        assert!(options.import_order_case_insensitive);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&FormatterOptions::default().to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["trailingComma"], "all");
        assert_eq!(json["tabWidth"], 2);
        assert_eq!(json["semi"], true);
        assert_eq!(json["singleQuote"], true);
        assert_eq!(json["importOrder"][1], "^@/(.*)$");
        assert_eq!(json["importOrderGroupNamespaceSpecifiers"], true);
        assert_eq!(json["importOrderCaseInsensitive"], true);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let options: FormatterOptions =
            serde_json::from_str(r#"{ "tabWidth": 4, "trailingComma": "es5" }"#).unwrap();
        assert_eq!(options.tab_width, 4);
        assert_eq!(options.trailing_comma, TrailingComma::Es5);
        assert!(options.single_quote);
        assert_eq!(options.import_order.len(), 2);
    }

    #[test]
    fn test_validate_rejects_zero_tab_width() {
        let options = FormatterOptions {
            tab_width: 0,
            ..FormatterOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_regex() {
        let options = FormatterOptions {
            import_order: vec!["^(unclosed".to_string()],
            ..FormatterOptions::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("importOrder"));
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(FORMATTER_CONFIG_FILE);
        FormatterOptions::default().write_to(&path).unwrap();
        let read_back: FormatterOptions =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read_back, FormatterOptions::default());
    }
}
