//! Generation options and their defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::IdError;

/// Default length of the random segment.
pub const DEFAULT_RANDOM_LENGTH: usize = 13;

/// Default separator placed between components.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Case normalization applied to the random segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseOption {
    /// Uppercase the random segment (`0-9A-Z`).
    Upper,
    /// Lowercase the random segment (`0-9a-z`).
    Lower,
    /// Leave the segment as drawn.
    #[default]
    #[serde(alias = "")]
    None,
}

impl CaseOption {
    /// Returns the lowercase name of this option.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CaseOption::Upper => "upper",
            CaseOption::Lower => "lower",
            CaseOption::None => "none",
        }
    }

    /// Applies the normalization to `s`.
    #[must_use]
    pub fn apply(&self, s: &str) -> String {
        match self {
            CaseOption::Upper => s.to_ascii_uppercase(),
            CaseOption::Lower => s.to_ascii_lowercase(),
            CaseOption::None => s.to_string(),
        }
    }
}

impl fmt::Display for CaseOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseOption {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            Ok(CaseOption::None)
        } else if s.eq_ignore_ascii_case("upper") {
            Ok(CaseOption::Upper)
        } else if s.eq_ignore_ascii_case("lower") {
            Ok(CaseOption::Lower)
        } else {
            Err(IdError::invalid(
                "caseOption",
                format!("expected 'upper', 'lower' or 'none', got '{s}'"),
            ))
        }
    }
}

/// Options controlling the shape of a generated identifier.
///
/// Every field has a default, so `GenerationOptions::default()` yields
/// `{timestamp}.{13 random chars}`. Options deserialize from camelCase keys;
/// `timeStamp` and `length` are accepted as older spellings of
/// `includeTimestamp` and `randomLength`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    prefix: String,
    suffix: String,
    #[serde(alias = "timeStamp")]
    include_timestamp: bool,
    #[serde(alias = "length")]
    random_length: usize,
    separator: String,
    case_option: CaseOption,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            include_timestamp: true,
            random_length: DEFAULT_RANDOM_LENGTH,
            separator: DEFAULT_SEPARATOR.to_string(),
            case_option: CaseOption::None,
        }
    }
}

impl GenerationOptions {
    /// Creates options with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix. Surrounding whitespace is ignored at generation time.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the suffix. Surrounding whitespace is ignored at generation time.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Enables or disables the timestamp component.
    #[must_use]
    pub fn with_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    /// Sets the random segment length. Zero drops the segment.
    #[must_use]
    pub fn with_random_length(mut self, len: usize) -> Self {
        self.random_length = len;
        self
    }

    /// Sets the random segment length from a signed value.
    ///
    /// Negative lengths are rejected with [`IdError::InvalidArgument`].
    pub fn try_with_random_length(self, len: i64) -> Result<Self, IdError> {
        let len = usize::try_from(len)
            .map_err(|_| IdError::invalid("randomLength", format!("must be >= 0, got {len}")))?;
        Ok(self.with_random_length(len))
    }

    /// Sets the separator. Any string is accepted, including the empty one.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the case normalization for the random segment.
    #[must_use]
    pub fn with_case(mut self, case: CaseOption) -> Self {
        self.case_option = case;
        self
    }

    /// Returns the trimmed prefix, or `None` when it is blank.
    pub fn prefix(&self) -> Option<&str> {
        non_blank(&self.prefix)
    }

    /// Returns the trimmed suffix, or `None` when it is blank.
    pub fn suffix(&self) -> Option<&str> {
        non_blank(&self.suffix)
    }

    pub fn include_timestamp(&self) -> bool {
        self.include_timestamp
    }

    pub fn random_length(&self) -> usize {
        self.random_length
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn case_option(&self) -> CaseOption {
        self.case_option
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
