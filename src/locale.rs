//! Locale-aware number parsing.

use tracing::warn;

use crate::error::SchemaError;

/// Separators used when numbers are written for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub decimal_separator: char,
    pub group_separator: char,
}

impl Default for Locale {
    fn default() -> Self {
        Self::C
    }
}

impl Locale {
    /// `1,234.5`
    pub const C: Locale = Locale {
        decimal_separator: '.',
        group_separator: ',',
    };

    /// `1.234,5`, used by most of continental Europe.
    pub const COMMA_DECIMAL: Locale = Locale {
        decimal_separator: ',',
        group_separator: '.',
    };

    /// Pick separators from a locale tag such as `de_DE` or `en-US`.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['_', '-', '.'])
            .next()
            .unwrap_or("")
            .to_lowercase();
        match language.as_str() {
            "de" | "fr" | "es" | "it" | "nl" | "pt" | "da" | "nb" | "sv" | "fi" | "pl" | "cs"
            | "ru" | "tr" | "el" | "hu" | "ca" | "et" => Self::COMMA_DECIMAL,
            _ => Self::C,
        }
    }

    /// Parse a number written in this locale. Surrounding whitespace is
    /// ignored. Group separators are only accepted between groups of three
    /// digits ahead of the decimal separator, so `"1,5"` is not a number in
    /// the C locale.
    pub fn to_double(&self, text: &str) -> Result<f64, SchemaError> {
        let invalid = || SchemaError::InvalidNumber(text.to_string());
        let trimmed = text.trim();
        let (integer, fraction) = match trimmed.split_once(self.decimal_separator) {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (trimmed, None),
        };
        if fraction.is_some_and(|f| f.contains(self.group_separator)) {
            return Err(invalid());
        }

        let mut normalized = self.strip_groups(integer).ok_or_else(invalid)?;
        if let Some(fraction) = fraction {
            normalized.push('.');
            normalized.push_str(fraction);
        }
        normalized.parse::<f64>().map_err(|_| invalid())
    }

    fn strip_groups(&self, integer: &str) -> Option<String> {
        if !integer.contains(self.group_separator) {
            return Some(integer.to_string());
        }
        let digits = integer.trim_start_matches(['-', '+']);
        let sign = &integer[..integer.len() - digits.len()];
        let is_digits = |g: &str| g.chars().all(|c| c.is_ascii_digit());

        let mut groups = digits.split(self.group_separator);
        let first = groups.next()?;
        if !(1..=3).contains(&first.len()) || !is_digits(first) {
            return None;
        }
        let mut out = format!("{}{}", sign, first);
        for group in groups {
            if group.len() != 3 || !is_digits(group) {
                return None;
            }
            out.push_str(group);
        }
        Some(out)
    }

    /// Like [`to_double`](Self::to_double), logging and returning `0.0` when
    /// the text is not a number.
    pub fn to_double_or_zero(&self, text: &str, caller: &str) -> f64 {
        match self.to_double(text) {
            Ok(value) => value,
            Err(e) => {
                warn!(caller, "{}", e);
                0.0
            }
        }
    }
}
