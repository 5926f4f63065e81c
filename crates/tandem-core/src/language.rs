//! Supported interface languages.

use serde::{Deserialize, Serialize};

use crate::error::TandemError;

/// The two locales the trainer speaks.
///
/// The serialized form matches the persisted `language` column
/// ("English" / "Deutsch").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    #[serde(rename = "Deutsch")]
    German,
}

impl Language {
    /// Human-readable name as stored in persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "Deutsch",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = TandemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "de" | "deutsch" | "german" => Ok(Language::German),
            other => Err(TandemError::invalid_input(format!(
                "Unknown language '{other}' (expected 'en' or 'de')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("Deutsch".parse::<Language>().unwrap(), Language::German);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_serialized_form_matches_column_values() {
        assert_eq!(
            serde_json::to_string(&Language::German).unwrap(),
            "\"Deutsch\""
        );
    }
}
