use crate::tables::{LanguageTable, RUSSIAN, UKRAINIAN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Невідома мова: {0}")]
    Unknown(String),
    #[error("Не вказано мову після --lang")]
    MissingValue,
}

/// Мова, для якої обирається таблиця суфіксів
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "uk")]
    Ukrainian,
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    pub fn table(self) -> &'static LanguageTable {
        match self {
            Language::Ukrainian => &UKRAINIAN,
            Language::Russian => &RUSSIAN,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::Ukrainian => "uk",
            Language::Russian => "ru",
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uk" | "ua" | "ukr" | "ukrainian" => Ok(Language::Ukrainian),
            "ru" | "rus" | "russian" => Ok(Language::Russian),
            _ => Err(LanguageError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!("uk".parse::<Language>(), Ok(Language::Ukrainian));
        assert_eq!(" UA ".parse::<Language>(), Ok(Language::Ukrainian));
        assert_eq!("Russian".parse::<Language>(), Ok(Language::Russian));
        assert_eq!(
            "pl".parse::<Language>(),
            Err(LanguageError::Unknown("pl".to_string()))
        );
    }

    #[test]
    fn test_tag_roundtrip_and_serde() {
        for language in [Language::Ukrainian, Language::Russian] {
            assert_eq!(language.tag().parse::<Language>(), Ok(language));
        }
        assert_eq!(serde_json::to_string(&Language::Russian).unwrap(), "\"ru\"");
        assert_eq!(Language::default().table().name, "ukrainian");
    }
}
