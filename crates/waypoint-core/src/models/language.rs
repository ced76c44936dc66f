//! Language tags carried by courses and share payloads.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the language tags the planner tracks.
///
/// The tag is stored in the course metadata and travels with share payloads so
/// a link recipient sees the course in the language it was shared in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Korean (the application default)
    #[default]
    Ko,
    /// English
    En,
    /// Japanese
    Jp,
    /// Simplified Chinese
    Cn,
    /// Thai
    Th,
    /// Arabic
    Ar,
    /// Russian
    Ru,
    /// French
    Fr,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            "jp" => Ok(Language::Jp),
            "cn" => Ok(Language::Cn),
            "th" => Ok(Language::Th),
            "ar" => Ok(Language::Ar),
            "ru" => Ok(Language::Ru),
            "fr" => Ok(Language::Fr),
            _ => Err(format!("Invalid language tag: {s}")),
        }
    }
}

impl Language {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Jp => "jp",
            Language::Cn => "cn",
            Language::Th => "th",
            Language::Ar => "ar",
            Language::Ru => "ru",
            Language::Fr => "fr",
        }
    }

    /// Lenient normalization used on decode paths: any unrecognized or
    /// missing tag falls back to the default rather than failing.
    pub fn normalize(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok()).unwrap_or_default()
    }
}
