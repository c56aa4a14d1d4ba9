//! Language
//!
//! The two languages the app speaks. Used both for UI text selection and
//! as the source-language tag on items.

use serde::{Deserialize, Serialize};

/// Bengali block in Unicode (U+0980..=U+09FF)
const BENGALI_BLOCK: std::ops::RangeInclusive<char> = '\u{0980}'..='\u{09FF}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bengali,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Bengali => "bengali",
            Language::English => "english",
        }
    }

    /// Pick the string for this language
    pub fn t<'a>(&self, bengali: &'a str, english: &'a str) -> &'a str {
        match self {
            Language::Bengali => bengali,
            Language::English => english,
        }
    }

    /// Locale tag handed to the speech recognizer
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Language::Bengali => "bn-IN",
            Language::English => "en-IN",
        }
    }

    /// Native name of the language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Bengali => "বাংলা",
            Language::English => "English",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Bengali => Language::English,
            Language::English => Language::Bengali,
        }
    }

    /// Bengali if the text contains any Bengali-script character
    pub fn detect(text: &str) -> Self {
        if text.chars().any(|c| BENGALI_BLOCK.contains(&c)) {
            Language::Bengali
        } else {
            Language::English
        }
    }
}
