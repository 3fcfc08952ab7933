// src/i18n.rs

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Languages the storefront can be rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    He,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }

    /// Hebrew pages are laid out right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::He)
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn text(self) -> UiText {
        UiText(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language `{}` (expected `en` or `he`)", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "he" => Ok(Language::He),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Fixed interface strings for one language.
#[derive(Debug, Clone, Copy)]
pub struct UiText(Language);

impl UiText {
    pub fn new_badge(self) -> &'static str {
        match self.0 {
            Language::En => "NEW",
            Language::He => "חדש",
        }
    }

    pub fn view_deal(self) -> &'static str {
        match self.0 {
            Language::En => "View Deal",
            Language::He => "צפה במבצע",
        }
    }

    pub fn no_products(self) -> &'static str {
        match self.0 {
            Language::En => "No products found",
            Language::He => "לא נמצאו מוצרים",
        }
    }

    pub fn latest_deals(self) -> &'static str {
        match self.0 {
            Language::En => "Latest Deals",
            Language::He => "מבצעים אחרונים",
        }
    }

    pub fn all_categories(self) -> &'static str {
        match self.0 {
            Language::En => "All",
            Language::He => "הכל",
        }
    }

    pub fn search_placeholder(self) -> &'static str {
        match self.0 {
            Language::En => "Search products...",
            Language::He => "חפש מוצרים...",
        }
    }

    pub fn last_updated(self) -> &'static str {
        match self.0 {
            Language::En => "Last updated",
            Language::He => "עודכן לאחרונה",
        }
    }
}

/// Explicit rendering state, passed down instead of kept globally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub language: Language,
}

impl RenderContext {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn text(&self) -> UiText {
        self.language.text()
    }
}
