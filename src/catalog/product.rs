// src/catalog/product.rs

use serde::Serialize;

use super::record::{Record, IS_NEW_FIELD};
use crate::i18n::Language;

/// Typed view of one catalog row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub name_he: Option<String>,
    pub price: String,
    pub old_price: Option<String>,
    pub image: String,
    pub link: String,
    pub category: String,
    pub category_he: Option<String>,
    pub rating: String,
    pub orders: String,
    pub is_new: bool,
}

impl Product {
    /// Missing columns become empty strings; empty optional columns become `None`.
    pub fn from_record(record: &Record) -> Self {
        let text = |name: &str| record.get_str(name).unwrap_or_default().to_string();
        let optional = |name: &str| {
            record
                .get_str(name)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            id: text("id"),
            name: text("name"),
            name_he: optional("name_he"),
            price: text("price"),
            old_price: optional("oldPrice"),
            image: text("image"),
            link: text("link"),
            category: text("category"),
            category_he: optional("category_he"),
            rating: text("rating"),
            orders: text("orders"),
            is_new: record.flag(IS_NEW_FIELD),
        }
    }

    pub fn display_name(&self, lang: Language) -> &str {
        match (lang, &self.name_he) {
            (Language::He, Some(he)) => he,
            _ => &self.name,
        }
    }

    /// Lower-cased display name, matched against search terms.
    pub fn search_key(&self, lang: Language) -> String {
        self.display_name(lang).to_lowercase()
    }
}
