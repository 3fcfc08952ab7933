// src/catalog/mod.rs

pub mod parse;
pub mod product;
pub mod record;

pub use parse::parse_records;
pub use product::Product;
pub use record::{FieldValue, Record, IS_NEW_FIELD};

use crate::i18n::Language;

/// Products sharing one `category` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    /// Raw category value as it appears in the data.
    pub category: String,
    /// Localized title source, taken from the category's first product (may be `None`).
    pub category_he: Option<String>,
    pub products: Vec<Product>,
}

impl CategorySection {
    /// Anchor id used by the page navigation.
    pub fn anchor(&self) -> String {
        self.category.to_lowercase()
    }

    pub fn title(&self, lang: Language) -> &str {
        match (lang, &self.category_he) {
            (Language::He, Some(he)) => he,
            _ => &self.category,
        }
    }
}

/// A parsed catalog, grouped the way the storefront shows it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    sections: Vec<CategorySection>,
}

impl Catalog {
    pub fn from_records(records: &[Record]) -> Self {
        Self::from_products(records.iter().map(Product::from_record).collect())
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        let mut sections: Vec<CategorySection> = Vec::new();
        for product in &products {
            match sections.iter_mut().find(|s| s.category == product.category) {
                Some(section) => section.products.push(product.clone()),
                None => sections.push(CategorySection {
                    category: product.category.clone(),
                    category_he: product.category_he.clone(),
                    products: vec![product.clone()],
                }),
            }
        }
        Self { products, sections }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Sections in order of each category's first appearance.
    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    /// Products flagged `isNew`, in catalog order.
    pub fn latest(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_new)
    }

    /// Products whose display name contains `term`, ignoring case. An empty
    /// term matches everything.
    pub fn search<'a>(&'a self, term: &str, lang: Language) -> impl Iterator<Item = &'a Product> {
        let needle = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(move |p| needle.is_empty() || p.search_key(lang).contains(&needle))
    }

    /// A new catalog holding only the products matching `term`.
    pub fn filtered(&self, term: &str, lang: Language) -> Self {
        Self::from_products(self.search(term, lang).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "id,name,name_he,category,category_he,isNew
1,Wireless Earbuds,אוזניות אלחוטיות,electronics,אלקטרוניקה,true
2,Smart Watch,,electronics,,false
3,LED Strip,,home,בית,true

4,Cotton T-Shirt,,fashion,,
5,Knife Set,,home,,false
";

    fn catalog() -> Catalog {
        Catalog::from_records(&parse_records(CSV))
    }

    #[test]
    fn groups_by_first_appearance() {
        let c = catalog();
        assert_eq!(c.len(), 5);
        let cats: Vec<_> = c.sections().iter().map(|s| s.category.as_str()).collect();
        assert_eq!(cats, vec!["electronics", "home", "fashion"]);

        let home = &c.sections()[1];
        let ids: Vec<_> = home.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "5"]);
        assert_eq!(home.title(Language::He), "בית");
        assert_eq!(home.title(Language::En), "home");
        assert_eq!(c.sections()[2].title(Language::He), "fashion");
    }

    #[test]
    fn section_title_comes_from_first_product_only() {
        let c = Catalog::from_records(&parse_records(
            "id,category,category_he\n1,toys,\n2,toys,צעצועים\n",
        ));
        assert_eq!(c.sections()[0].category_he, None);
        assert_eq!(c.sections()[0].title(Language::He), "toys");
    }

    #[test]
    fn latest_holds_only_new_products() {
        let c = catalog();
        let ids: Vec<_> = c.latest().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn search_matches_localized_name() {
        let c = catalog();
        let en: Vec<_> = c.search("WATCH", Language::En).map(|p| p.id.as_str()).collect();
        assert_eq!(en, vec!["2"]);

        let he: Vec<_> = c.search("אלחוטיות", Language::He).map(|p| p.id.as_str()).collect();
        assert_eq!(he, vec!["1"]);

        assert_eq!(c.search("", Language::En).count(), 5);
        assert_eq!(c.search("nothing-like-this", Language::En).count(), 0);
    }

    #[test]
    fn filtered_catalog_regroups() {
        let c = catalog().filtered("s", Language::En);
        let ids: Vec<_> = c.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

        let c = catalog().filtered("set", Language::En);
        assert_eq!(c.sections().len(), 1);
        assert_eq!(c.sections()[0].anchor(), "home");
    }

    #[test]
    fn sample_catalog_file() {
        const INPUT: &str = include_str!("../../assets/products.csv");

        let records = parse_records(INPUT);
        assert_eq!(records.len(), 8);
        for r in &records {
            assert_eq!(r.len(), 12);
        }

        let c = Catalog::from_records(&records);
        let cats: Vec<_> = c.sections().iter().map(|s| s.category.as_str()).collect();
        assert_eq!(cats, vec!["electronics", "homeAndGarden", "fashion", "toys"]);

        let latest: Vec<_> = c.latest().map(|p| p.id.as_str()).collect();
        assert_eq!(latest, vec!["1", "3", "6"]);

        let lamp = &c.products()[2];
        assert_eq!(lamp.name, "LED Strip Lights 5M, RGB");
        assert_eq!(lamp.category_he.as_deref(), Some("בית וגן"));
        assert_eq!(c.products()[4].name, "Kitchen Knife Set \"Pro\" 6PCS");
        assert_eq!(c.products()[5].old_price, None);
    }

    #[test]
    fn empty_input_gives_empty_catalog() {
        let c = Catalog::from_records(&parse_records(""));
        assert!(c.is_empty());
        assert!(c.sections().is_empty());
    }
}
