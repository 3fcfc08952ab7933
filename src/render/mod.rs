// src/render/mod.rs

pub mod card;

use std::{borrow::Cow, fmt::Write};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{catalog::Catalog, i18n::RenderContext};
pub use card::render_product_card;

static UPPER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z])").expect("valid regex"));
static AND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bAnd\b").expect("valid regex"));

/// Escape for element text.
pub(crate) fn text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escape for a double-quoted attribute value.
pub(crate) fn attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Turns a camelCase category into a heading: `homeAndGarden` -> `Home & Garden`.
pub fn format_category_name(raw: &str) -> String {
    let spaced = UPPER_RE.replace_all(raw, " $1");
    let mut chars = spaced.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    AND_RE.replace(&capitalized, "&").into_owned()
}

/// Page-level values that do not come from the catalog.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub updated: NaiveDate,
}

/// `Month D, YYYY`, as shown in the footer.
pub fn format_update_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Full static storefront page.
pub fn render_page(catalog: &Catalog, ctx: &RenderContext, meta: &PageMeta) -> String {
    let lang = ctx.language;
    let ui = ctx.text();
    let mut out = String::with_capacity(4096 + catalog.len() * 1024);

    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"{}\" dir=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"styles.css\">\n</head>\n<body>\n",
        lang.code(),
        lang.dir(),
        text(&meta.title),
    );

    // header + category navigation
    let _ = write!(
        out,
        "<header class=\"header\"><div class=\"container\">\
         <h1 class=\"logo\">{}</h1>\n<nav class=\"category-nav\"><ul>\
         <li><a href=\"#\" data-category=\"all\">{}</a></li>",
        text(&meta.title),
        text(ui.all_categories()),
    );
    for section in catalog.sections() {
        let anchor = section.anchor();
        let _ = write!(
            out,
            "<li><a href=\"#{}\" data-category=\"{}\">{}</a></li>",
            attr(&anchor),
            attr(&anchor),
            text(&format_category_name(section.title(lang))),
        );
    }
    let _ = write!(
        out,
        "</ul></nav>\n<input type=\"search\" id=\"desktopSearchInput\" placeholder=\"{}\">\
         </div></header>\n",
        attr(ui.search_placeholder()),
    );

    out.push_str("<main class=\"main-content\"><div class=\"container\">\n");

    let _ = write!(
        out,
        "<section class=\"category-section\" id=\"latest\"><h2>{}</h2>\
         <div class=\"products-scroll-container\" id=\"productsGrid\">",
        text(ui.latest_deals()),
    );
    if catalog.is_empty() {
        let _ = write!(out, "<p class=\"no-products\">{}</p>", text(ui.no_products()));
    } else {
        for product in catalog.latest() {
            out.push_str(&render_product_card(product, ctx));
        }
    }
    out.push_str("</div></section>\n");

    for section in catalog.sections() {
        let _ = write!(
            out,
            "<section class=\"category-section\" id=\"{}\"><h2>{}</h2>\
             <div class=\"products-scroll-container\" id=\"{}Grid\">",
            attr(&section.anchor()),
            text(&format_category_name(section.title(lang))),
            attr(&section.category),
        );
        for product in &section.products {
            out.push_str(&render_product_card(product, ctx));
        }
        out.push_str("</div></section>\n");
    }

    out.push_str("</div></main>\n");
    let _ = write!(
        out,
        "<footer class=\"footer\"><p>{}: <span id=\"updateDate\">{}</span></p></footer>\n\
         </body>\n</html>\n",
        text(ui.last_updated()),
        text(&format_update_date(meta.updated)),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::parse_records, i18n::Language};
    use scraper::{Html, Selector};

    const CSV: &str = "id,name,name_he,price,category,category_he,isNew
1,Wireless Earbuds,אוזניות,12.99,electronics,אלקטרוניקה,true
2,Garden Hose,,8.50,homeAndGarden,,false
3,<script>alert(1)</script>,,1.00,toys,,false
";

    fn meta() -> PageMeta {
        PageMeta {
            title: "Deal Shelf".into(),
            updated: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        }
    }

    fn texts(doc: &Html, sel: &str) -> Vec<String> {
        let s = Selector::parse(sel).unwrap();
        doc.select(&s).map(|e| e.text().collect::<String>()).collect()
    }

    #[test]
    fn category_names_are_humanized() {
        assert_eq!(format_category_name("homeAndGarden"), "Home & Garden");
        assert_eq!(format_category_name("electronics"), "Electronics");
        assert_eq!(format_category_name("sportsAndOutdoorsAndMore"), "Sports & Outdoors And More");
        assert_eq!(format_category_name(""), "");
        assert_eq!(format_category_name("אלקטרוניקה"), "אלקטרוניקה");
    }

    #[test]
    fn update_date_is_long_form() {
        assert_eq!(format_update_date(meta().updated), "October 19, 2026");
    }

    #[test]
    fn page_groups_products() {
        let catalog = Catalog::from_records(&parse_records(CSV));
        let html = render_page(&catalog, &RenderContext::default(), &meta());
        let doc = Html::parse_document(&html);

        assert_eq!(texts(&doc, "#productsGrid .product-name"), vec!["Wireless Earbuds"]);
        assert_eq!(
            texts(&doc, "section.category-section > h2"),
            vec!["Latest Deals", "Electronics", "Home & Garden", "Toys"]
        );
        assert_eq!(texts(&doc, "#homeAndGardenGrid .product-name"), vec!["Garden Hose"]);
        assert_eq!(texts(&doc, "#updateDate"), vec!["October 19, 2026"]);

        // escaped, never live markup
        assert_eq!(texts(&doc, "#toysGrid .product-name"), vec!["<script>alert(1)</script>"]);
        assert!(Selector::parse("main script")
            .map(|s| doc.select(&s).next().is_none())
            .unwrap());
    }

    #[test]
    fn hebrew_page_is_rtl_and_localized() {
        let catalog = Catalog::from_records(&parse_records(CSV));
        let html = render_page(&catalog, &RenderContext::new(Language::He), &meta());
        let doc = Html::parse_document(&html);

        let root = Selector::parse("html").unwrap();
        let el = doc.select(&root).next().unwrap();
        assert_eq!(el.value().attr("dir"), Some("rtl"));
        assert_eq!(el.value().attr("lang"), Some("he"));

        assert_eq!(texts(&doc, "#electronics > h2"), vec!["אלקטרוניקה"]);
        assert_eq!(texts(&doc, "#productsGrid .product-name"), vec!["אוזניות"]);
    }

    #[test]
    fn empty_catalog_shows_notice() {
        let html = render_page(&Catalog::default(), &RenderContext::default(), &meta());
        let doc = Html::parse_document(&html);
        assert_eq!(texts(&doc, ".no-products"), vec!["No products found"]);
        assert!(texts(&doc, ".product-card").is_empty());
    }
}
