// src/render/card.rs

use std::fmt::Write;

use super::{attr, text};
use crate::{catalog::Product, i18n::RenderContext};

/// Shown when a product image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300";

/// Markup for one product tile.
pub fn render_product_card(product: &Product, ctx: &RenderContext) -> String {
    let lang = ctx.language;
    let ui = ctx.text();
    let name = product.display_name(lang);

    let mut out = String::with_capacity(768);
    let _ = write!(
        out,
        r#"<div class="product-card" data-category="{}" data-name="{}">"#,
        attr(&product.category),
        attr(&product.search_key(lang)),
    );
    if product.is_new {
        let _ = write!(out, r#"<div class="deal-badge">{}</div>"#, text(ui.new_badge()));
    }
    let _ = write!(
        out,
        r#"<div class="product-image"><img src="{}" alt="{}" loading="lazy" onerror="this.src='{}'"></div>"#,
        attr(&product.image),
        attr(name),
        PLACEHOLDER_IMAGE,
    );
    let _ = write!(
        out,
        r#"<div class="product-info"><h3 class="product-name">{}</h3>"#,
        text(name)
    );
    let _ = write!(
        out,
        r#"<div class="product-rating"><i class="fas fa-star"></i><span>{}</span><span class="product-orders">({})</span></div>"#,
        text(&product.rating),
        text(&product.orders),
    );
    let _ = write!(
        out,
        r#"<div class="product-pricing"><span class="product-price">${}</span>"#,
        text(&product.price)
    );
    if let Some(old) = &product.old_price {
        let _ = write!(out, r#"<span class="old-price">${}</span>"#, text(old));
    }
    out.push_str("</div>");
    let _ = write!(
        out,
        r#"<a href="{}" target="_blank" rel="noopener" class="view-deal-btn">{}</a>"#,
        attr(&product.link),
        text(ui.view_deal()),
    );
    out.push_str("</div></div>");
    out
}
