pub mod catalog;
pub mod config;
pub mod fetch;
pub mod i18n;
pub mod render;

pub use catalog::{parse_records, Catalog, FieldValue, Product, Record};
pub use config::Config;
pub use i18n::{Language, RenderContext};
