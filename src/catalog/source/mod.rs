//! 目录源解析（嵌套键值JSON形态）
pub mod parser;
pub mod raw;

pub use parser::CatalogParser;
pub use raw::{RawActivity, RawCatalog, RawCategory, RawEntries, RawRecommendation, RawSection};
