mod entry;
mod ids;
mod library;

// 导出常用项
pub use entry::{Activity, Category, Recommendation, Section};
pub use ids::{is_child_of, is_valid_id, IdLevel};
pub use library::CatalogLibrary;
