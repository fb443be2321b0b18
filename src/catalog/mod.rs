//! 目录模块：数据模型定义、源解析、加载、索引与统计
pub mod core;
pub mod indexer;
pub mod loader;
pub mod source;
pub mod stats;

// 统一导出核心公共接口
pub use core::CatalogLibrary;
pub use indexer::CatalogIndex;
pub use loader::CatalogLoader;
pub use source::CatalogParser;
pub use stats::CatalogStats;
