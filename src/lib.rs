//! rshomecatalog - 家装服务活动推荐目录只读查询库
//! 静态编写的 章节→分类→活动→推荐活动 四级目录，加载后整体不可变，
//! 全部查询为同步无阻塞的保序map检索，可跨线程无限制并发读

pub mod catalog;
pub mod config;
pub mod error;
pub mod store;
pub mod utils;

// 导出全局错误类型
pub use self::error::{CatResult, CatalogError};

// 导出配置模块核心结构体与构建器
pub use crate::config::catalog::{
    CatalogConfig, CatalogConfigBuilder, CatalogOptions, CatalogOrigin,
};

// 导出目录模块核心接口与数据结构
pub use crate::catalog::core::{
    is_child_of, is_valid_id, Activity, CatalogLibrary, Category, IdLevel, Recommendation,
    Section,
};
pub use crate::catalog::{CatalogIndex, CatalogLoader, CatalogParser, CatalogStats};

// 导出Store模块核心接口（含全局单例管理）
pub use crate::store::{
    global_store, init_global_store, init_global_store_with, reload_global_store, CatalogStore,
    ResolvedRecommendation,
};

// 内置固化目录数据 - 仅在开启embedded-catalog特性时编译
#[cfg(feature = "embedded-catalog")]
pub mod embedded_catalog {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Arc;

    /// 内置目录JSON资产（编译期embed，与crate一同发布）
    pub static EMBEDDED_CATALOG_JSON: &str = include_str!("../data/catalog_data.json");

    /// 全局懒加载的内置目录Store单例 - 运行期首次访问初始化，
    /// 内存中仅一份实例，线程安全
    pub static EMBEDDED_STORE: Lazy<Arc<CatalogStore>> = Lazy::new(|| {
        let store = CatalogStore::from_json_str(EMBEDDED_CATALOG_JSON).unwrap_or_else(|e| {
            eprintln!("致命错误: 内置目录资产解析失败 - {e}");
            panic!("内置目录数据异常，请检查data/catalog_data.json资产");
        });
        Arc::new(store)
    });

    /// 获取内置目录Store共享引用
    pub fn embedded_store() -> Arc<CatalogStore> {
        EMBEDDED_STORE.clone()
    }
}
