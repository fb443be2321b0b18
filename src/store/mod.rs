//! 只读目录Store与全局单例管理
pub mod global;
pub mod store;

pub use global::{
    global_store, init_global_store, init_global_store_with, reload_global_store,
};
pub use store::{CatalogStore, ResolvedRecommendation};
