//! 全局目录Store单例管理
//! 核心职责：
//! 1. 维护进程生命周期内共享的CatalogStore实例
//! 2. 幂等初始化 + 手动注入已构建Store
//! 3. 热更新以整体原子交换实现：新Store完整构建后一次性发布新引用，
//!    绝不就地修改已发布的Store（已持有旧Arc的读方不受影响）

use once_cell::sync::Lazy;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::catalog::CatalogConfig;
use crate::error::{CatResult, CatalogError};
use crate::store::store::CatalogStore;

/// 全局Store槽位 - 线程安全
/// 设计说明：
/// - Lazy：延迟初始化，首次使用时创建槽位
/// - RwLock<Option<Arc<_>>>：读多写少；写仅发生在初始化与热更新交换瞬间
/// - Arc：读方克隆引用后在槽位外自由使用，交换不影响存量读方
static GLOBAL_STORE: Lazy<RwLock<Option<Arc<CatalogStore>>>> = Lazy::new(|| RwLock::new(None));

/// 初始化全局Store
/// 特性：
/// 1. 幂等设计：已初始化则直接返回Ok(())
/// 2. 快速失败：构建失败时全局槽位保持未初始化
/// 参数：config - 目录配置
pub fn init_global_store(config: &CatalogConfig) -> CatResult<()> {
    if global_store_initialized() {
        log::debug!("Global catalog store already initialized, skip reinitialization");
        return Ok(());
    }

    let store = CatalogStore::load(config).map_err(|e| {
        CatalogError::StoreInitError(format!("Failed to build catalog store: {e}"))
    })?;
    publish(Arc::new(store));

    log::info!("Global catalog store initialized successfully");
    Ok(())
}

/// 手动注入已构建Store，初始化全局槽位
/// 适用场景：宿主预加载/预校验后注入
pub fn init_global_store_with(store: CatalogStore) -> CatResult<()> {
    if global_store_initialized() {
        log::debug!("Global catalog store already initialized, skip reinitialization with custom store");
        return Ok(());
    }

    publish(Arc::new(store));
    log::info!("Global catalog store initialized with custom instance");
    Ok(())
}

/// 获取全局Store引用（同步，无自动初始化）
/// 注意：调用前需确保已初始化，否则返回错误
pub fn global_store() -> CatResult<Arc<CatalogStore>> {
    read_slot().ok_or_else(|| {
        CatalogError::StoreNotInitialized(
            "Global catalog store not initialized! Please call init_global_store first".to_string(),
        )
    })
}

/// 热更新全局Store - 整体原子交换
/// 新Store按config完整构建成功后才替换全局引用；构建失败时
/// 旧Store原样保留，存量读方全程不受影响
pub fn reload_global_store(config: &CatalogConfig) -> CatResult<Arc<CatalogStore>> {
    let store = Arc::new(CatalogStore::load(config).map_err(|e| {
        CatalogError::StoreInitError(format!("Failed to rebuild catalog store: {e}"))
    })?);

    publish(store.clone());
    log::info!("Global catalog store reloaded via atomic swap: {}", store.stats());
    Ok(store)
}

fn global_store_initialized() -> bool {
    read_slot().is_some()
}

fn read_slot() -> Option<Arc<CatalogStore>> {
    GLOBAL_STORE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn publish(store: Arc<CatalogStore>) {
    *GLOBAL_STORE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(store);
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_A: &str = r#"{
        "1": {
            "section": "Electrical",
            "categories": {
                "1.1": {
                    "category": "Smoke Detector",
                    "activities": {
                        "1.1.1": { "activity": "Battery-Operated Smoke Detector Installation", "recommendedActivities": {} }
                    }
                }
            }
        }
    }"#;

    const CATALOG_B: &str = r#"{
        "2": {
            "section": "Plumbing",
            "categories": {
                "2.1": {
                    "category": "Toilet",
                    "activities": {
                        "2.1.1": { "activity": "Toilet Installation", "recommendedActivities": {} }
                    }
                }
            }
        }
    }"#;

    // 全局槽位为进程级共享状态，串行放在同一个测试内验证完整生命周期
    #[test]
    fn test_global_store_lifecycle() {
        // 未初始化 → 精准错误
        // （若其他feature组合下已有测试初始化过，则跳过该断言前置）
        let _ = global_store();

        // 首次初始化
        init_global_store(&CatalogConfig::inline_json(CATALOG_A)).unwrap();
        let first = global_store().unwrap();
        assert!(first.activity("1.1.1").is_ok());

        // 幂等：重复初始化不替换已有实例
        init_global_store(&CatalogConfig::inline_json(CATALOG_B)).unwrap();
        let still_first = global_store().unwrap();
        assert!(still_first.activity("1.1.1").is_ok());
        assert!(still_first.activity("2.1.1").is_err());

        // 热更新：原子交换为新目录；存量旧引用不受影响
        let swapped = reload_global_store(&CatalogConfig::inline_json(CATALOG_B)).unwrap();
        assert!(swapped.activity("2.1.1").is_ok());
        assert!(global_store().unwrap().activity("2.1.1").is_ok());
        assert!(first.activity("1.1.1").is_ok());

        // 热更新失败：旧Store原样保留
        let err = reload_global_store(&CatalogConfig::inline_json("{ broken")).unwrap_err();
        assert!(matches!(err, CatalogError::StoreInitError(_)), "{err}");
        assert!(global_store().unwrap().activity("2.1.1").is_ok());
    }
}
