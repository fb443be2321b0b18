//! 全局错误类型定义
use crate::catalog::core::IdLevel;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    // 目录结构错误（加载期，致命：不返回部分加载的目录）
    #[error("目录结构非法：{0}")]
    MalformedCatalog(String),
    #[error("目录加载失败：{0}")]
    CatalogLoadError(String),

    // 查询错误（运行期，可恢复，不影响已加载目录）
    #[error("目录条目不存在：{level} id[{id}]")]
    NotFound { level: IdLevel, id: String },

    // 全局Store错误
    #[error("全局目录Store未初始化: {0}")]
    StoreNotInitialized(String),
    #[error("全局目录Store初始化失败: {0}")]
    StoreInitError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

impl CatalogError {
    /// 是否为查询级可恢复错误（区别于加载期致命错误）
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

// 全局Result类型
pub type CatResult<T> = Result<T, CatalogError>;
