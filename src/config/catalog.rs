//! 全局目录配置管理

use std::path::PathBuf;

/// 目录来源
#[derive(Debug, Clone)]
pub enum CatalogOrigin {
    Embedded,           // 内置目录（编译期 embed）
    LocalFile(PathBuf), // 本地JSON文件（运行时读取）
    InlineJson(String), // 内联JSON字符串（宿主注入/测试）
}

/// 核心目录选项
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// 严格引用模式：推荐目标存在悬挂时拒绝加载
    /// 默认关闭 - 目录抽取件不保证引用闭包，悬挂目标属正常数据
    pub strict_references: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            strict_references: false,
        }
    }
}

/// 完整目录配置
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub origin: CatalogOrigin,
    pub options: CatalogOptions,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            origin: CatalogOrigin::Embedded,
            options: CatalogOptions::default(),
        }
    }
}

impl CatalogConfig {
    /// 内置目录
    pub fn embedded() -> Self {
        Self::default()
    }

    /// 本地目录JSON文件
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: CatalogOrigin::LocalFile(path.into()),
            options: CatalogOptions::default(),
        }
    }

    /// 内联JSON字符串
    pub fn inline_json(content: impl Into<String>) -> Self {
        Self {
            origin: CatalogOrigin::InlineJson(content.into()),
            options: CatalogOptions::default(),
        }
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct CatalogConfigBuilder {
    config: CatalogConfig,
}

impl CatalogConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: CatalogOrigin) -> Self {
        self.config.origin = origin;
        self
    }

    pub fn strict_references(mut self, strict: bool) -> Self {
        self.config.options.strict_references = strict;
        self
    }

    pub fn build(self) -> CatalogConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = CatalogConfigBuilder::new()
            .origin(CatalogOrigin::LocalFile(PathBuf::from("catalog.json")))
            .strict_references(true)
            .build();

        assert!(config.options.strict_references);
        assert!(matches!(config.origin, CatalogOrigin::LocalFile(_)));
    }

    #[test]
    fn test_default_is_embedded_lenient() {
        let config = CatalogConfig::default();
        assert!(matches!(config.origin, CatalogOrigin::Embedded));
        assert!(!config.options.strict_references);
    }
}
