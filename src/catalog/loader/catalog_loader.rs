//! 目录加载器 - 按配置来源分发
use crate::catalog::core::CatalogLibrary;
use crate::catalog::source::CatalogParser;
use crate::config::catalog::{CatalogConfig, CatalogOrigin};
use crate::error::{CatResult, CatalogError};

/// 目录加载器
/// 快速失败：任一环节出错即整体失败，绝不产出部分加载的目录库
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    parser: CatalogParser,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, config: &CatalogConfig) -> CatResult<CatalogLibrary> {
        match &config.origin {
            CatalogOrigin::Embedded => self.load_embedded(),

            CatalogOrigin::LocalFile(path) => {
                let raw = self.parser.parse_from_file(path).map_err(|e| match e {
                    CatalogError::IoError(io) => CatalogError::CatalogLoadError(format!(
                        "本地目录文件[{}]读取失败: {io}",
                        path.display()
                    )),
                    other => other,
                })?;
                self.parser.convert_raw_to_library(raw)
            }

            CatalogOrigin::InlineJson(content) => self.parser.parse_to_library(content),
        }
    }

    #[cfg(feature = "embedded-catalog")]
    fn load_embedded(&self) -> CatResult<CatalogLibrary> {
        self.parser
            .parse_to_library(crate::embedded_catalog::EMBEDDED_CATALOG_JSON)
    }

    #[cfg(not(feature = "embedded-catalog"))]
    fn load_embedded(&self) -> CatResult<CatalogLibrary> {
        Err(CatalogError::CatalogLoadError(
            "embedded-catalog feature 未启用，无法加载内置目录".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const INLINE_CATALOG: &str = r#"{
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

    #[test]
    fn test_load_inline_json() {
        let config = CatalogConfig::inline_json(INLINE_CATALOG);
        let lib = CatalogLoader::new().load(&config).unwrap();
        assert_eq!(lib.section_count(), 1);
        assert_eq!(lib.sections[0].name, "Plumbing");
    }

    #[test]
    fn test_load_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(INLINE_CATALOG.as_bytes()).unwrap();

        let config = CatalogConfig::local_file(file.path());
        let lib = CatalogLoader::new().load(&config).unwrap();
        assert_eq!(lib.activity_count(), 1);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let config = CatalogConfig::local_file("/nonexistent/catalog_data.json");
        let err = CatalogLoader::new().load(&config).unwrap_err();
        assert!(matches!(err, CatalogError::CatalogLoadError(_)), "{err}");
    }

    #[cfg(feature = "embedded-catalog")]
    #[test]
    fn test_load_embedded() {
        let lib = CatalogLoader::new()
            .load(&CatalogConfig::embedded())
            .unwrap();
        assert!(lib.section_count() > 0);
    }
}
