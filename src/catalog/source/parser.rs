//! 目录源解析器 - 原始JSON → 核心目录库
//! 核心职责：
//! 1. 反序列化原始嵌套键值结构（保序）
//! 2. 逐级结构校验：id形状、必填名称、同级重复id
//! 3. 转换为核心CatalogLibrary标准结构
//! 校验失败即整体失败，绝不返回部分转换结果

use crate::catalog::core::{
    is_valid_id, Activity, CatalogLibrary, Category, IdLevel, Recommendation, Section,
};
use crate::catalog::source::raw::{RawActivity, RawCatalog, RawCategory, RawSection};
use crate::error::{CatResult, CatalogError};
use crate::utils::preview_compact;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

// 错误信息中键/名称片段的最大预览长度
const ERR_PREVIEW_LEN: usize = 48;

/// 目录解析器
#[derive(Debug, Clone, Default)]
pub struct CatalogParser;

impl CatalogParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_from_str(&self, content: &str) -> CatResult<RawCatalog> {
        if content.trim().is_empty() {
            return Err(CatalogError::InvalidInput("目录JSON内容为空".into()));
        }
        serde_json::from_str(content)
            .map_err(|e| CatalogError::CatalogLoadError(format!("目录JSON解析失败: {e}")))
    }

    pub fn parse_from_file(&self, path: &Path) -> CatResult<RawCatalog> {
        let content = fs::read_to_string(path)?;
        self.parse_from_str(&content)
    }

    pub fn parse_from_bytes(&self, bytes: &[u8]) -> CatResult<RawCatalog> {
        serde_json::from_slice(bytes)
            .map_err(|e| CatalogError::CatalogLoadError(format!("目录字节流解析失败: {e}")))
    }

    pub fn parse_from_value(&self, value: &serde_json::Value) -> CatResult<RawCatalog> {
        serde_json::from_value(value.clone())
            .map_err(|e| CatalogError::CatalogLoadError(format!("目录JSON Value解析失败: {e}")))
    }

    pub fn parse_to_library(&self, content: &str) -> CatResult<CatalogLibrary> {
        let raw = self.parse_from_str(content)?;
        self.convert_raw_to_library(raw)
    }

    /// 原始结构 → 核心目录库，携带全量结构校验
    pub fn convert_raw_to_library(&self, raw: RawCatalog) -> CatResult<CatalogLibrary> {
        let mut seen = FxHashSet::default();
        let mut sections = Vec::with_capacity(raw.sections.len());

        for (id, raw_section) in raw.sections {
            check_id_shape(&id, IdLevel::Section)?;
            check_level_duplicate(&mut seen, &id, IdLevel::Section)?;
            sections.push(self.convert_section(id, raw_section)?);
        }

        Ok(CatalogLibrary { sections })
    }

    fn convert_section(&self, id: String, raw: RawSection) -> CatResult<Section> {
        let name = required_name(raw.section, IdLevel::Section, &id)?;

        let mut seen = FxHashSet::default();
        let mut categories = Vec::with_capacity(raw.categories.len());
        for (cat_id, raw_cat) in raw.categories {
            check_id_shape(&cat_id, IdLevel::Category)?;
            check_level_duplicate(&mut seen, &cat_id, IdLevel::Category)?;
            categories.push(self.convert_category(cat_id, raw_cat)?);
        }

        Ok(Section {
            id,
            name,
            categories,
        })
    }

    fn convert_category(&self, id: String, raw: RawCategory) -> CatResult<Category> {
        let name = required_name(raw.category, IdLevel::Category, &id)?;

        let mut seen = FxHashSet::default();
        let mut activities = Vec::with_capacity(raw.activities.len());
        for (act_id, raw_act) in raw.activities {
            check_id_shape(&act_id, IdLevel::Activity)?;
            check_level_duplicate(&mut seen, &act_id, IdLevel::Activity)?;
            activities.push(self.convert_activity(act_id, raw_act)?);
        }

        Ok(Category {
            id,
            name,
            activities,
        })
    }

    fn convert_activity(&self, id: String, raw: RawActivity) -> CatResult<Activity> {
        let name = required_name(raw.activity, IdLevel::Activity, &id)?;

        // 推荐目标键也必须是活动层级形状；目标可跨章节，是否真实存在
        // 不在此处校验（无引用闭包保证，悬挂目标属正常数据）
        let mut seen = FxHashSet::default();
        let mut recommendations = Vec::with_capacity(raw.recommended_activities.len());
        for (target_id, raw_rec) in raw.recommended_activities {
            if !is_valid_id(&target_id, IdLevel::Activity) {
                return Err(CatalogError::MalformedCatalog(format!(
                    "活动id[{id}]的推荐目标键[{}]不符合活动id形状",
                    preview_compact(&target_id, ERR_PREVIEW_LEN)
                )));
            }
            if !seen.insert(target_id.clone()) {
                return Err(CatalogError::MalformedCatalog(format!(
                    "活动id[{id}]的推荐列表存在重复目标[{target_id}]，禁止静默覆盖"
                )));
            }

            let label = raw_rec
                .activity
                .map(|s| s.trim().to_string())
                .unwrap_or_default();
            if label.is_empty() {
                return Err(CatalogError::MalformedCatalog(format!(
                    "活动id[{id}]的推荐条目[{target_id}]缺少展示名字段\"activity\"或为空"
                )));
            }

            recommendations.push(Recommendation { target_id, label });
        }

        Ok(Activity {
            id,
            name,
            recommendations,
        })
    }
}

/// id形状校验（失败即致命）
fn check_id_shape(id: &str, level: IdLevel) -> CatResult<()> {
    if is_valid_id(id, level) {
        Ok(())
    } else {
        Err(CatalogError::MalformedCatalog(format!(
            "{level}层级键[{}]不符合点分id形状（应为{}段数字）",
            preview_compact(id, ERR_PREVIEW_LEN),
            level.segment_count()
        )))
    }
}

/// 同级重复id校验（失败即致命，last-write-wins会悄悄损坏目录）
fn check_level_duplicate(seen: &mut FxHashSet<String>, id: &str, level: IdLevel) -> CatResult<()> {
    if seen.insert(id.to_string()) {
        Ok(())
    } else {
        Err(CatalogError::MalformedCatalog(format!(
            "{level}层级存在重复id[{id}]，禁止静默覆盖"
        )))
    }
}

/// 必填名称字段校验 - 缺失或trim后为空均视为结构错误
fn required_name(name: Option<String>, level: IdLevel, id: &str) -> CatResult<String> {
    let name = name.map(|s| s.trim().to_string()).unwrap_or_default();
    if name.is_empty() {
        return Err(CatalogError::MalformedCatalog(format!(
            "{level} id[{id}]缺少必填名称字段\"{}\"或名称为空",
            level.as_str()
        )));
    }
    Ok(name)
}
