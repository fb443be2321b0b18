//! 只读目录Store
//! 核心职责：
//! 1. 持有解析后的目录库 + 扁平索引，构建完成后不可变
//! 2. 各层级O(1)按id查询、保序推荐查询、弱引用实时解析
//! 3. 全量遍历导出（保序JSON回写）
//! 所有查询均为&self同步操作，无内部可变性，可跨线程无限制并发读

use crate::catalog::core::{Activity, CatalogLibrary, Category, IdLevel, Recommendation, Section};
use crate::catalog::indexer::CatalogIndex;
use crate::catalog::loader::CatalogLoader;
use crate::catalog::source::CatalogParser;
use crate::catalog::stats::CatalogStats;
use crate::config::catalog::CatalogConfig;
use crate::error::{CatResult, CatalogError};
use crate::utils::preview_compact;
use serde_json::{Map, Value};

/// 推荐解析结果
/// Dangling是正常结果而非错误：目录抽取件不保证推荐目标的引用闭包
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedRecommendation<'a> {
    /// 目标活动真实存在，返回实时对象（而非编写期快照标签）
    Resolved(&'a Activity),
    /// 目标id不在本目录中，仅能提供弱引用本身
    Dangling { target_id: &'a str, label: &'a str },
}

impl ResolvedRecommendation<'_> {
    pub fn is_dangling(&self) -> bool {
        matches!(self, ResolvedRecommendation::Dangling { .. })
    }
}

/// 只读目录Store - 库 + 索引
#[derive(Debug, Clone)]
pub struct CatalogStore {
    library: CatalogLibrary,
    index: CatalogIndex,
}

impl CatalogStore {
    // ===================== 构建 =====================

    /// 按配置加载并构建Store（加载失败不产出任何Store实例）
    pub fn load(config: &CatalogConfig) -> CatResult<Self> {
        let library = CatalogLoader::new().load(config)?;
        let store = Self::from_library(library)?;

        if config.options.strict_references && store.stats().dangling_targets > 0 {
            return Err(CatalogError::CatalogLoadError(format!(
                "严格引用模式：存在{}个悬挂推荐目标",
                store.stats().dangling_targets
            )));
        }
        Ok(store)
    }

    pub fn from_json_str(content: &str) -> CatResult<Self> {
        Self::from_library(CatalogParser::new().parse_to_library(content)?)
    }

    pub fn from_json_bytes(bytes: &[u8]) -> CatResult<Self> {
        let parser = CatalogParser::new();
        let raw = parser.parse_from_bytes(bytes)?;
        Self::from_library(parser.convert_raw_to_library(raw)?)
    }

    pub fn from_library(library: CatalogLibrary) -> CatResult<Self> {
        let index = CatalogIndex::from_library(&library)?;
        index.stats.log_summary();
        Ok(Self { library, index })
    }

    // ===================== 按id查询 =====================

    pub fn section(&self, id: &str) -> CatResult<&Section> {
        self.index
            .section_path(id)
            .map(|si| &self.library.sections[si])
            .ok_or_else(|| not_found(IdLevel::Section, id))
    }

    pub fn category(&self, id: &str) -> CatResult<&Category> {
        self.index
            .category_path(id)
            .map(|(si, ci)| &self.library.sections[si].categories[ci])
            .ok_or_else(|| not_found(IdLevel::Category, id))
    }

    pub fn activity(&self, id: &str) -> CatResult<&Activity> {
        self.index
            .activity_path(id)
            .map(|(si, ci, ai)| &self.library.sections[si].categories[ci].activities[ai])
            .ok_or_else(|| not_found(IdLevel::Activity, id))
    }

    /// 指定活动的推荐列表，保持编写期顺序（顺序即排序优先级）
    pub fn recommendations(&self, activity_id: &str) -> CatResult<&[Recommendation]> {
        Ok(self.activity(activity_id)?.recommendations.as_slice())
    }

    /// 解析指定活动的某条推荐的实时目标
    /// 返回NotFound仅当activity_id不存在，或target_id不在该活动的推荐列表中；
    /// 目标id不在目录中时返回Dangling（正常结果）
    pub fn resolve_recommendation<'a>(
        &'a self,
        activity_id: &str,
        target_id: &str,
    ) -> CatResult<ResolvedRecommendation<'a>> {
        let activity = self.activity(activity_id)?;
        let rec = activity
            .recommendations
            .iter()
            .find(|r| r.target_id == target_id)
            .ok_or_else(|| not_found(IdLevel::Activity, target_id))?;

        match self.index.activity_path(&rec.target_id) {
            Some((si, ci, ai)) => {
                let target = &self.library.sections[si].categories[ci].activities[ai];
                if target.name != rec.label {
                    // 编写期缓存标签已过期，返回实时对象并告警
                    log::warn!(
                        "活动[{activity_id}]的推荐[{target_id}]标签已过期：缓存名[{}]，目标真实名[{}]",
                        preview_compact(&rec.label, 64),
                        preview_compact(&target.name, 64),
                    );
                }
                Ok(ResolvedRecommendation::Resolved(target))
            }
            None => Ok(ResolvedRecommendation::Dangling {
                target_id: &rec.target_id,
                label: &rec.label,
            }),
        }
    }

    // ===================== 遍历与导出 =====================

    /// 章节列表（编写顺序）
    pub fn sections(&self) -> &[Section] {
        &self.library.sections
    }

    /// 全目录活动id遍历（目录顺序），供搜索索引/站点地图等批量导出场景使用
    pub fn activity_ids(&self) -> impl Iterator<Item = &str> {
        self.library.iter_activities().map(|a| a.id.as_str())
    }

    pub fn library(&self) -> &CatalogLibrary {
        &self.library
    }

    pub fn stats(&self) -> &CatalogStats {
        &self.index.stats
    }

    /// 回写为源JSON形态（serde_json开启preserve_order，各级保持编写顺序）
    /// 回写结果重新加载应得到等价Store
    pub fn to_json_value(&self) -> Value {
        let mut root = Map::new();
        for section in &self.library.sections {
            let mut categories = Map::new();
            for category in &section.categories {
                let mut activities = Map::new();
                for activity in &category.activities {
                    let mut recs = Map::new();
                    for rec in &activity.recommendations {
                        let mut rec_obj = Map::new();
                        rec_obj.insert("activity".into(), Value::String(rec.label.clone()));
                        recs.insert(rec.target_id.clone(), Value::Object(rec_obj));
                    }
                    let mut act_obj = Map::new();
                    act_obj.insert("activity".into(), Value::String(activity.name.clone()));
                    act_obj.insert("recommendedActivities".into(), Value::Object(recs));
                    activities.insert(activity.id.clone(), Value::Object(act_obj));
                }
                let mut cat_obj = Map::new();
                cat_obj.insert("category".into(), Value::String(category.name.clone()));
                cat_obj.insert("activities".into(), Value::Object(activities));
                categories.insert(category.id.clone(), Value::Object(cat_obj));
            }
            let mut sec_obj = Map::new();
            sec_obj.insert("section".into(), Value::String(section.name.clone()));
            sec_obj.insert("categories".into(), Value::Object(categories));
            root.insert(section.id.clone(), Value::Object(sec_obj));
        }
        Value::Object(root)
    }

    pub fn to_json_string(&self) -> CatResult<String> {
        Ok(serde_json::to_string(&self.to_json_value())?)
    }

    pub fn to_json_string_pretty(&self) -> CatResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_json_value())?)
    }
}

fn not_found(level: IdLevel, id: &str) -> CatalogError {
    CatalogError::NotFound {
        level,
        id: id.to_string(),
    }
}
