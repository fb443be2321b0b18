//! 目录索引 - 各层级id → 位置路径的扁平映射
//! 解析层已拒绝单个映射内的重复键，这里在全目录展平时二次防线：
//! 同层级id跨映射冲突同样禁止静默覆盖

use crate::catalog::core::{is_child_of, CatalogLibrary, IdLevel};
use crate::catalog::stats::CatalogStats;
use crate::error::{CatResult, CatalogError};
use rustc_hash::FxHashMap;

/// 目录索引 - 纯静态结构，构建后只读
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    /// SectionId → sections下标
    pub sections: FxHashMap<String, usize>,
    /// CategoryId → (章节下标, 分类下标)，跨章节展平
    pub categories: FxHashMap<String, (usize, usize)>,
    /// ActivityId → (章节下标, 分类下标, 活动下标)，全目录展平
    pub activities: FxHashMap<String, (usize, usize, usize)>,
    pub stats: CatalogStats,
}

impl CatalogIndex {
    pub fn from_library(library: &CatalogLibrary) -> CatResult<Self> {
        let mut index = Self::default();
        let mut stats = CatalogStats::default();

        for (si, section) in library.sections.iter().enumerate() {
            if index.sections.insert(section.id.clone(), si).is_some() {
                return Err(flatten_duplicate(IdLevel::Section, &section.id));
            }

            for (ci, category) in section.categories.iter().enumerate() {
                if !is_child_of(&category.id, &section.id) {
                    stats.prefix_mismatches += 1;
                    log::warn!(
                        "分类id[{}]与父章节id[{}]名义前缀不匹配",
                        category.id,
                        section.id
                    );
                }
                if index
                    .categories
                    .insert(category.id.clone(), (si, ci))
                    .is_some()
                {
                    return Err(flatten_duplicate(IdLevel::Category, &category.id));
                }

                for (ai, activity) in category.activities.iter().enumerate() {
                    if !is_child_of(&activity.id, &category.id) {
                        stats.prefix_mismatches += 1;
                        log::warn!(
                            "活动id[{}]与父分类id[{}]名义前缀不匹配",
                            activity.id,
                            category.id
                        );
                    }
                    if index
                        .activities
                        .insert(activity.id.clone(), (si, ci, ai))
                        .is_some()
                    {
                        return Err(flatten_duplicate(IdLevel::Activity, &activity.id));
                    }
                }
            }
        }

        // 弱引用统计 - 活动索引齐备后再扫推荐
        for activity in library.iter_activities() {
            stats.recommendations += activity.recommendations.len();
            for rec in &activity.recommendations {
                match index.activities.get(rec.target_id.as_str()) {
                    None => stats.dangling_targets += 1,
                    Some(&(si, ci, ai)) => {
                        let target = &library.sections[si].categories[ci].activities[ai];
                        if target.name != rec.label {
                            stats.stale_labels += 1;
                        }
                    }
                }
            }
        }

        stats.sections = index.sections.len();
        stats.categories = index.categories.len();
        stats.activities = index.activities.len();
        index.stats = stats;

        Ok(index)
    }

    pub fn section_path(&self, id: &str) -> Option<usize> {
        self.sections.get(id).copied()
    }

    pub fn category_path(&self, id: &str) -> Option<(usize, usize)> {
        self.categories.get(id).copied()
    }

    pub fn activity_path(&self, id: &str) -> Option<(usize, usize, usize)> {
        self.activities.get(id).copied()
    }
}

fn flatten_duplicate(level: IdLevel, id: &str) -> CatalogError {
    CatalogError::MalformedCatalog(format!(
        "{level}层级存在重复id[{id}]（跨映射展平冲突），禁止静默覆盖"
    ))
}
