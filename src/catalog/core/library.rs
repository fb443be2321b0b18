use super::entry::{Activity, Section};

/// 核心目录库结构体 - 源解析后的统一标准结构
/// 章节按编写顺序排列；加载完成后整体不可变
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogLibrary {
    pub sections: Vec<Section>,
}

impl CatalogLibrary {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn category_count(&self) -> usize {
        self.sections.iter().map(|s| s.categories.len()).sum()
    }

    pub fn activity_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.categories)
            .map(|c| c.activities.len())
            .sum()
    }

    pub fn recommendation_count(&self) -> usize {
        self.iter_activities()
            .map(|a| a.recommendations.len())
            .sum()
    }

    /// 按目录顺序（章节→分类→活动，各级均为编写顺序）展平遍历全部活动
    pub fn iter_activities(&self) -> impl Iterator<Item = &Activity> {
        self.sections
            .iter()
            .flat_map(|s| &s.categories)
            .flat_map(|c| &c.activities)
    }
}
