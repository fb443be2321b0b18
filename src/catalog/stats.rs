//! 目录加载统计
use std::fmt;

/// 单次加载的统计计数 - 构建索引时填充，加载完成后debug级别输出
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub sections: usize,
    pub categories: usize,
    pub activities: usize,
    pub recommendations: usize,
    /// 推荐目标id在本目录中不存在（弱引用悬挂，属正常数据，非错误）
    pub dangling_targets: usize,
    /// 推荐缓存展示名与目标活动真实名不一致（编写期过期标签）
    pub stale_labels: usize,
    /// 子条目id与父条目id名义前缀不匹配
    pub prefix_mismatches: usize,
}

impl CatalogStats {
    /// 是否存在弱引用层面的异常（不致命，但值得运维关注）
    pub fn has_reference_anomalies(&self) -> bool {
        self.dangling_targets > 0 || self.stale_labels > 0 || self.prefix_mismatches > 0
    }

    pub fn log_summary(&self) {
        log::debug!(
            "目录索引构建完成：sections={}, categories={}, activities={}, recommendations={}",
            self.sections,
            self.categories,
            self.activities,
            self.recommendations,
        );
        if self.has_reference_anomalies() {
            log::debug!(
                "目录弱引用统计：dangling_targets={}, stale_labels={}, prefix_mismatches={}",
                self.dangling_targets,
                self.stale_labels,
                self.prefix_mismatches,
            );
        }
    }
}

impl fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sections={}, categories={}, activities={}, recommendations={} (dangling={}, stale={}, prefix_mismatch={})",
            self.sections,
            self.categories,
            self.activities,
            self.recommendations,
            self.dangling_targets,
            self.stale_labels,
            self.prefix_mismatches,
        )
    }
}
