//! 目录条目模型（解析后标准结构）
//! 各层级子条目用Vec承载，结构性保持编写时插入顺序（顺序即编写期排序优先级）

/// 推荐活动 - 弱引用：目标活动id + 编写期缓存的展示名
/// 缓存名不保证与目标活动的真实名称同步（目录为静态数据，存在过期标签），
/// 需要实时对象时走 `CatalogStore::resolve_recommendation`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub target_id: String,
    pub label: String,
}

/// 活动 - 单个可计费/可排期的工作单元
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub name: String,
    /// 推荐活动列表，保持编写时顺序，目标可跨章节/分类
    pub recommendations: Vec<Recommendation>,
}

/// 分类 - 章节内相关活动分组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub activities: Vec<Activity>,
}

/// 章节 - 顶层行业领域分组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub categories: Vec<Category>,
}
