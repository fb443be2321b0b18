//! 点分标识符模型
//! 形如 `N` / `N.M` / `N.M.K` 的字符串键，名义上编码层级位置。
//! 注意：章节编号非连续（如7之后直接到12），id只作不透明键使用，
//! 不得当作稠密整数区间遍历。

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// 目录层级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdLevel {
    /// 章节（顶层行业领域，如 Electrical / Plumbing）
    Section,
    /// 分类（章节内相关活动分组）
    Category,
    /// 活动（单个可计费/可排期的工作单元）
    Activity,
}

impl IdLevel {
    /// 该层级id应含的点分段数
    pub fn segment_count(self) -> usize {
        match self {
            IdLevel::Section => 1,
            IdLevel::Category => 2,
            IdLevel::Activity => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IdLevel::Section => "section",
            IdLevel::Category => "category",
            IdLevel::Activity => "activity",
        }
    }
}

impl fmt::Display for IdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 各层级id形状校验正则 - 进程内仅编译一次
static SECTION_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("section id regex"));
static CATEGORY_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("category id regex"));
static ACTIVITY_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("activity id regex"));

/// 校验id是否符合指定层级的点分形状
pub fn is_valid_id(id: &str, level: IdLevel) -> bool {
    match level {
        IdLevel::Section => SECTION_ID_RE.is_match(id),
        IdLevel::Category => CATEGORY_ID_RE.is_match(id),
        IdLevel::Activity => ACTIVITY_ID_RE.is_match(id),
    }
}

/// 子id是否前缀匹配父id（名义层级约束）
/// 该约束在样例数据中存在违反（跨章节推荐为有意设计），仅用于告警统计，
/// 不作为加载失败条件
pub fn is_child_of(child: &str, parent: &str) -> bool {
    child
        .strip_prefix(parent)
        .is_some_and(|rest| rest.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_shapes() {
        assert!(is_valid_id("1", IdLevel::Section));
        assert!(is_valid_id("15", IdLevel::Section));
        assert!(is_valid_id("2.1", IdLevel::Category));
        assert!(is_valid_id("3.10", IdLevel::Category));
        assert!(is_valid_id("1.1.1", IdLevel::Activity));
        assert!(is_valid_id("15.1.1", IdLevel::Activity));

        assert!(!is_valid_id("1.1", IdLevel::Section));
        assert!(!is_valid_id("1", IdLevel::Category));
        assert!(!is_valid_id("1.1", IdLevel::Activity));
        assert!(!is_valid_id("1.1.1.1", IdLevel::Activity));
        assert!(!is_valid_id("1.a.1", IdLevel::Activity));
        assert!(!is_valid_id("", IdLevel::Section));
        assert!(!is_valid_id(" 1.1.1", IdLevel::Activity));
    }

    #[test]
    fn test_is_child_of() {
        assert!(is_child_of("1.1", "1"));
        assert!(is_child_of("1.1.1", "1.1"));
        // "1.10"的父是"1"而非"1.1"：必须按段比较，不能按字符前缀
        assert!(!is_child_of("1.10", "1.1"));
        assert!(!is_child_of("15.1.1", "1.1"));
        assert!(!is_child_of("1.1", "1.1"));
    }
}
