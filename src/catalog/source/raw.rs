//! 原始目录JSON镜像模型
//! 与线上数据形态一一对应：四级嵌套映射，键为点分数字id。
//!
//! 各级映射统一反序列化为保序条目表：serde_json的Map对重复键静默
//! 覆盖（last-write-wins），而重复id必须作为结构错误上报，同时各级
//! 插入顺序承载编写期排序语义，因此这里用MapAccess按文档顺序收集
//! (键, 值)对，重复键原样保留，交由转换层统一校验。

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

/// 保序条目表 - 原始JSON对象按文档顺序展开
pub type RawEntries<T> = Vec<(String, T)>;

/// 保序条目反序列化函数，配合 `#[serde(deserialize_with = "...")]` 使用
pub(crate) fn ordered_entries<'de, D, T>(deserializer: D) -> Result<RawEntries<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct EntriesVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
        type Value = RawEntries<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object keyed by dotted identifiers")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, T>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

/// 原始推荐活动条目 - 仅携带编写期缓存的展示名
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecommendation {
    #[serde(default)]
    pub activity: Option<String>,
}

/// 原始活动条目
#[derive(Debug, Clone, Deserialize)]
pub struct RawActivity {
    #[serde(default)]
    pub activity: Option<String>,
    #[serde(
        rename = "recommendedActivities",
        default,
        deserialize_with = "ordered_entries"
    )]
    pub recommended_activities: RawEntries<RawRecommendation>,
}

/// 原始分类条目
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "ordered_entries")]
    pub activities: RawEntries<RawActivity>,
}

/// 原始章节条目
#[derive(Debug, Clone, Deserialize)]
pub struct RawSection {
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "ordered_entries")]
    pub categories: RawEntries<RawCategory>,
}

/// 原始目录根 - 整个文档即 SectionId → RawSection 映射
#[derive(Debug, Clone, Default)]
pub struct RawCatalog {
    pub sections: RawEntries<RawSection>,
}

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(RawCatalog {
            sections: ordered_entries(deserializer)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_entries_keep_document_order() {
        // 键为点分数字，字典序与文档序不同（"1.10" < "1.2"字典序更小）
        let json = r#"{
            "1.2": { "category": "Lighting", "activities": {} },
            "1.10": { "category": "Wiring", "activities": {} },
            "1.5": { "category": "Outlets", "activities": {} }
        }"#;
        let entries: RawEntries<RawCategory> =
            serde_json::from_str::<RawSection>(&format!(
                r#"{{ "section": "Electrical", "categories": {json} }}"#
            ))
            .unwrap()
            .categories;

        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["1.2", "1.10", "1.5"]);
    }

    #[test]
    fn test_duplicate_keys_survive_to_validation() {
        let json = r#"{
            "2.1.1": { "activity": "Toilet Installation", "recommendedActivities": {} },
            "2.1.1": { "activity": "Toilet Repair", "recommendedActivities": {} }
        }"#;
        let raw: RawCategory = serde_json::from_str(&format!(
            r#"{{ "category": "Toilet", "activities": {json} }}"#
        ))
        .unwrap();

        // 两条同键条目都要保留，由校验层拒绝，而非静默覆盖
        assert_eq!(raw.activities.len(), 2);
        assert_eq!(raw.activities[0].0, "2.1.1");
        assert_eq!(raw.activities[1].0, "2.1.1");
    }

    #[test]
    fn test_missing_fields_default() {
        let raw: RawActivity = serde_json::from_str(r#"{}"#).unwrap();
        assert!(raw.activity.is_none());
        assert!(raw.recommended_activities.is_empty());
    }
}
