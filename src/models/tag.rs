use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 标签服务返回的标签信息
///
/// 表单只关心 `name`，其余字段原样保留。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInfo {
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl TagInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }
}
