//! 富文本文档树
//!
//! 表单只把编辑器内容当作一棵不透明的树来持有和序列化，
//! 不实现任何编辑器语义。块节点内部结构原样透传。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 富文本文档
///
/// JSON 形态：`{"type":"doc","content":[...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextDocument {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Vec<BlockNode>,
}

/// 块级节点
///
/// 除 `type` 和 `content` 外的字段（attrs、marks 等）原样保留。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl RichTextDocument {
    /// 空文档：`{"type":"doc","content":[]}`
    pub fn empty() -> Self {
        Self {
            kind: "doc".to_string(),
            content: Vec::new(),
        }
    }

    /// 判断文档是否为空
    ///
    /// 为空的定义：没有任何块节点，或只有一个块节点且该节点没有内部内容。
    pub fn is_empty(&self) -> bool {
        match self.content.as_slice() {
            [] => true,
            [only] => only.content.as_ref().map_or(true, |inner| inner.is_empty()),
            _ => false,
        }
    }

    /// 序列化为提交载荷中使用的 JSON 字符串
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// 由纯文本段落构建文档，每个段落一个 paragraph 节点
    pub fn from_plain_paragraphs(paragraphs: &[String]) -> Self {
        let content = paragraphs
            .iter()
            .filter(|p| !p.trim().is_empty())
            .map(|p| BlockNode {
                kind: "paragraph".to_string(),
                content: Some(vec![serde_json::json!({
                    "type": "text",
                    "text": p,
                })]),
                extra: serde_json::Map::new(),
            })
            .collect();

        Self {
            kind: "doc".to_string(),
            content,
        }
    }
}

impl Default for RichTextDocument {
    fn default() -> Self {
        Self::empty()
    }
}
