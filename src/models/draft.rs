//! 问题草稿
//!
//! 草稿只存在于瞬态表单状态中：挂载时为空，由用户输入修改，
//! 提交成功后重置为空。

use serde::Serialize;

use crate::models::document::RichTextDocument;

/// 进行中的、尚未提交的问题
#[derive(Debug, Clone, Default)]
pub struct Draft {
    /// 标题
    pub title: String,
    /// 标签（有序，期望去重，上限由标签选择器控制）
    pub tags: Vec<String>,
    /// 富文本正文
    pub content: RichTextDocument,
}

impl Draft {
    /// 创建空草稿
    pub fn empty() -> Self {
        Self::default()
    }

    /// 重置为空草稿
    pub fn reset(&mut self) {
        self.title.clear();
        self.tags.clear();
        self.content = RichTextDocument::empty();
    }

    /// 转换为提交载荷，正文序列化为 JSON 字符串
    pub fn to_payload(&self) -> Result<QuestionPayload, serde_json::Error> {
        Ok(QuestionPayload {
            title: self.title.clone(),
            tags: self.tags.clone(),
            content: self.content.to_json_string()?,
        })
    }
}

/// 创建问题的提交载荷
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPayload {
    pub title: String,
    pub tags: Vec<String>,
    /// 富文本文档的 JSON 字符串形式
    pub content: String,
}
