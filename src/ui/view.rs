//! 表单渲染 props
//!
//! 标题输入框、编辑器、标签选择器、提交按钮都是外部展示组件，
//! 表单只负责把自身状态装配成它们的 props。

use crate::models::document::RichTextDocument;

/// 最多可选标签数
pub const MAX_TAGS: usize = 5;

/// 表单标题
pub const FORM_HEADING: &str = "Ask a public question";

/// 编辑器上方的引导文案
pub const EDITOR_TITLE: &str = "Detailed explanation of your problem?";

/// 标题输入框 props
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFieldProps {
    pub value: String,
}

/// 富文本编辑器 props
#[derive(Debug, Clone, PartialEq)]
pub struct EditorProps {
    pub title: &'static str,
    pub content: RichTextDocument,
}

/// 标签选择器 props
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPickerProps {
    pub tags: Vec<String>,
    pub suggestions: Vec<String>,
    pub max_tags: usize,
}

/// 整个表单的渲染视图
///
/// `editor` 只在客户端环境确认后出现，避免环境相关的渲染不一致。
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub heading: &'static str,
    pub title_field: TitleFieldProps,
    pub editor: Option<EditorProps>,
    pub tag_picker: TagPickerProps,
}
