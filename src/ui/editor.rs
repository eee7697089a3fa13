//! 富文本编辑器句柄
//!
//! 编辑器本体是外部组件，挂载后把实例句柄交给表单。
//! 表单只会用它做一件事：提交成功后清空编辑器显示的内容。

use crate::models::document::RichTextDocument;

/// 编辑器实例可接受的命令
pub trait EditorCommands: Send {
    /// 用给定文档替换编辑器当前显示的内容
    fn set_content(&mut self, content: &RichTextDocument);
}
