//! 数据模型
//!
//! - `document` - 富文本文档树（编辑器内容的只读视图）
//! - `draft` - 问题草稿与提交载荷
//! - `tag` - 标签信息
//! - `draft_loader` - 从 TOML 文件加载草稿

pub mod document;
pub mod draft;
pub mod draft_loader;
pub mod tag;

pub use document::{BlockNode, RichTextDocument};
pub use draft::{Draft, QuestionPayload};
pub use draft_loader::{load_all_draft_files, load_draft_file};
pub use tag::TagInfo;
