//! # Ask Question Form
//!
//! 向问答平台提交问题的表单组件及其批量提交程序
//!
//! ## 架构设计
//!
//! ### ① 基础设施层
//! - `api::executor` - HttpExecutor，唯一的 reqwest::Client 持有者
//! - `storage` - 客户端持久化存储（token 所在）
//!
//! ### ② 协作方层
//! - `api::tags` / `api::questions` - 标签服务与问题服务客户端
//! - `ui::toast` - Toast 通知面
//! - `ui::editor` - 富文本编辑器句柄
//!
//! ### ③ 流程层
//! - `workflow::submit_flow` - 一次提交的完整流程（校验 → 创建 → 反馈）
//!
//! ### ④ 组件层
//! - `ui::form` - 表单状态持有者，挂载时拉取标签建议和 token
//! - `app` - 批量提交编排，把草稿文件灌入表单
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{ApiError, StorageError, ValidationError};
pub use models::document::RichTextDocument;
pub use models::draft::{Draft, QuestionPayload};
pub use storage::{ClientStorage, FileStorage, MemoryStorage, TOKEN_KEY};
pub use ui::form::QuestionForm;
pub use ui::toast::{Toast, ToastKind};
pub use workflow::{validate_draft, SubmitFlow, SubmitOutcome};
