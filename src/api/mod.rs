//! API 层
//!
//! 负责所有与远端服务的交互：
//!
//! - `executor` - HttpExecutor，唯一的 reqwest::Client 持有者，只暴露请求能力
//! - `response` - 服务端统一响应信封
//! - `tags` - 标签服务客户端（获取标签列表）
//! - `questions` - 问题服务客户端（创建问题）
//!
//! 两个客户端分别以 trait（[`TagSource`] / [`QuestionGateway`]）注入表单，
//! 测试时可替换为内存实现。单次请求，无重试、无凭证刷新。

pub mod executor;
pub mod questions;
pub mod response;
pub mod tags;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::draft::QuestionPayload;
use crate::models::tag::TagInfo;
use response::ApiResponse;

pub use executor::HttpExecutor;
pub use questions::QuestionClient;
pub use tags::TagClient;

/// 标签建议来源
#[async_trait]
pub trait TagSource: Send + Sync {
    /// 分页获取标签列表
    async fn get_tag_list(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<ApiResponse<Vec<TagInfo>>, ApiError>;
}

/// 问题创建入口
#[async_trait]
pub trait QuestionGateway: Send + Sync {
    /// 创建问题
    ///
    /// # 返回
    /// - `Ok(Some(data))` - 服务端确认创建成功
    /// - `Ok(None)` - 请求完成但服务端返回失败信封
    /// - `Err(_)` - 网络或解析失败
    async fn create_question(
        &self,
        payload: &QuestionPayload,
        token: &str,
    ) -> Result<Option<Value>, ApiError>;
}
