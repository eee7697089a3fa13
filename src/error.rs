//! 错误类型定义
//!
//! 按来源划分为三类：表单校验错误、API 调用错误、客户端存储错误。
//! 提交流程会把所有错误就地转换为 Toast 提示，不向上传播。

use thiserror::Error;

/// 表单校验错误
///
/// Display 内容即用户可见的 Toast 文案，与平台前端保持一致（英文）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 未登录（本地没有 token）
    #[error("You must be logged in to ask a question")]
    NotLoggedIn,
    /// 标题为空或全空白
    #[error("Title is required")]
    TitleRequired,
    /// 正文为空文档
    #[error("Content is required")]
    ContentRequired,
    /// 未选择任何标签
    #[error("At least one tag is required")]
    TagsRequired,
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回异常状态码
    #[error("API返回异常状态码 ({endpoint}): {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// 响应 JSON 解析失败
    #[error("响应JSON解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// 客户端存储错误
///
/// 只用于诊断日志，读取失败对上层表现为"没有这个键"。
#[derive(Debug, Error)]
pub enum StorageError {
    /// 读取存储文件失败
    #[error("读取存储文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 存储文件解析失败
    #[error("存储文件解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
