//! HTTP 执行器 - 基础设施
//!
//! 唯一的 reqwest::Client 持有者。客户端结构体不直接接触连接池，
//! 只通过这里暴露的 get/post 能力发请求。

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

/// HTTP 执行器
pub struct HttpExecutor {
    client: reqwest::Client,
}

impl HttpExecutor {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// GET 请求并解析 JSON 响应
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::RequestFailed {
                endpoint: url.to_string(),
                source,
            })?;

        Self::decode(url, response).await
    }

    /// POST JSON 请求并解析 JSON 响应
    ///
    /// # 参数
    /// - `url`: 完整请求地址
    /// - `body`: 请求体，序列化为 JSON
    /// - `token`: 可选的 Bearer 凭证
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ApiError::RequestFailed {
                endpoint: url.to_string(),
                source,
            })?;

        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadStatus {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::JsonParseFailed {
                endpoint: url.to_string(),
                source,
            })
    }
}

impl Default for HttpExecutor {
    fn default() -> Self {
        Self::new()
    }
}
