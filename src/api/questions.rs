//! 问题服务客户端

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::api::executor::HttpExecutor;
use crate::api::response::ApiResponse;
use crate::api::QuestionGateway;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::draft::QuestionPayload;

/// 问题服务客户端
pub struct QuestionClient {
    base_url: String,
    executor: Arc<HttpExecutor>,
}

impl QuestionClient {
    /// 创建新的问题客户端
    pub fn new(config: &Config, executor: Arc<HttpExecutor>) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            executor,
        }
    }
}

#[async_trait]
impl QuestionGateway for QuestionClient {
    async fn create_question(
        &self,
        payload: &QuestionPayload,
        token: &str,
    ) -> Result<Option<Value>, ApiError> {
        let url = format!("{}/api/questions", self.base_url);

        debug!("创建问题 Payload 标题: {}", payload.title);

        let response: ApiResponse<Value> = self
            .executor
            .post_json(&url, payload, Some(token))
            .await?;

        if !response.success {
            debug!("创建问题返回失败信封: {:?}", response.message);
        }

        Ok(response.into_data())
    }
}
