//! 标签服务客户端

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::api::executor::HttpExecutor;
use crate::api::response::ApiResponse;
use crate::api::TagSource;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::tag::TagInfo;

/// 标签服务客户端
pub struct TagClient {
    base_url: String,
    executor: Arc<HttpExecutor>,
}

impl TagClient {
    /// 创建新的标签客户端
    pub fn new(config: &Config, executor: Arc<HttpExecutor>) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            executor,
        }
    }
}

#[async_trait]
impl TagSource for TagClient {
    async fn get_tag_list(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<ApiResponse<Vec<TagInfo>>, ApiError> {
        let url = format!(
            "{}/api/tags?page={}&pageSize={}",
            self.base_url, page, page_size
        );

        debug!("获取标签列表: page={} pageSize={}", page, page_size);

        let response: ApiResponse<Vec<TagInfo>> = self.executor.get_json(&url).await?;

        debug!(
            "标签列表返回: success={} 共 {} 个",
            response.success,
            response.data.as_ref().map_or(0, |d| d.len())
        );

        Ok(response)
    }
}
