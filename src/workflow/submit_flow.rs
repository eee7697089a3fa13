//! 提交流程
//!
//! 定义"提交一次草稿"的完整顺序：
//! 1. token 检查 → 2. 标题/正文/标签校验 → 3. 序列化并调用创建接口
//! → 4. Toast 反馈
//!
//! 四类失败（未登录、字段校验、服务端失败信封、网络错误）全部就地
//! 转成 Toast，不向调用方抛错。单次尝试，无重试，无超时。

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::api::QuestionGateway;
use crate::error::ValidationError;
use crate::models::draft::Draft;
use crate::ui::toast::{Toast, ToastKind};
use crate::utils::logging::truncate_text;

/// 一次提交的结果
///
/// 对应表单的隐式状态机：校验失败回到原状态，创建成功后由表单重置，
/// 失败时草稿保持不变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 创建成功
    Created,
    /// 校验未通过，未发起网络调用
    Rejected(ValidationError),
    /// 网络调用发起但未成功（失败信封或请求出错）
    Failed,
}

/// 校验草稿
///
/// 顺序固定：标题 → 正文 → 标签，返回第一个未通过的项。
pub fn validate_draft(draft: &Draft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if draft.content.is_empty() {
        return Err(ValidationError::ContentRequired);
    }
    if draft.tags.is_empty() {
        return Err(ValidationError::TagsRequired);
    }
    Ok(())
}

/// 提交流程
pub struct SubmitFlow {
    gateway: Arc<dyn QuestionGateway>,
    toast: Arc<dyn Toast>,
}

impl SubmitFlow {
    /// 创建新的提交流程
    pub fn new(gateway: Arc<dyn QuestionGateway>, toast: Arc<dyn Toast>) -> Self {
        Self { gateway, toast }
    }

    /// 执行一次提交
    ///
    /// # 参数
    /// - `draft`: 当前草稿
    /// - `token`: 当前登录凭证
    pub async fn run(&self, draft: &Draft, token: Option<&str>) -> SubmitOutcome {
        // 未登录直接拦下，不发请求
        let token = match token {
            Some(token) => token,
            None => return self.reject(ValidationError::NotLoggedIn),
        };

        if let Err(e) = validate_draft(draft) {
            return self.reject(e);
        }

        // 正文序列化为 JSON 字符串后随标题、标签一起提交
        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                error!("❌ 草稿序列化失败: {}", e);
                self.toast
                    .show_toast("Error creating question", ToastKind::Error);
                return SubmitOutcome::Failed;
            }
        };

        info!("📤 正在提交问题: {}", truncate_text(&draft.title, 80));

        match self.gateway.create_question(&payload, token).await {
            Ok(Some(_)) => {
                info!("✓ 问题创建成功");
                self.toast
                    .show_toast("Question created successfully", ToastKind::Success);
                SubmitOutcome::Created
            }
            Ok(None) => {
                warn!("⚠️ 问题创建失败（服务端返回失败信封）");
                self.toast
                    .show_toast("Failed to create question", ToastKind::Error);
                SubmitOutcome::Failed
            }
            Err(e) => {
                error!("❌ 问题创建请求出错: {}", e);
                self.toast
                    .show_toast("Error creating question", ToastKind::Error);
                SubmitOutcome::Failed
            }
        }
    }

    fn reject(&self, err: ValidationError) -> SubmitOutcome {
        self.toast.show_toast(&err.to_string(), ToastKind::Error);
        SubmitOutcome::Rejected(err)
    }
}
