//! 提问表单 - 状态持有者
//!
//! 持有一份瞬态草稿（标题、标签、正文）以及 token、标签建议和
//! 编辑器句柄。外部展示组件通过 setter 回写状态，提交交给
//! [`SubmitFlow`](crate::workflow::SubmitFlow) 编排。

use std::sync::Arc;

use tracing::{debug, error};

use crate::api::{QuestionGateway, TagSource};
use crate::models::document::RichTextDocument;
use crate::models::draft::Draft;
use crate::storage::{ClientStorage, TOKEN_KEY};
use crate::ui::editor::EditorCommands;
use crate::ui::toast::Toast;
use crate::ui::view::{
    EditorProps, FormView, TagPickerProps, TitleFieldProps, EDITOR_TITLE, FORM_HEADING, MAX_TAGS,
};
use crate::workflow::{SubmitFlow, SubmitOutcome};

/// 标签建议固定取第 1 页
const TAG_PAGE: u32 = 1;
/// 标签建议最多取 100 条
const TAG_PAGE_SIZE: u32 = 100;

/// 提问表单
pub struct QuestionForm {
    draft: Draft,
    editor: Option<Box<dyn EditorCommands>>,
    token: Option<String>,
    tag_suggestions: Vec<String>,
    mounted: bool,
    /// 是否处于客户端（可交互）环境
    is_client: bool,

    tag_source: Arc<dyn TagSource>,
    storage: Arc<dyn ClientStorage>,
    submit_flow: SubmitFlow,
}

impl QuestionForm {
    /// 创建新表单，草稿为空
    pub fn new(
        tag_source: Arc<dyn TagSource>,
        gateway: Arc<dyn QuestionGateway>,
        storage: Arc<dyn ClientStorage>,
        toast: Arc<dyn Toast>,
        is_client: bool,
    ) -> Self {
        Self {
            draft: Draft::empty(),
            editor: None,
            token: None,
            tag_suggestions: Vec::new(),
            mounted: false,
            is_client,
            tag_source,
            storage,
            submit_flow: SubmitFlow::new(gateway, toast),
        }
    }

    /// 挂载表单：加载标签建议和 token
    ///
    /// 整个生命周期内只执行一次，后续调用是空操作。
    /// 两个加载互相独立，不保证先后顺序：
    /// - 标签建议：取第 1 页最多 100 条，成功时按返回顺序替换建议列表，
    ///   失败时建议保持为空，只记诊断日志，不打扰用户
    /// - token：仅在客户端环境下从持久化存储读取，不重试、不校验有效期
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let tag_source = Arc::clone(&self.tag_source);
        let storage = Arc::clone(&self.storage);
        let is_client = self.is_client;

        let (tag_result, token) = futures::join!(
            async move { tag_source.get_tag_list(TAG_PAGE, TAG_PAGE_SIZE).await },
            async move {
                if is_client {
                    storage.get(TOKEN_KEY)
                } else {
                    None
                }
            },
        );

        match tag_result {
            Ok(response) if response.success => {
                if let Some(data) = response.data {
                    self.tag_suggestions = data.into_iter().map(|tag| tag.name).collect();
                    debug!("✓ 标签建议加载完成，共 {} 个", self.tag_suggestions.len());
                }
            }
            Ok(response) => {
                debug!("标签列表返回失败信封: {:?}", response.message);
            }
            Err(e) => {
                error!("标签列表获取失败: {}", e);
            }
        }

        self.token = token;
    }

    // ========== 展示组件回调 ==========

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.draft.tags = tags;
    }

    pub fn set_content(&mut self, content: RichTextDocument) {
        self.draft.content = content;
    }

    /// 编辑器挂载完成后注入实例句柄
    pub fn attach_editor(&mut self, editor: Box<dyn EditorCommands>) {
        self.editor = Some(editor);
    }

    /// 处理表单提交
    ///
    /// 校验、请求、通知都在 [`SubmitFlow`] 内完成；这里只在创建成功后
    /// 重置草稿，并额外命令已挂载的编辑器清空显示内容（状态重置之外的
    /// 第二次清空）。没有提交中标记，也不阻止重复提交。
    pub async fn handle_submit(&mut self) -> SubmitOutcome {
        let outcome = self
            .submit_flow
            .run(&self.draft, self.token.as_deref())
            .await;

        if outcome == SubmitOutcome::Created {
            self.draft.reset();
            if let Some(editor) = self.editor.as_mut() {
                editor.set_content(&RichTextDocument::empty());
            }
        }

        outcome
    }

    /// 装配当前状态对应的渲染视图
    ///
    /// 编辑器 props 只在客户端环境确认后出现。
    pub fn view(&self) -> FormView {
        FormView {
            heading: FORM_HEADING,
            title_field: TitleFieldProps {
                value: self.draft.title.clone(),
            },
            editor: self.is_client.then(|| EditorProps {
                title: EDITOR_TITLE,
                content: self.draft.content.clone(),
            }),
            tag_picker: TagPickerProps {
                tags: self.draft.tags.clone(),
                suggestions: self.tag_suggestions.clone(),
                max_tags: MAX_TAGS,
            },
        }
    }

    // ========== 状态只读访问 ==========

    pub fn title(&self) -> &str {
        &self.draft.title
    }

    pub fn tags(&self) -> &[String] {
        &self.draft.tags
    }

    pub fn content(&self) -> &RichTextDocument {
        &self.draft.content
    }

    pub fn tag_suggestions(&self) -> &[String] {
        &self.tag_suggestions
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
