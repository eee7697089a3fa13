//! 表单与提交流程测试
//!
//! 协作方全部换成内存实现，不依赖网络。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use ask_question_form::api::response::ApiResponse;
use ask_question_form::api::{QuestionGateway, TagSource};
use ask_question_form::models::tag::TagInfo;
use ask_question_form::ui::editor::EditorCommands;
use ask_question_form::{
    ApiError, MemoryStorage, QuestionForm, QuestionPayload, RichTextDocument, SubmitOutcome,
    Toast, ToastKind, ValidationError, TOKEN_KEY,
};

// ========== 内存协作方 ==========

/// 记录所有 Toast 的通知面
#[derive(Default)]
struct RecordingToast {
    messages: Mutex<Vec<(String, ToastKind)>>,
}

impl RecordingToast {
    fn last(&self) -> Option<(String, ToastKind)> {
        self.messages.lock().unwrap().last().cloned()
    }

    fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl Toast for RecordingToast {
    fn show_toast(&self, message: &str, kind: ToastKind) {
        self.messages
            .lock()
            .unwrap()
            .push((message.to_string(), kind));
    }
}

/// 固定应答的标签来源
struct FakeTagSource {
    /// None 表示模拟请求失败
    response: Option<ApiResponse<Vec<TagInfo>>>,
    calls: AtomicUsize,
}

impl FakeTagSource {
    fn with_names(names: &[&str]) -> Self {
        Self {
            response: Some(ApiResponse::ok(
                names.iter().map(|n| TagInfo::named(*n)).collect(),
            )),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn unsuccessful() -> Self {
        Self {
            response: Some(ApiResponse::failed("tag service unavailable")),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TagSource for FakeTagSource {
    async fn get_tag_list(
        &self,
        _page: u32,
        _page_size: u32,
    ) -> Result<ApiResponse<Vec<TagInfo>>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(ApiError::BadStatus {
                endpoint: "/api/tags".to_string(),
                status: 502,
            }),
        }
    }
}

/// 问题网关的固定应答
enum GatewayReply {
    /// 创建成功，返回服务端数据
    Created(Value),
    /// 失败信封（请求完成但 success=false）
    SoftFailure,
    /// 网络层面出错
    HardFailure,
}

/// 记录所有调用的问题网关
struct FakeGateway {
    reply: GatewayReply,
    calls: Mutex<Vec<QuestionPayload>>,
}

impl FakeGateway {
    fn new(reply: GatewayReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn created() -> Self {
        Self::new(GatewayReply::Created(json!({"id": 42})))
    }

    fn payloads(&self) -> Vec<QuestionPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionGateway for FakeGateway {
    async fn create_question(
        &self,
        payload: &QuestionPayload,
        _token: &str,
    ) -> Result<Option<Value>, ApiError> {
        self.calls.lock().unwrap().push(payload.clone());
        match &self.reply {
            GatewayReply::Created(data) => Ok(Some(data.clone())),
            GatewayReply::SoftFailure => Ok(None),
            GatewayReply::HardFailure => Err(ApiError::BadStatus {
                endpoint: "/api/questions".to_string(),
                status: 500,
            }),
        }
    }
}

/// 记录收到内容的编辑器句柄
struct RecordingEditor {
    received: Arc<Mutex<Vec<RichTextDocument>>>,
}

impl EditorCommands for RecordingEditor {
    fn set_content(&mut self, content: &RichTextDocument) {
        self.received.lock().unwrap().push(content.clone());
    }
}

// ========== 测试辅助 ==========

fn sample_content() -> RichTextDocument {
    RichTextDocument::from_plain_paragraphs(&["I tried flexbox but nothing works.".to_string()])
}

fn logged_in_storage() -> MemoryStorage {
    MemoryStorage::with_value(TOKEN_KEY, "test-token")
}

struct TestBench {
    form: QuestionForm,
    toast: Arc<RecordingToast>,
    gateway: Arc<FakeGateway>,
    tag_source: Arc<FakeTagSource>,
}

/// 用内存协作方装配一个客户端环境下的表单
fn build_form(tag_source: FakeTagSource, gateway: FakeGateway, storage: MemoryStorage) -> TestBench {
    build_form_in_env(tag_source, gateway, storage, true)
}

fn build_form_in_env(
    tag_source: FakeTagSource,
    gateway: FakeGateway,
    storage: MemoryStorage,
    is_client: bool,
) -> TestBench {
    let tag_source = Arc::new(tag_source);
    let gateway = Arc::new(gateway);
    let toast = Arc::new(RecordingToast::default());

    let form = QuestionForm::new(
        tag_source.clone(),
        gateway.clone(),
        Arc::new(storage),
        toast.clone(),
        is_client,
    );

    TestBench {
        form,
        toast,
        gateway,
        tag_source,
    }
}

/// 填入一份完整有效的草稿
fn fill_valid_draft(form: &mut QuestionForm) {
    form.set_title("How do I center a div?");
    form.set_tags(vec!["css".to_string(), "html".to_string()]);
    form.set_content(sample_content());
}

// ========== 校验拦截 ==========

#[tokio::test]
async fn test_blank_title_blocked() {
    for title in ["", "   ", "\t\n"] {
        let mut bench = build_form(
            FakeTagSource::with_names(&[]),
            FakeGateway::created(),
            logged_in_storage(),
        );
        bench.form.mount().await;

        fill_valid_draft(&mut bench.form);
        bench.form.set_title(title);

        let outcome = bench.form.handle_submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::TitleRequired),
            "空白标题应被拦下"
        );
        assert_eq!(
            bench.toast.last(),
            Some(("Title is required".to_string(), ToastKind::Error))
        );
        assert!(bench.gateway.payloads().is_empty(), "不应发起网络调用");
    }
}

#[tokio::test]
async fn test_empty_content_blocked() {
    // 空文档，以及只有一个无内部内容块的文档，都算空
    let no_blocks: RichTextDocument =
        serde_json::from_value(json!({"type": "doc", "content": []})).unwrap();
    let single_empty_block: RichTextDocument =
        serde_json::from_value(json!({"type": "doc", "content": [{"type": "paragraph"}]}))
            .unwrap();

    for content in [no_blocks, single_empty_block] {
        let mut bench = build_form(
            FakeTagSource::with_names(&[]),
            FakeGateway::created(),
            logged_in_storage(),
        );
        bench.form.mount().await;

        fill_valid_draft(&mut bench.form);
        bench.form.set_content(content);

        let outcome = bench.form.handle_submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::ContentRequired)
        );
        assert_eq!(
            bench.toast.last(),
            Some(("Content is required".to_string(), ToastKind::Error))
        );
        assert!(bench.gateway.payloads().is_empty());
    }
}

#[tokio::test]
async fn test_empty_tags_blocked() {
    let mut bench = build_form(
        FakeTagSource::with_names(&[]),
        FakeGateway::created(),
        logged_in_storage(),
    );
    bench.form.mount().await;

    fill_valid_draft(&mut bench.form);
    bench.form.set_tags(Vec::new());

    let outcome = bench.form.handle_submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::TagsRequired)
    );
    assert_eq!(
        bench.toast.last(),
        Some(("At least one tag is required".to_string(), ToastKind::Error))
    );
    assert!(bench.gateway.payloads().is_empty());
}

#[tokio::test]
async fn test_missing_token_blocked() {
    // 字段全部有效，但本地没有 token
    let mut bench = build_form(
        FakeTagSource::with_names(&[]),
        FakeGateway::created(),
        MemoryStorage::new(),
    );
    bench.form.mount().await;

    fill_valid_draft(&mut bench.form);

    let outcome = bench.form.handle_submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(ValidationError::NotLoggedIn)
    );
    assert_eq!(
        bench.toast.last(),
        Some((
            "You must be logged in to ask a question".to_string(),
            ToastKind::Error
        ))
    );
    assert!(bench.gateway.payloads().is_empty());
}

// ========== 提交 ==========

#[tokio::test]
async fn test_submit_success_resets_form() {
    let mut bench = build_form(
        FakeTagSource::with_names(&["css", "html"]),
        FakeGateway::created(),
        logged_in_storage(),
    );
    bench.form.mount().await;

    let editor_log = Arc::new(Mutex::new(Vec::new()));
    bench.form.attach_editor(Box::new(RecordingEditor {
        received: editor_log.clone(),
    }));

    fill_valid_draft(&mut bench.form);
    let expected_content = sample_content().to_json_string().unwrap();

    let outcome = bench.form.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Created);

    // 创建接口恰好被调用一次，正文是文档的 JSON 字符串形式
    let payloads = bench.gateway.payloads();
    assert_eq!(payloads.len(), 1, "创建接口应只调用一次");
    assert_eq!(payloads[0].title, "How do I center a div?");
    assert_eq!(payloads[0].tags, vec!["css", "html"]);
    assert_eq!(payloads[0].content, expected_content);

    assert_eq!(
        bench.toast.last(),
        Some((
            "Question created successfully".to_string(),
            ToastKind::Success
        ))
    );

    // 状态重置为空
    assert_eq!(bench.form.title(), "");
    assert!(bench.form.tags().is_empty());
    assert!(bench.form.content().is_empty());

    // 编辑器也被独立清空一次
    let received = editor_log.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert!(received[0].is_empty());
}

#[tokio::test]
async fn test_soft_failure_keeps_state() {
    let mut bench = build_form(
        FakeTagSource::with_names(&[]),
        FakeGateway::new(GatewayReply::SoftFailure),
        logged_in_storage(),
    );
    bench.form.mount().await;

    fill_valid_draft(&mut bench.form);

    let outcome = bench.form.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(
        bench.toast.last(),
        Some(("Failed to create question".to_string(), ToastKind::Error))
    );

    // 草稿保持不变
    assert_eq!(bench.form.title(), "How do I center a div?");
    assert_eq!(bench.form.tags(), ["css", "html"]);
    assert!(!bench.form.content().is_empty());
}

#[tokio::test]
async fn test_hard_failure_keeps_state() {
    let mut bench = build_form(
        FakeTagSource::with_names(&[]),
        FakeGateway::new(GatewayReply::HardFailure),
        logged_in_storage(),
    );
    bench.form.mount().await;

    fill_valid_draft(&mut bench.form);

    let outcome = bench.form.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(
        bench.toast.last(),
        Some(("Error creating question".to_string(), ToastKind::Error))
    );
    assert_eq!(bench.form.title(), "How do I center a div?");
}

#[tokio::test]
async fn test_double_submit_not_guarded() {
    // 没有提交中标记：同一份草稿连续提交会各自发起一次调用
    let mut bench = build_form(
        FakeTagSource::with_names(&[]),
        FakeGateway::new(GatewayReply::SoftFailure),
        logged_in_storage(),
    );
    bench.form.mount().await;

    fill_valid_draft(&mut bench.form);

    bench.form.handle_submit().await;
    bench.form.handle_submit().await;

    assert_eq!(bench.gateway.payloads().len(), 2);
}

// ========== 挂载 ==========

#[tokio::test]
async fn test_mount_loads_tag_suggestions_in_order() {
    let mut bench = build_form(
        FakeTagSource::with_names(&["rust", "css", "html"]),
        FakeGateway::created(),
        logged_in_storage(),
    );

    bench.form.mount().await;

    assert_eq!(bench.form.tag_suggestions(), ["rust", "css", "html"]);
    assert_eq!(bench.form.token(), Some("test-token"));

    // 重复挂载是空操作，不重新拉取
    bench.form.mount().await;
    assert_eq!(bench.tag_source.call_count(), 1);
}

#[tokio::test]
async fn test_mount_failure_leaves_suggestions_empty() {
    let mut bench = build_form(
        FakeTagSource::failing(),
        FakeGateway::created(),
        logged_in_storage(),
    );
    bench.form.mount().await;
    assert!(bench.form.tag_suggestions().is_empty());
    // 拉取失败不打扰用户
    assert_eq!(bench.toast.count(), 0);

    let mut bench = build_form(
        FakeTagSource::unsuccessful(),
        FakeGateway::created(),
        logged_in_storage(),
    );
    bench.form.mount().await;
    assert!(bench.form.tag_suggestions().is_empty());
}

#[tokio::test]
async fn test_non_client_context_skips_token_and_editor() {
    // 非客户端环境：不读存储，也不渲染编辑器
    let mut bench = build_form_in_env(
        FakeTagSource::with_names(&["css"]),
        FakeGateway::created(),
        logged_in_storage(),
        false,
    );
    bench.form.mount().await;

    assert_eq!(bench.form.token(), None);
    assert!(bench.form.view().editor.is_none());
}

#[tokio::test]
async fn test_view_wires_state_to_props() {
    let mut bench = build_form(
        FakeTagSource::with_names(&["css", "html"]),
        FakeGateway::created(),
        logged_in_storage(),
    );
    bench.form.mount().await;

    bench.form.set_title("How do I center a div?");
    bench.form.set_tags(vec!["css".to_string()]);

    let view = bench.form.view();

    assert_eq!(view.heading, "Ask a public question");
    assert_eq!(view.title_field.value, "How do I center a div?");
    assert!(view.editor.is_some(), "客户端环境下应渲染编辑器");
    assert_eq!(view.tag_picker.tags, ["css"]);
    assert_eq!(view.tag_picker.suggestions, ["css", "html"]);
    assert_eq!(view.tag_picker.max_tags, 5);
}
