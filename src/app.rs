use crate::api::{HttpExecutor, QuestionClient, QuestionGateway, TagClient, TagSource};
use crate::config::Config;
use crate::models::draft_loader;
use crate::storage::{ClientStorage, FileStorage};
use crate::ui::form::QuestionForm;
use crate::ui::toast::{TerminalToast, Toast};
use crate::utils::logging::{init_log_file, truncate_text};
use crate::utils::FailureLog;
use crate::workflow::SubmitOutcome;
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    form: QuestionForm,
    failure_log: FailureLog,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        // 装配表单的协作方：HTTP 客户端、本地存储、Toast
        let executor = Arc::new(HttpExecutor::new());
        let tag_source: Arc<dyn TagSource> =
            Arc::new(TagClient::new(&config, Arc::clone(&executor)));
        let gateway: Arc<dyn QuestionGateway> =
            Arc::new(QuestionClient::new(&config, executor));
        let storage: Arc<dyn ClientStorage> = Arc::new(FileStorage::new(&config.storage_file));
        let toast: Arc<dyn Toast> = Arc::new(TerminalToast);

        // 本进程即客户端环境
        let form = QuestionForm::new(tag_source, gateway, storage, toast, true);

        Ok(Self {
            config,
            form,
            failure_log: FailureLog::new(),
        })
    }

    /// 运行应用主逻辑
    ///
    /// 挂载表单后，把草稿目录里的每个草稿依次灌入表单并提交，
    /// 走的是和交互表单完全相同的 setter + 提交路径。
    pub async fn run(mut self) -> Result<()> {
        // 挂载：加载标签建议和 token
        self.form.mount().await;

        if self.form.token().is_none() {
            warn!("⚠️ 本地存储中没有 token，提交将被拦下");
        }

        // 加载所有待提交的草稿
        info!("\n📁 正在扫描待提交的草稿...");
        let drafts = draft_loader::load_all_draft_files(&self.config.draft_folder).await?;

        if drafts.is_empty() {
            warn!("⚠️ 没有找到待提交的草稿文件，程序结束");
            return Ok(());
        }

        let total = drafts.len();
        info!("✓ 找到 {} 个待提交的草稿", total);
        info!(
            "💡 可用标签建议 {} 个\n",
            self.form.tag_suggestions().len()
        );

        let mut stats = SubmitStats {
            total,
            ..Default::default()
        };

        for (idx, draft) in drafts.into_iter().enumerate() {
            let draft_index = idx + 1;
            info!(
                "[草稿 {}] 标题: {}",
                draft_index,
                truncate_text(&draft.title, 80)
            );

            if self.config.verbose_logging {
                info!("[草稿 {}]   标签: {:?}", draft_index, draft.tags);
            }

            let title = draft.title.clone();
            self.form.set_title(draft.title);
            self.form.set_tags(draft.tags);
            self.form.set_content(draft.content);

            match self.form.handle_submit().await {
                SubmitOutcome::Created => {
                    stats.success += 1;
                }
                SubmitOutcome::Rejected(e) => {
                    warn!("[草稿 {}] ⚠️ 校验未通过: {}", draft_index, e);
                    self.failure_log.write(&title, &e.to_string())?;
                    stats.failed += 1;
                }
                SubmitOutcome::Failed => {
                    self.failure_log.write(&title, "提交失败")?;
                    stats.failed += 1;
                }
            }
        }

        print_final_stats(&stats, &self.config);

        Ok(())
    }
}

/// 提交统计
#[derive(Debug, Default)]
struct SubmitStats {
    success: usize,
    failed: usize,
    total: usize,
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 草稿批量提交模式");
    info!("🌐 API 地址: {}", config.api_base_url);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &SubmitStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部提交完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}
