use crate::models::document::RichTextDocument;
use crate::models::draft::Draft;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 草稿 TOML 文件结构
#[derive(Debug, Deserialize)]
struct DraftFile {
    title: String,
    #[serde(default)]
    tags: Vec<String>,
    /// 正文段落，按行组成 paragraph 节点
    #[serde(default)]
    body: Vec<String>,
}

/// 从 TOML 文件加载数据并转换为 Draft 对象
pub async fn load_draft_file(draft_file_path: &Path) -> Result<Draft> {
    let content = fs::read_to_string(draft_file_path)
        .await
        .with_context(|| format!("无法读取草稿文件: {}", draft_file_path.display()))?;

    let file: DraftFile = toml::from_str(&content)
        .with_context(|| format!("无法解析草稿文件: {}", draft_file_path.display()))?;

    Ok(Draft {
        title: file.title,
        tags: file.tags,
        content: RichTextDocument::from_plain_paragraphs(&file.body),
    })
}

/// 从文件夹中加载所有 TOML 草稿并转换为 Draft 对象列表
pub async fn load_all_draft_files(folder_path: &str) -> Result<Vec<Draft>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut drafts = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            tracing::info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );

            match load_draft_file(&path).await {
                Ok(draft) => {
                    tracing::info!("成功加载草稿: {}", draft.title);
                    drafts.push(draft);
                }
                Err(e) => {
                    tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(drafts)
}
