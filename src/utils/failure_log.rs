//! 失败记录
//!
//! 把提交未成功的草稿追加写入 failed.txt，方便事后人工处理。

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 失败记录写入器
pub struct FailureLog {
    file_path: String,
}

impl FailureLog {
    pub fn new() -> Self {
        Self {
            file_path: "failed.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    /// 追加一条失败记录
    ///
    /// # 参数
    /// - `title`: 草稿标题
    /// - `reason`: 失败原因
    pub fn write(&self, title: &str, reason: &str) -> Result<()> {
        debug!("写入失败记录: {} (原因: {})", title, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;

        let line = format!("标题: {} | 原因: {}\n", title, reason);
        file.write_all(line.as_bytes())?;

        Ok(())
    }
}

impl Default for FailureLog {
    fn default() -> Self {
        Self::new()
    }
}
