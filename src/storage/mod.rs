//! 客户端持久化存储
//!
//! 浏览器环境下 token 存在 localStorage 里；这里把"按键读取字符串"
//! 抽象成 trait，便于在没有真实存储的环境下测试。
//! 本组件对存储只读。

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::error::StorageError;

/// token 在存储中的固定键名
pub const TOKEN_KEY: &str = "token";

/// 客户端存储访问器
pub trait ClientStorage: Send + Sync {
    /// 按键读取字符串值，不存在或读取失败时返回 None
    fn get(&self, key: &str) -> Option<String>;
}

/// 基于 TOML 文件的存储实现
///
/// 文件内容是一张字符串键值表，例如：
///
/// ```toml
/// token = "eyJhbGciOi..."
/// ```
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 读取并解析存储文件
    fn read_table(&self) -> Result<toml::Table, StorageError> {
        let path = self.path.display().to_string();
        let content = std::fs::read_to_string(&self.path)
            .map_err(|source| StorageError::ReadFailed { path: path.clone(), source })?;
        toml::from_str(&content).map_err(|source| StorageError::ParseFailed { path, source })
    }
}

impl ClientStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let table = match self.read_table() {
            Ok(table) => table,
            Err(e) => {
                // 文件缺失或损坏时只记诊断日志，对上层表现为空存储
                debug!("客户端存储不可用: {}", e);
                return None;
            }
        };

        table.get(key).and_then(|v| v.as_str()).map(str::to_string)
    }
}

/// 内存存储实现，用于测试和非交互环境
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.insert(key, value);
        storage
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl ClientStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
