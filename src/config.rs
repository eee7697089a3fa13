/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 问答平台 API 基础地址
    pub api_base_url: String,
    /// 客户端持久化存储文件（保存 token 等键值）
    pub storage_file: String,
    /// 草稿 TOML 文件存放目录
    pub draft_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8080".to_string(),
            storage_file: "storage.toml".to_string(),
            draft_folder: "drafts".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            storage_file: std::env::var("STORAGE_FILE").unwrap_or(default.storage_file),
            draft_folder: std::env::var("DRAFT_FOLDER").unwrap_or(default.draft_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
