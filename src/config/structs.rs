use serde::{Deserialize, Serialize};

use crate::errors::{LinktrackError, Result};

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - analytics: 统计服务监听地址
/// - links: 链接服务监听地址与统计服务地址
/// - database: 数据库连接配置
/// - logging: 日志配置
/// - cors: 跨域配置
/// - dashboard: 终端面板访问的服务地址
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub analytics: AnalyticsServerConfig,
    #[serde(default)]
    pub links: LinkServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：LT，分隔符：__
    /// 示例：LT__ANALYTICS__PORT=4000
    pub fn load(path: &str) -> Result<Self> {
        use ::config::{Config, Environment, File};

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("LT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            );

        let config = builder.build()?.try_deserialize::<StaticConfig>()?;
        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LinktrackError::serialization(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 统计服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_analytics_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// 链接服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_links_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// 统计服务地址，为空时不上报点击
    #[serde(default = "default_analytics_url")]
    pub analytics_url: String,
}

/// 数据库连接配置
///
/// `host` 设置时按分项拼出 PostgreSQL URL，否则使用 `url`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default = "default_database_port")]
    pub port: u16,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_database_timeout")]
    pub timeout: u64,
}

impl DatabaseConfig {
    /// 只用一个 URL 构造配置（测试与 CLI 场景）
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// 计算最终使用的连接 URL
    pub fn effective_url(&self) -> Result<String> {
        let Some(host) = self.host.as_deref().filter(|h| !h.is_empty()) else {
            if self.url.is_empty() {
                return Err(LinktrackError::database_config(
                    "database.url is empty and database.host is not set",
                ));
            }
            return Ok(self.url.clone());
        };

        let name = self.name.as_deref().unwrap_or_default();
        let user = self.user.as_deref().unwrap_or_default();
        if name.is_empty() || user.is_empty() {
            return Err(LinktrackError::database_config(
                "database.name and database.user are required when database.host is set",
            ));
        }

        let mut url = url::Url::parse(&format!("postgres://{}:{}/{}", host, self.port, name))
            .map_err(|e| LinktrackError::database_config(format!("Invalid database host: {}", e)))?;
        url.set_username(user)
            .map_err(|_| LinktrackError::database_config("Invalid database user"))?;
        if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
            url.set_password(Some(password))
                .map_err(|_| LinktrackError::database_config("Invalid database password"))?;
        }
        Ok(url.to_string())
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_cors_enabled")]
    pub enabled: bool,
    #[serde(default = "default_cors_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

/// 终端面板配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_link_service_url")]
    pub link_service_url: String,
    #[serde(default = "default_analytics_url")]
    pub analytics_service_url: String,
    #[serde(default = "default_dashboard_timeout")]
    pub timeout_secs: u64,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_analytics_port() -> u16 {
    4000
}

fn default_links_port() -> u16 {
    3000
}

fn default_workers() -> usize {
    num_cpus::get().min(32)
}

fn default_analytics_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_link_service_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_database_url() -> String {
    "linktrack.db".to_string()
}

fn default_database_port() -> u16 {
    5432
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_database_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_cors_enabled() -> bool {
    true
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_max_age() -> u64 {
    3600
}

fn default_dashboard_timeout() -> u64 {
    5
}

// ============================================================
// Default implementations
// ============================================================

impl Default for AnalyticsServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_analytics_port(),
            workers: default_workers(),
        }
    }
}

impl Default for LinkServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_links_port(),
            workers: default_workers(),
            analytics_url: default_analytics_url(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            host: None,
            port: default_database_port(),
            name: None,
            user: None,
            password: None,
            pool_size: default_database_pool_size(),
            timeout: default_database_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_cors_enabled(),
            allowed_origins: default_cors_allowed_origins(),
            max_age: default_cors_max_age(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            link_service_url: default_link_service_url(),
            analytics_service_url: default_analytics_url(),
            timeout_secs: default_dashboard_timeout(),
        }
    }
}
