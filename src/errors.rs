use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone)]
pub enum LinktrackError {
    Config(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    Network(String),
}

impl LinktrackError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinktrackError::Config(_) => "E001",
            LinktrackError::DatabaseConfig(_) => "E002",
            LinktrackError::DatabaseConnection(_) => "E003",
            LinktrackError::DatabaseOperation(_) => "E004",
            LinktrackError::FileOperation(_) => "E005",
            LinktrackError::Validation(_) => "E006",
            LinktrackError::NotFound(_) => "E007",
            LinktrackError::Serialization(_) => "E008",
            LinktrackError::Network(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinktrackError::Config(_) => "Configuration Error",
            LinktrackError::DatabaseConfig(_) => "Database Configuration Error",
            LinktrackError::DatabaseConnection(_) => "Database Connection Error",
            LinktrackError::DatabaseOperation(_) => "Database Operation Error",
            LinktrackError::FileOperation(_) => "File Operation Error",
            LinktrackError::Validation(_) => "Validation Error",
            LinktrackError::NotFound(_) => "Resource Not Found",
            LinktrackError::Serialization(_) => "Serialization Error",
            LinktrackError::Network(_) => "Network Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinktrackError::Config(msg)
            | LinktrackError::DatabaseConfig(msg)
            | LinktrackError::DatabaseConnection(msg)
            | LinktrackError::DatabaseOperation(msg)
            | LinktrackError::FileOperation(msg)
            | LinktrackError::Validation(msg)
            | LinktrackError::NotFound(msg)
            | LinktrackError::Serialization(msg)
            | LinktrackError::Network(msg) => msg,
        }
    }

    /// 映射到 HTTP 状态码
    ///
    /// 只有校验失败和资源不存在是调用方的问题，其余一律 500。
    pub fn http_status(&self) -> StatusCode {
        match self {
            LinktrackError::Validation(_) => StatusCode::BAD_REQUEST,
            LinktrackError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于启动失败等终端场景）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinktrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinktrackError {}

// 便捷的构造函数
impl LinktrackError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinktrackError::Config(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LinktrackError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LinktrackError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LinktrackError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinktrackError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinktrackError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinktrackError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinktrackError::Serialization(msg.into())
    }

    pub fn network<T: Into<String>>(msg: T) -> Self {
        LinktrackError::Network(msg.into())
    }
}

impl From<sea_orm::DbErr> for LinktrackError {
    fn from(err: sea_orm::DbErr) -> Self {
        LinktrackError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LinktrackError {
    fn from(err: std::io::Error) -> Self {
        LinktrackError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinktrackError {
    fn from(err: serde_json::Error) -> Self {
        LinktrackError::Serialization(err.to_string())
    }
}

impl From<ureq::Error> for LinktrackError {
    fn from(err: ureq::Error) -> Self {
        LinktrackError::Network(err.to_string())
    }
}

impl From<::config::ConfigError> for LinktrackError {
    fn from(err: ::config::ConfigError) -> Self {
        LinktrackError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinktrackError>;
