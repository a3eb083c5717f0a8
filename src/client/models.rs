use serde::{Deserialize, Serialize};

/// `GET /api/links` 中的一项
///
/// `created_at` 保持原样字符串，只用于展示。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkListing {
    pub short_code: String,
    #[serde(default)]
    pub original_url: String,
    #[serde(default)]
    pub created_at: String,
}

/// `GET /api/analytics` 中的一项
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClickCount {
    pub short_code: String,
    #[serde(default)]
    pub clicks: u64,
}

/// `POST /api/shorten` 的响应
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortenedLink {
    pub short_code: String,
    pub short_url: String,
}
