pub mod url_validator;

use xxhash_rust::xxh64::xxh64;

pub use url_validator::validate_target_url;

/// 生成的短码长度
pub const SHORT_CODE_LENGTH: usize = 6;

/// 短码列允许的最大长度
pub const MAX_SHORT_CODE_LENGTH: usize = 10;

/// 由 URL 哈希得到短码，同一 URL + seed 总是得到同一个短码
///
/// seed 用于冲突时重新取值。
pub fn generate_short_code(url: &str, seed: u64) -> String {
    let hex = format!("{:016x}", xxh64(url.as_bytes(), seed));
    hex[..SHORT_CODE_LENGTH].to_string()
}

/// 校验路径中的短码：非空且只含字母、数字、`-`、`_`
pub fn is_valid_short_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_SHORT_CODE_LENGTH
        && code
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
