//! 应用配置
//!
//! 默认值编译进二进制；可选地从 LocalStorage 的 `caccompta_config`
//! 键读取 JSON 覆盖项，缺失字段取默认值。

use caccompta_shared::{Currency, PRODUCT_NAME, STORAGE_CONFIG_KEY};
use chrono::TimeDelta;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::web::LocalStorage;

const DEFAULT_LOGIN_TIMEOUT_MS: u32 = 15_000;
const DEFAULT_SESSION_MAX_AGE_HOURS: u32 = 8;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 品牌名称（面包屑与登录页）
    pub product_name: String,
    /// 登录请求超时（毫秒）
    pub login_timeout_ms: u32,
    /// 会话恢复的最长有效期（小时）
    pub session_max_age_hours: u32,
    /// 默认显示币种 (ISO 代码)
    pub default_currency: String,
    /// 日志级别: error / warn / info / debug / trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            product_name: PRODUCT_NAME.to_string(),
            login_timeout_ms: DEFAULT_LOGIN_TIMEOUT_MS,
            session_max_age_hours: DEFAULT_SESSION_MAX_AGE_HOURS,
            default_currency: Currency::default().code().to_string(),
            log_level: if cfg!(debug_assertions) { "debug" } else { "info" }.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json_wasm::from_str(json)?)
    }

    /// 读取 LocalStorage 中的覆盖配置，不存在时返回默认值
    pub fn load() -> Result<Self, ConfigError> {
        match LocalStorage::get(STORAGE_CONFIG_KEY) {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::default()),
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.default_currency).unwrap_or_default()
    }

    pub fn session_max_age(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.session_max_age_hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.login_timeout_ms, 15_000);
        assert_eq!(config.currency(), Currency::Xof);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            AppConfig::from_json(r#"{"login_timeout_ms":3000,"default_currency":"eur"}"#).unwrap();
        assert_eq!(config.login_timeout_ms, 3000);
        assert_eq!(config.currency(), Currency::Eur);
        assert_eq!(config.product_name, "CACCompta V3.25");
        assert_eq!(config.session_max_age(), TimeDelta::hours(8));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{login_timeout_ms: }").is_err());
    }

    #[test]
    fn unknown_values_fall_back() {
        let config =
            AppConfig::from_json(r#"{"log_level":"verbose","default_currency":"GBP"}"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.currency(), Currency::Xof);
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let config = AppConfig::from_json(r#"{"log_level":"WARN"}"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
