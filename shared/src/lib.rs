//! CACCompta 共享领域模型
//!
//! 纯数据与纯函数，不依赖 DOM 或响应式系统。

mod currency;
mod role;
mod section;
mod session;

pub use currency::{Currency, Money};
pub use role::{Role, UserProfile};
pub use section::{Section, UnknownSection};
pub use session::SessionRecord;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const PRODUCT_NAME: &str = "CACCompta V3.25";
pub const APP_VERSION: &str = "1.0.0";

pub const STORAGE_SESSION_KEY: &str = "caccompta_session";
pub const STORAGE_LAST_EMAIL_KEY: &str = "caccompta_last_email";
pub const STORAGE_CONFIG_KEY: &str = "caccompta_config";
