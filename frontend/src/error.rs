//! 前端错误类型
//!
//! 所有错误都在发现它的组件内部终止，不会向上冒泡。

use thiserror::Error;

/// 登录表单向用户展示的错误
///
/// `Display` 即界面上的提示文本。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    /// 邮箱或密码为空，未发起登录
    #[error("Veuillez remplir tous les champs")]
    MissingFields,
    /// 认证服务返回 false
    #[error("Email ou mot de passe incorrect")]
    Rejected,
    /// 认证服务失败或超时
    #[error("Erreur de connexion. Veuillez réessayer.")]
    Unavailable,
}

/// 认证服务错误 (区别于凭据被拒绝)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authentication timed out")]
    Timeout,
    #[error("authentication backend failed: {0}")]
    Backend(String),
    #[error("session storage failed: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json_wasm::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_errors_render_user_text() {
        assert_eq!(
            LoginError::MissingFields.to_string(),
            "Veuillez remplir tous les champs"
        );
        assert_eq!(
            LoginError::Rejected.to_string(),
            "Email ou mot de passe incorrect"
        );
        assert_eq!(
            LoginError::Unavailable.to_string(),
            "Erreur de connexion. Veuillez réessayer."
        );
    }
}
