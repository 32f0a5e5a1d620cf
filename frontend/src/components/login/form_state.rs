//! 登录表单状态
//!
//! 表单的全部字段放在一个 `LoginForm` 结构体里，用 `RwSignal` 持有，
//! 提交流程通过 `LoginFormStore` 读写，与具体的信号实现解耦。

use leptos::prelude::*;

use crate::error::LoginError;

/// 已通过非空校验的凭据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    /// 当前显示的错误，编辑任一字段或开始新的提交时清除
    pub error: Option<LoginError>,
    pub is_submitting: bool,
}

impl LoginForm {
    /// 预填邮箱（上次登录成功的账户）
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.error = None;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
        self.error = None;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// 密码输入框类型
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    /// 非空校验
    pub fn credentials(&self) -> Result<Credentials, LoginError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// 表单状态的读写入口
pub trait LoginFormStore {
    fn read_form<R>(&self, f: impl FnOnce(&LoginForm) -> R) -> R;
    fn update_form(&self, f: impl FnOnce(&mut LoginForm));
}

impl LoginFormStore for RwSignal<LoginForm> {
    fn read_form<R>(&self, f: impl FnOnce(&LoginForm) -> R) -> R {
        self.with_untracked(f)
    }

    // 组件卸载后信号已被释放，此时写入直接忽略
    fn update_form(&self, f: impl FnOnce(&mut LoginForm)) {
        self.try_update(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_error() -> LoginForm {
        LoginForm {
            email: "a@cabinet.ci".into(),
            password: "x".into(),
            error: Some(LoginError::Rejected),
            ..LoginForm::default()
        }
    }

    #[test]
    fn editing_email_clears_error() {
        let mut form = form_with_error();
        form.set_email("b@cabinet.ci".into());
        assert_eq!(form.error, None);
        assert_eq!(form.email, "b@cabinet.ci");
    }

    #[test]
    fn editing_password_clears_error() {
        let mut form = form_with_error();
        form.set_password(String::new());
        assert_eq!(form.error, None);
    }

    #[test]
    fn toggling_visibility_keeps_error() {
        let mut form = form_with_error();
        form.toggle_password_visibility();
        assert!(form.show_password);
        assert_eq!(form.password_input_type(), "text");
        assert_eq!(form.error, Some(LoginError::Rejected));
    }

    #[test]
    fn credentials_require_both_fields() {
        let mut form = LoginForm::with_email("a@cabinet.ci");
        assert_eq!(form.credentials(), Err(LoginError::MissingFields));

        form.set_email(String::new());
        form.set_password("secret".into());
        assert_eq!(form.credentials(), Err(LoginError::MissingFields));

        form.set_email("a@cabinet.ci".into());
        assert_eq!(
            form.credentials(),
            Ok(Credentials {
                email: "a@cabinet.ci".into(),
                password: "secret".into(),
            })
        );
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = LoginForm::with_email(" ");
        form.set_password(" ".into());
        assert!(form.credentials().is_ok());
    }
}
