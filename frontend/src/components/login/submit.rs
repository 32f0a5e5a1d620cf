//! 登录提交流程
//!
//! 流程：防重复提交 -> 非空校验 -> 标记提交中 -> 调用认证（带截止时间）-> 映射结果。
//! `is_submitting` 由 `SubmitGuard` 在任何退出路径上复位，
//! 包括提交 future 被中途丢弃的情况。

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};

use super::form_state::LoginFormStore;
use crate::auth::Authenticator;
use crate::error::{AuthError, LoginError};

/// 一次提交的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 上一次提交尚未结束，本次忽略
    Busy,
    /// 字段为空，未调用认证
    Invalid,
    Accepted,
    Rejected,
    Failed,
}

/// 提交中标记的作用域守卫
struct SubmitGuard<'a, S: LoginFormStore> {
    store: &'a S,
}

impl<'a, S: LoginFormStore> SubmitGuard<'a, S> {
    fn acquire(store: &'a S) -> Self {
        store.update_form(|form| {
            form.is_submitting = true;
            form.error = None;
        });
        Self { store }
    }
}

impl<S: LoginFormStore> Drop for SubmitGuard<'_, S> {
    fn drop(&mut self) {
        self.store.update_form(|form| form.is_submitting = false);
    }
}

/// 提交登录表单
///
/// `deadline` 先于认证完成时按连接错误处理。凭据被接受时不设置任何本地状态，
/// 外壳会因认证状态变化而重新渲染。
pub async fn submit<S, A, D>(store: &S, auth: &A, deadline: D) -> SubmitOutcome
where
    S: LoginFormStore,
    A: Authenticator + ?Sized,
    D: Future<Output = ()>,
{
    if store.read_form(|form| form.is_submitting) {
        return SubmitOutcome::Busy;
    }

    let credentials = match store.read_form(|form| form.credentials()) {
        Ok(credentials) => credentials,
        Err(e) => {
            store.update_form(|form| {
                form.error = Some(e);
                form.is_submitting = false;
            });
            return SubmitOutcome::Invalid;
        }
    };

    let _guard = SubmitGuard::acquire(store);

    let attempt = auth.login(&credentials.email, &credentials.password);
    let result = match select(pin!(attempt), pin!(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(AuthError::Timeout),
    };

    match result {
        Ok(true) => {
            log::info!("[Login] Credentials accepted for {}", credentials.email);
            SubmitOutcome::Accepted
        }
        Ok(false) => {
            log::info!("[Login] Credentials rejected for {}", credentials.email);
            store.update_form(|form| form.error = Some(LoginError::Rejected));
            SubmitOutcome::Rejected
        }
        Err(e) => {
            log::warn!("[Login] Authentication failed: {e}");
            store.update_form(|form| form.error = Some(LoginError::Unavailable));
            SubmitOutcome::Failed
        }
    }
}
