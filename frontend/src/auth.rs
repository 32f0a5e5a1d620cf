//! 认证模块
//!
//! - `Authenticator`: 登录能力，登录视图只依赖这个 trait
//! - `AccountBackend`: 账户后端（外部协作方），默认提供内存目录实现
//! - `AuthSession`: 持有认证状态信号，在启动时创建并显式传给外壳与登录视图
//!
//! 会话记录保存在 LocalStorage 中（只保存邮箱和登录时间，不保存密码）。

mod directory;
mod store;

use std::sync::Arc;

use async_trait::async_trait;
use caccompta_shared::{SessionRecord, UserProfile};
use chrono::{TimeDelta, Utc};
use leptos::prelude::*;

use crate::error::AuthError;
use crate::gate::AuthGate;

pub use directory::DirectoryAuthenticator;
pub use store::{BrowserSessionStore, SessionStore};

/// 登录能力
///
/// `Ok(false)` 表示凭据被拒绝，`Err` 表示服务本身失败。
#[async_trait(?Send)]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<bool, AuthError>;
}

/// 账户后端
#[async_trait(?Send)]
pub trait AccountBackend: Send + Sync {
    /// 校验凭据，成功时返回用户资料
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, AuthError>;

    /// 根据邮箱查找用户（用于恢复会话）
    async fn lookup(&self, email: &str) -> Result<Option<UserProfile>, AuthError>;
}

/// 认证状态
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    /// 已登录用户（未认证时为 None）
    pub user: Option<UserProfile>,
    /// 是否正在恢复/校验会话
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn gate(&self) -> AuthGate {
        AuthGate::evaluate(self.is_authenticated(), self.loading)
    }
}

/// 认证会话
///
/// 在应用启动时创建一次，生命周期与页面相同。
#[derive(Clone)]
pub struct AuthSession {
    state: RwSignal<AuthState>,
    backend: Arc<dyn AccountBackend>,
    store: Arc<dyn SessionStore>,
    max_age: TimeDelta,
}

impl AuthSession {
    pub fn new(
        backend: Arc<dyn AccountBackend>,
        store: Arc<dyn SessionStore>,
        max_age: TimeDelta,
    ) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            backend,
            store,
            max_age,
        }
    }

    /// 认证状态（只读信号）
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// 当前渲染门控状态（响应式）
    pub fn gate(&self) -> AuthGate {
        self.state.with(AuthState::gate)
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.with(|s| s.user.clone())
    }

    /// 上次成功登录的邮箱（用于预填）
    pub fn remembered_email(&self) -> Option<String> {
        self.store.last_email()
    }

    /// 从存储中恢复会话
    ///
    /// 无论结果如何，结束时 `loading` 都会被置为 false。
    pub async fn restore(&self) {
        let user = match self.store.load_session() {
            Some(record) if record.is_expired(Utc::now(), self.max_age) => {
                log::info!("[Auth] Stored session for {} expired", record.email);
                self.store.clear_session();
                None
            }
            Some(record) => match self.backend.lookup(&record.email).await {
                Ok(Some(user)) => {
                    log::info!("[Auth] Session restored for {}", user.email);
                    Some(user)
                }
                Ok(None) => {
                    log::warn!("[Auth] Stored session references unknown account");
                    self.store.clear_session();
                    None
                }
                Err(e) => {
                    log::warn!("[Auth] Session restore failed: {e}");
                    None
                }
            },
            None => None,
        };

        self.state.try_update(|state| {
            state.user = user;
            state.loading = false;
        });
    }

    /// 注销并清除会话
    ///
    /// 门控状态随之变化，外壳自动切回登录页。
    pub fn logout(&self) {
        self.store.clear_session();
        self.state.update(|state| state.user = None);
        log::info!("[Auth] Signed out");
    }
}

#[async_trait(?Send)]
impl Authenticator for AuthSession {
    async fn login(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        let Some(user) = self.backend.authenticate(email, password).await? else {
            return Ok(false);
        };

        let record = SessionRecord::new(user.email.clone(), Utc::now());
        if let Err(e) = self.store.save_session(&record) {
            // 会话仍然有效，只是刷新后需要重新登录
            log::warn!("[Auth] {e}");
        }
        self.store.remember_email(email);

        log::info!("[Auth] Signed in as {} ({})", user.email, user.role.label());
        self.state.try_update(|state| {
            state.user = Some(user);
            state.loading = false;
        });
        Ok(true)
    }
}

#[cfg(test)]
mod tests;
