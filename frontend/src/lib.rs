//! CACCompta 前端应用
//!
//! 模块划分：
//! - `auth`: 认证会话与会话持久化
//! - `gate`: 认证门控状态
//! - `components::login`: 登录视图与提交流程
//! - `components::shell`: 应用外壳与板块路由

mod auth;
mod components {
    mod icons;
    pub mod login;
    pub mod shell;
}
pub mod config;
mod currency;
pub mod error;
mod gate;

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{AuthSession, BrowserSessionStore, DirectoryAuthenticator};
use crate::components::login::LoginView;
use crate::components::shell::AppShell;
use crate::config::AppConfig;
use crate::currency::CurrencySettings;
use crate::gate::AuthGate;

// 原生 Web API 封装模块
pub(crate) mod web {
    mod storage;

    pub use storage::LocalStorage;
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // 1. 创建认证会话
    let auth = AuthSession::new(
        Arc::new(DirectoryAuthenticator::with_demo_accounts()),
        Arc::new(BrowserSessionStore),
        config.session_max_age(),
    );
    let currency = CurrencySettings::new(config.currency());

    // 2. 从 LocalStorage 恢复会话
    {
        let auth = auth.clone();
        spawn_local(async move { auth.restore().await });
    }

    // 3. 门控只在状态切换时重建视图
    let gate = {
        let auth = auth.clone();
        Memo::new(move |_| auth.gate())
    };

    move || match gate.get() {
        AuthGate::Unauthenticated => {
            view! { <LoginView auth=auth.clone() config=config.clone() /> }.into_any()
        }
        AuthGate::Authenticating => view! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50">
                <p class="text-gray-600">"Chargement de l'application..."</p>
            </div>
        }
        .into_any(),
        AuthGate::Ready => view! {
            <AppShell auth=auth.clone() config=config.clone() currency=currency />
        }
        .into_any(),
    }
}
