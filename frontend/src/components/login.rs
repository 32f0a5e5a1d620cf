//! 登录视图
//!
//! 认证会话以参数显式传入，表单状态由本组件独占，卸载即丢弃。

mod form_state;
mod submit;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::AuthSession;
use crate::config::AppConfig;
use crate::components::icons::{AlertCircle, Calculator, Eye, EyeOff, LogIn};

use form_state::{LoginForm, LoginFormStore};
use submit::submit;

#[component]
pub fn LoginView(
    /// 认证会话
    auth: AuthSession,
    config: AppConfig,
) -> impl IntoView {
    let brand = config.product_name;
    let login_timeout_ms = config.login_timeout_ms;

    let initial = auth
        .remembered_email()
        .map(LoginForm::with_email)
        .unwrap_or_default();
    let form = RwSignal::new(initial);

    let is_loading = {
        let auth = auth.clone();
        move || auth.is_loading()
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let auth = auth.clone();
        spawn_local(async move {
            let deadline = TimeoutFuture::new(login_timeout_ms);
            submit(&form, &auth, deadline).await;
        });
    };

    let error_text = move || form.with(|f| f.error.map(|e| e.to_string()));
    let is_submitting = move || form.with(|f| f.is_submitting);

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! {
                <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50 flex items-center justify-center">
                    <div class="text-center">
                        <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600 mx-auto mb-4"></div>
                        <p class="text-gray-600">"Chargement..."</p>
                    </div>
                </div>
            }
        >
            <div class="min-h-screen bg-gradient-to-br from-blue-50 via-white to-indigo-50 flex items-center justify-center p-4">
                <div class="max-w-md w-full space-y-8">
                    <div class="text-center">
                        <div class="flex items-center justify-center space-x-3 mb-6">
                            <div class="p-4 bg-gradient-to-br from-blue-600 to-blue-700 rounded-2xl shadow-lg">
                                <Calculator attr:class="h-10 w-10 text-white" />
                            </div>
                            <div class="text-left">
                                <h1 class="text-3xl font-bold text-blue-700">{brand.clone()}</h1>
                                <p class="text-sm text-gray-600 font-medium">"Logiciel de Gestion Comptable"</p>
                            </div>
                        </div>
                        <h2 class="text-2xl font-bold text-gray-900">"Connexion"</h2>
                        <p class="text-gray-600">"Accédez à votre espace de travail comptable"</p>
                    </div>

                    <div class="bg-white rounded-2xl shadow-xl border border-gray-200 p-8">
                        <form on:submit=on_submit.clone() class="space-y-6">
                            {move || error_text().map(|message| view! {
                                <div role="alert" class="bg-red-50 border border-red-200 rounded-lg p-4 flex items-center space-x-3">
                                    <AlertCircle attr:class="h-5 w-5 text-red-600 flex-shrink-0" />
                                    <p class="text-red-700 text-sm">{message}</p>
                                </div>
                            })}

                            <div>
                                <label for="email" class="block text-sm font-medium text-gray-700 mb-2">
                                    "Adresse email"
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder="votre.email@cabinet.ci"
                                    on:input=move |ev| form.update_form(|f| f.set_email(event_target_value(&ev)))
                                    prop:value=move || form.with(|f| f.email.clone())
                                    class="w-full px-4 py-3 border border-gray-300 rounded-lg"
                                    required
                                />
                            </div>

                            <div>
                                <label for="password" class="block text-sm font-medium text-gray-700 mb-2">
                                    "Mot de passe"
                                </label>
                                <div class="relative">
                                    <input
                                        id="password"
                                        type=move || form.with(|f| f.password_input_type())
                                        placeholder="Votre mot de passe"
                                        on:input=move |ev| form.update_form(|f| f.set_password(event_target_value(&ev)))
                                        prop:value=move || form.with(|f| f.password.clone())
                                        class="w-full pl-4 pr-12 py-3 border border-gray-300 rounded-lg"
                                        required
                                    />
                                    <button
                                        type="button"
                                        class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600"
                                        on:click=move |_| form.update_form(LoginForm::toggle_password_visibility)
                                    >
                                        {move || if form.with(|f| f.show_password) {
                                            view! { <EyeOff attr:class="h-5 w-5" /> }.into_any()
                                        } else {
                                            view! { <Eye attr:class="h-5 w-5" /> }.into_any()
                                        }}
                                    </button>
                                </div>
                            </div>

                            <button
                                type="submit"
                                class="w-full bg-blue-600 text-white py-3 px-4 rounded-lg flex items-center justify-center space-x-2 disabled:opacity-50"
                                disabled=is_submitting
                            >
                                {move || if is_submitting() {
                                    view! {
                                        <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-white"></div>
                                        <span>"Connexion en cours..."</span>
                                    }.into_any()
                                } else {
                                    view! {
                                        <LogIn attr:class="h-5 w-5" />
                                        <span>"Se connecter"</span>
                                    }.into_any()
                                }}
                            </button>
                        </form>
                    </div>

                    <div class="text-center text-sm text-gray-500 space-y-2">
                        <p>"© 2024 " {brand.clone()} " - Tous droits réservés"</p>
                        <p>"Logiciel conforme aux normes comptables OHADA"</p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
