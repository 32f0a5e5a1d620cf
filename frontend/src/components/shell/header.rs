//! 页眉与面包屑

use caccompta_shared::Section;
use leptos::prelude::*;

use crate::auth::AuthSession;
use crate::components::icons::LogOut;

/// 页眉：板块标题与当前用户
#[component]
pub fn Header(active: Signal<Section>, auth: AuthSession) -> impl IntoView {
    let user = {
        let auth = auth.clone();
        move || auth.user()
    };
    let on_logout = move |_| auth.logout();

    view! {
        <header class="bg-white border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{move || active.get().header_title()}</h1>
                <div class="flex items-center space-x-4">
                    {move || user().map(|user| view! {
                        <div class="flex items-center space-x-3">
                            <div class="h-9 w-9 rounded-full bg-blue-600 text-white flex items-center justify-center text-sm font-semibold">
                                {user.initials()}
                            </div>
                            <div class="text-right">
                                <p class="text-sm font-medium text-gray-900">{user.name.clone()}</p>
                                <span class=format!("text-xs px-2 py-0.5 rounded-full {}", user.role.badge_class())>
                                    {user.role.label()}
                                </span>
                            </div>
                        </div>
                    })}
                    <button
                        class="flex items-center space-x-1 text-sm text-gray-500 hover:text-red-600"
                        on:click=on_logout
                    >
                        <LogOut attr:class="h-4 w-4" />
                        <span>"Déconnexion"</span>
                    </button>
                </div>
            </div>
        </header>
    }
}

/// 面包屑、板块说明与上下文快捷操作
#[component]
pub fn Breadcrumb(active: Signal<Section>, brand: String) -> impl IntoView {
    view! {
        <div class="bg-white border-b border-gray-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-3">
                <div class="flex items-center justify-between">
                    <div>
                        <div class="flex items-center space-x-2 text-sm text-gray-500 mb-1">
                            <span class="font-semibold text-blue-600">{brand}</span>
                            <span class="text-gray-300">"/"</span>
                            <span class="text-gray-700 font-medium">
                                {move || active.get().header_title()}
                            </span>
                        </div>
                        <p class="text-sm text-gray-600">{move || active.get().description()}</p>
                    </div>
                    <div class="hidden lg:flex items-center space-x-2">
                        {move || active.get().quick_action().map(|label| view! {
                            <button class="text-sm text-blue-600 hover:text-blue-800 font-medium px-3 py-1 rounded-lg hover:bg-blue-50">
                                {label}
                            </button>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
