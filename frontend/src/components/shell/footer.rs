//! 页脚

use caccompta_shared::APP_VERSION;
use leptos::prelude::*;

use super::info_panels::{InfoPanel, InfoPanels};

#[component]
pub fn Footer(panels: InfoPanels) -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-6 text-sm text-gray-500">
                        <span>"© 2024 ComptaOHADA"</span>
                        <span>"•"</span>
                        <span>"Version " {APP_VERSION}</span>
                        <span>"•"</span>
                        <span>"Conforme OHADA"</span>
                    </div>
                    <div class="flex items-center space-x-4 text-sm text-gray-500">
                        <button
                            class="hover:text-gray-700"
                            on:click=move |_| panels.open(InfoPanel::Conditions)
                        >
                            "Conditions d'utilisation"
                        </button>
                        <button
                            class="hover:text-gray-700"
                            on:click=move |_| panels.open(InfoPanel::Support)
                        >
                            "Support technique"
                        </button>
                        <button
                            class="flex items-center space-x-1 hover:text-gray-700"
                            on:click=move |_| panels.open(InfoPanel::SystemStatus)
                        >
                            <div class="w-2 h-2 bg-green-500 rounded-full"></div>
                            <span>"Tous systèmes opérationnels"</span>
                        </button>
                    </div>
                </div>
            </div>
        </footer>
    }
}
