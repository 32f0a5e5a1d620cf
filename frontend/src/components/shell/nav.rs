//! 横向导航栏

use caccompta_shared::Section;
use leptos::prelude::*;

use crate::components::icons::Calculator;

#[component]
pub fn HorizontalNav(
    /// 当前板块
    active: Signal<Section>,
    /// 板块切换回调
    on_change: Callback<Section>,
    brand: String,
) -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center h-16 space-x-6">
                    <div class="flex items-center space-x-2 shrink-0">
                        <Calculator attr:class="h-6 w-6 text-blue-600" />
                        <span class="font-bold text-blue-700">{brand}</span>
                    </div>
                    <div class="flex items-center space-x-1 overflow-x-auto">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                let class = move || {
                                    if active.get() == section {
                                        "px-3 py-2 rounded-lg text-sm font-medium bg-blue-50 text-blue-700"
                                    } else {
                                        "px-3 py-2 rounded-lg text-sm font-medium text-gray-600 hover:bg-gray-50"
                                    }
                                };
                                view! {
                                    <button class=class on:click=move |_| on_change.run(section)>
                                        {section.nav_label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
