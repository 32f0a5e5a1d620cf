//! 板块视图映射
//!
//! `section_view` 对 `Section` 做穷尽匹配，新增板块而未提供视图会在编译期报错。
//! 各业务板块的具体功能不在外壳范围内，这里渲染占位面板。

use caccompta_shared::{Currency, Section};
use leptos::prelude::*;

use crate::currency::CurrencySettings;

/// 板块视图匹配函数
pub fn section_view(section: Section, currency: CurrencySettings) -> AnyView {
    match section {
        Section::Dashboard => view! { <Dashboard currency=currency /> }.into_any(),
        Section::Clients => view! { <ClientList /> }.into_any(),
        Section::PlanComptable => view! { <PlanComptable /> }.into_any(),
        Section::Ecritures => view! { <EcritureList /> }.into_any(),
        Section::Immobilisations => view! { <Immobilisations /> }.into_any(),
        Section::Tresorerie => view! { <Tresorerie /> }.into_any(),
        Section::Facturation => view! { <Facturation /> }.into_any(),
        Section::Declarations => view! { <Declarations /> }.into_any(),
        Section::Reporting => view! { <Reporting /> }.into_any(),
        Section::Parametres => view! { <Parametres currency=currency /> }.into_any(),
        Section::Installation => view! { <InstallationManager /> }.into_any(),
        Section::Setup => view! { <CabinetSetup /> }.into_any(),
    }
}

/// 板块根元素的 DOM id
pub fn panel_id(section: Section) -> &'static str {
    match section {
        Section::Dashboard => "dashboard",
        Section::Clients => "client-list",
        Section::PlanComptable => "plan-comptable",
        Section::Ecritures => "ecriture-list",
        Section::Immobilisations => "immobilisations",
        Section::Tresorerie => "tresorerie",
        Section::Facturation => "facturation",
        Section::Declarations => "declarations",
        Section::Reporting => "reporting",
        Section::Parametres => "parametres",
        Section::Installation => "installation-manager",
        Section::Setup => "cabinet-setup",
    }
}

/// 通用占位面板
#[component]
fn SectionPanel(section: Section, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <section id=panel_id(section) class="bg-white rounded-lg shadow-sm border border-gray-200 p-6 space-y-4">
            <div>
                <h2 class="text-xl font-semibold text-gray-900">{section.nav_label()}</h2>
                <p class="text-sm text-gray-600">{section.description()}</p>
            </div>
            {children.map(|children| children())}
        </section>
    }
}

#[component]
fn Dashboard(currency: CurrencySettings) -> impl IntoView {
    view! {
        <SectionPanel section=Section::Dashboard>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div class="p-4 rounded-lg bg-blue-50">
                    <p class="text-sm text-gray-600">"Clients actifs"</p>
                    <p class="text-2xl font-bold text-blue-700">"0"</p>
                </div>
                <div class="p-4 rounded-lg bg-green-50">
                    <p class="text-sm text-gray-600">"Écritures du mois"</p>
                    <p class="text-2xl font-bold text-green-700">"0"</p>
                </div>
                <div class="p-4 rounded-lg bg-orange-50">
                    <p class="text-sm text-gray-600">"Solde de trésorerie"</p>
                    <p class="text-2xl font-bold text-orange-700">{move || currency.format_major(0)}</p>
                </div>
            </div>
        </SectionPanel>
    }
}

#[component]
fn ClientList() -> impl IntoView {
    view! { <SectionPanel section=Section::Clients /> }
}

#[component]
fn PlanComptable() -> impl IntoView {
    view! { <SectionPanel section=Section::PlanComptable /> }
}

#[component]
fn EcritureList() -> impl IntoView {
    view! { <SectionPanel section=Section::Ecritures /> }
}

#[component]
fn Immobilisations() -> impl IntoView {
    view! { <SectionPanel section=Section::Immobilisations /> }
}

#[component]
fn Tresorerie() -> impl IntoView {
    view! { <SectionPanel section=Section::Tresorerie /> }
}

#[component]
fn Facturation() -> impl IntoView {
    view! { <SectionPanel section=Section::Facturation /> }
}

#[component]
fn Declarations() -> impl IntoView {
    view! { <SectionPanel section=Section::Declarations /> }
}

#[component]
fn Reporting() -> impl IntoView {
    view! { <SectionPanel section=Section::Reporting /> }
}

#[component]
fn Parametres(currency: CurrencySettings) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        if let Some(selected) = Currency::from_code(&event_target_value(&ev)) {
            currency.select(selected);
        }
    };

    view! {
        <SectionPanel section=Section::Parametres>
            <div class="max-w-sm">
                <label for="currency" class="block text-sm font-medium text-gray-700 mb-2">
                    "Devise d'affichage"
                </label>
                <select id="currency" class="w-full px-3 py-2 border border-gray-300 rounded-lg" on:change=on_change>
                    {Currency::ALL
                        .into_iter()
                        .map(|c| view! {
                            <option value=c.code() selected=move || currency.currency() == c>
                                {c.label()} " (" {c.symbol()} ")"
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
        </SectionPanel>
    }
}

#[component]
fn InstallationManager() -> impl IntoView {
    view! { <SectionPanel section=Section::Installation /> }
}

#[component]
fn CabinetSetup() -> impl IntoView {
    view! { <SectionPanel section=Section::Setup /> }
}
