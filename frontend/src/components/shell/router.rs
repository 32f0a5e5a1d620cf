//! 板块路由服务
//!
//! 外壳唯一的路由状态：当前板块。初始为仪表盘，只在内存中，
//! 刷新页面即复位（不写入 URL 或存储）。

use caccompta_shared::Section;
use leptos::prelude::*;

use super::sections::section_view;
use crate::currency::CurrencySettings;

/// 板块路由器
///
/// 通过信号驱动内容区更新。实现了 `Copy`，可直接作为 Props 传递。
#[derive(Clone, Copy)]
pub struct SectionRouter {
    current: ReadSignal<Section>,
    set_current: WriteSignal<Section>,
}

impl SectionRouter {
    pub fn new() -> Self {
        let (current, set_current) = signal(Section::default());
        Self {
            current,
            set_current,
        }
    }

    /// 当前板块（响应式读取）
    pub fn active(&self) -> Section {
        self.current.get()
    }

    pub fn active_signal(&self) -> Signal<Section> {
        self.current.into()
    }

    pub fn navigate(&self, section: Section) {
        log::debug!("[Router] Changing section to: {section}");
        self.set_current.set(section);
    }

    /// 按字符串键导航，未知键回退到仪表盘
    pub fn navigate_key(&self, key: &str) {
        let section = key.parse::<Section>().unwrap_or_else(|e| {
            log::warn!("[Router] {e}, falling back to dashboard");
            Section::Dashboard
        });
        self.navigate(section);
    }

    /// 交给导航栏的板块切换回调
    pub fn on_change(&self) -> Callback<Section> {
        let router = *self;
        Callback::new(move |section| router.navigate(section))
    }
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// 内容区出口
///
/// 根据当前板块渲染对应的视图。
#[component]
pub fn SectionOutlet(router: SectionRouter, currency: CurrencySettings) -> impl IntoView {
    move || section_view(router.active(), currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_router(test: impl FnOnce(SectionRouter)) {
        let owner = Owner::new();
        owner.set();
        test(SectionRouter::new());
    }

    #[test]
    fn starts_on_dashboard() {
        with_router(|router| {
            assert_eq!(router.current.get_untracked(), Section::Dashboard);
        });
    }

    #[test]
    fn navigating_to_clients_updates_breadcrumb() {
        with_router(|router| {
            router.navigate_key("clients");
            let active = router.current.get_untracked();
            assert_eq!(active, Section::Clients);
            assert_eq!(active.header_title(), "Gestion des clients");
        });
    }

    #[test]
    fn unknown_key_falls_back_to_dashboard() {
        with_router(|router| {
            router.navigate(Section::Reporting);
            router.navigate_key("bilan");
            assert_eq!(router.current.get_untracked(), Section::Dashboard);
        });
    }

    #[test]
    fn callback_navigates() {
        with_router(|router| {
            router.on_change().run(Section::Tresorerie);
            assert_eq!(router.current.get_untracked(), Section::Tresorerie);
        });
    }
}
