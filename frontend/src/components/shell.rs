//! 应用外壳
//!
//! 认证通过后渲染：导航栏、页眉、面包屑、板块内容、页脚和信息弹窗。
//! 当前板块只保存在外壳自己的路由器里。

mod footer;
mod header;
mod info_panels;
mod nav;
mod router;
mod sections;

use leptos::prelude::*;

use crate::auth::AuthSession;
use crate::config::AppConfig;
use crate::currency::CurrencySettings;

use footer::Footer;
use header::{Breadcrumb, Header};
use info_panels::{InfoPanelModals, InfoPanels};
use nav::HorizontalNav;
use router::{SectionOutlet, SectionRouter};

#[component]
pub fn AppShell(
    auth: AuthSession,
    config: AppConfig,
    currency: CurrencySettings,
) -> impl IntoView {
    let router = SectionRouter::new();
    let panels = InfoPanels::new();
    let active = router.active_signal();

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col">
            <HorizontalNav
                active=active
                on_change=router.on_change()
                brand=config.product_name.clone()
            />
            <Header active=active auth=auth />
            <Breadcrumb active=active brand=config.product_name />
            <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-6">
                <SectionOutlet router=router currency=currency />
            </main>
            <Footer panels=panels />
            <InfoPanelModals panels=panels />
        </div>
    }
}
