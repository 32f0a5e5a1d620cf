//! 页脚信息弹窗
//!
//! 三个互相独立的弹窗开关（使用条款、技术支持、系统状态），
//! 页脚按钮打开，弹窗右上角按钮关闭。

mod content;

use leptos::prelude::*;

use crate::components::icons::X;
use content::{ConditionsContent, SupportContent, SystemStatusContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPanel {
    Conditions,
    Support,
    SystemStatus,
}

impl InfoPanel {
    pub fn title(&self) -> &'static str {
        match self {
            InfoPanel::Conditions => "Conditions d'utilisation",
            InfoPanel::Support => "Support Technique",
            InfoPanel::SystemStatus => "État des Systèmes",
        }
    }

    fn width_class(&self) -> &'static str {
        match self {
            InfoPanel::Conditions => "max-w-4xl",
            InfoPanel::Support => "max-w-2xl",
            InfoPanel::SystemStatus => "max-w-3xl",
        }
    }
}

/// 弹窗开关
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelFlags {
    conditions: bool,
    support: bool,
    system_status: bool,
}

impl PanelFlags {
    fn flag_mut(&mut self, panel: InfoPanel) -> &mut bool {
        match panel {
            InfoPanel::Conditions => &mut self.conditions,
            InfoPanel::Support => &mut self.support,
            InfoPanel::SystemStatus => &mut self.system_status,
        }
    }

    pub fn is_open(&self, panel: InfoPanel) -> bool {
        match panel {
            InfoPanel::Conditions => self.conditions,
            InfoPanel::Support => self.support,
            InfoPanel::SystemStatus => self.system_status,
        }
    }

    pub fn open(&mut self, panel: InfoPanel) {
        *self.flag_mut(panel) = true;
    }

    pub fn close(&mut self, panel: InfoPanel) {
        *self.flag_mut(panel) = false;
    }
}

/// 外壳持有的弹窗状态
#[derive(Clone, Copy)]
pub struct InfoPanels {
    flags: RwSignal<PanelFlags>,
}

impl InfoPanels {
    pub fn new() -> Self {
        Self {
            flags: RwSignal::new(PanelFlags::default()),
        }
    }

    pub fn is_open(&self, panel: InfoPanel) -> bool {
        self.flags.with(|flags| flags.is_open(panel))
    }

    pub fn open(&self, panel: InfoPanel) {
        self.flags.update(|flags| flags.open(panel));
    }

    pub fn close(&self, panel: InfoPanel) {
        self.flags.update(|flags| flags.close(panel));
    }
}

impl Default for InfoPanels {
    fn default() -> Self {
        Self::new()
    }
}

/// 弹窗外框
#[component]
fn InfoModal(panels: InfoPanels, panel: InfoPanel, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || panels.is_open(panel)>
            <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-50">
                <div class=format!("bg-white rounded-lg {} w-full max-h-[90vh] overflow-y-auto", panel.width_class())>
                    <div class="p-6 border-b border-gray-200">
                        <div class="flex items-center justify-between">
                            <h3 class="text-lg font-semibold text-gray-900">{panel.title()}</h3>
                            <button
                                class="text-gray-400 hover:text-gray-600"
                                on:click=move |_| panels.close(panel)
                            >
                                <X attr:class="h-6 w-6" />
                            </button>
                        </div>
                    </div>
                    <div class="p-6">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

/// 全部信息弹窗
#[component]
pub fn InfoPanelModals(panels: InfoPanels) -> impl IntoView {
    view! {
        <InfoModal panels=panels panel=InfoPanel::Conditions>
            <ConditionsContent />
        </InfoModal>
        <InfoModal panels=panels panel=InfoPanel::Support>
            <SupportContent />
        </InfoModal>
        <InfoModal panels=panels panel=InfoPanel::SystemStatus>
            <SystemStatusContent />
        </InfoModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [InfoPanel; 3] = [
        InfoPanel::Conditions,
        InfoPanel::Support,
        InfoPanel::SystemStatus,
    ];

    #[test]
    fn all_panels_start_closed() {
        let flags = PanelFlags::default();
        assert!(ALL.iter().all(|p| !flags.is_open(*p)));
    }

    #[test]
    fn panels_open_independently() {
        let mut flags = PanelFlags::default();
        flags.open(InfoPanel::Support);
        assert!(flags.is_open(InfoPanel::Support));
        assert!(!flags.is_open(InfoPanel::Conditions));
        assert!(!flags.is_open(InfoPanel::SystemStatus));

        flags.open(InfoPanel::SystemStatus);
        flags.close(InfoPanel::Support);
        assert!(!flags.is_open(InfoPanel::Support));
        assert!(flags.is_open(InfoPanel::SystemStatus));
    }

    #[test]
    fn signal_backed_panels_track_flags() {
        let owner = Owner::new();
        owner.set();

        let panels = InfoPanels::new();
        panels.open(InfoPanel::Conditions);
        assert!(panels.is_open(InfoPanel::Conditions));
        panels.close(InfoPanel::Conditions);
        assert!(!panels.is_open(InfoPanel::Conditions));
    }
}
