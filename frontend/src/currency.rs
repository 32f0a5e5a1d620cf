//! 显示币种设置
//!
//! 启动时创建，显式传给外壳；参数板块可以切换币种。

use caccompta_shared::{Currency, Money};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CurrencySettings {
    selected: RwSignal<Currency>,
}

impl CurrencySettings {
    pub fn new(initial: Currency) -> Self {
        Self {
            selected: RwSignal::new(initial),
        }
    }

    pub fn currency(&self) -> Currency {
        self.selected.get()
    }

    pub fn select(&self, currency: Currency) {
        log::debug!("[Currency] Display currency set to {}", currency.code());
        self.selected.set(currency);
    }

    /// 按当前币种格式化主单位金额
    pub fn format_major(&self, major: i64) -> String {
        Money::from_major(major, self.currency()).to_string()
    }
}
