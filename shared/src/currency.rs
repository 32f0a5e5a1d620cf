//! 货币与金额格式化
//!
//! 金额以最小货币单位 (`i64`) 存储，避免浮点误差。
//! 显示遵循法语习惯：空格分隔千位，逗号作小数点，符号后置。

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// 西非法郎 (UEMOA)
    #[default]
    Xof,
    /// 中非法郎 (CEMAC)
    Xaf,
    Eur,
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Xof, Currency::Xaf, Currency::Eur, Currency::Usd];

    /// ISO 4217 代码
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Xof => "XOF",
            Currency::Xaf => "XAF",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Xof | Currency::Xaf => "FCFA",
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Currency::Xof => "Franc CFA (BCEAO)",
            Currency::Xaf => "Franc CFA (BEAC)",
            Currency::Eur => "Euro",
            Currency::Usd => "Dollar US",
        }
    }

    /// 小数位数，CFA 法郎没有辅币
    pub fn decimals(&self) -> u32 {
        match self {
            Currency::Xof | Currency::Xaf => 0,
            Currency::Eur | Currency::Usd => 2,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// 带币种的金额
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// 最小货币单位
    pub minor: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(minor: i64, currency: Currency) -> Self {
        Self { minor, currency }
    }

    /// 以主单位构造 (如 1500 FCFA, 12 €)
    pub fn from_major(major: i64, currency: Currency) -> Self {
        let factor = 10_i64.pow(currency.decimals());
        Self::new(major.saturating_mul(factor), currency)
    }
}

/// 按三位一组插入空格
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

impl Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals();
        let factor = 10_u64.pow(decimals);
        let abs = self.minor.unsigned_abs();
        let sign = if self.minor < 0 { "-" } else { "" };

        let integer = group_thousands(&(abs / factor).to_string());
        if decimals == 0 {
            write!(f, "{sign}{integer} {}", self.currency.symbol())
        } else {
            let fraction = abs % factor;
            write!(
                f,
                "{sign}{integer},{fraction:0width$} {}",
                self.currency.symbol(),
                width = decimals as usize
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cfa_amounts_have_no_decimals() {
        let amount = Money::from_major(1_234_567, Currency::Xof);
        assert_eq!(amount.to_string(), "1 234 567 FCFA");
    }

    #[test]
    fn euro_amounts_use_comma_decimals() {
        assert_eq!(Money::new(123_450, Currency::Eur).to_string(), "1 234,50 €");
        assert_eq!(Money::new(5, Currency::Usd).to_string(), "0,05 $");
    }

    #[test]
    fn negative_amounts_keep_sign_in_front() {
        assert_eq!(Money::new(-1_000, Currency::Xaf).to_string(), "-1 000 FCFA");
        assert_eq!(
            Money::new(i64::MIN, Currency::Xof).to_string(),
            "-9 223 372 036 854 775 808 FCFA"
        );
    }

    #[test]
    fn small_numbers_are_not_grouped() {
        assert_eq!(Money::from_major(999, Currency::Xof).to_string(), "999 FCFA");
        assert_eq!(Money::from_major(0, Currency::Eur).to_string(), "0,00 €");
    }

    #[test]
    fn from_code_is_case_insensitive() {
        assert_eq!(Currency::from_code("eur"), Some(Currency::Eur));
        assert_eq!(Currency::from_code(" XOF "), Some(Currency::Xof));
        assert_eq!(Currency::from_code("GBP"), None);
    }
}
