//! 业务板块定义
//!
//! `Section` 是封闭的板块集合，导航、页眉、面包屑和内容区都以它为键。
//! 字符串键只在边界处解析一次，未知键统一回退到 `Dashboard`。

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 无法识别的板块键
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section key: {0:?}")]
pub struct UnknownSection(pub String);

/// 应用板块枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    /// 仪表盘 (默认板块)
    #[default]
    Dashboard,
    Clients,
    PlanComptable,
    Ecritures,
    Immobilisations,
    Tresorerie,
    Facturation,
    Declarations,
    Reporting,
    Parametres,
    Installation,
    Setup,
}

impl Section {
    /// 导航顺序
    pub const ALL: [Section; 12] = [
        Section::Dashboard,
        Section::Clients,
        Section::PlanComptable,
        Section::Ecritures,
        Section::Immobilisations,
        Section::Tresorerie,
        Section::Facturation,
        Section::Declarations,
        Section::Reporting,
        Section::Parametres,
        Section::Installation,
        Section::Setup,
    ];

    /// 规范字符串键
    pub fn key(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Clients => "clients",
            Self::PlanComptable => "plan-comptable",
            Self::Ecritures => "ecritures",
            Self::Immobilisations => "immobilisations",
            Self::Tresorerie => "tresorerie",
            Self::Facturation => "facturation",
            Self::Declarations => "declarations",
            Self::Reporting => "reporting",
            Self::Parametres => "parametres",
            Self::Installation => "installation",
            Self::Setup => "setup",
        }
    }

    /// 解析字符串键，未知键回退到 `Dashboard`
    pub fn from_key_or_default(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }

    /// 页眉标题
    ///
    /// `installation` 和 `setup` 没有标题条目。
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("Tableau de bord"),
            Self::Clients => Some("Gestion des clients"),
            Self::PlanComptable => Some("Plan comptable OHADA"),
            Self::Ecritures => Some("Écritures comptables"),
            Self::Immobilisations => Some("Gestion des immobilisations"),
            Self::Tresorerie => Some("Gestion de trésorerie"),
            Self::Facturation => Some("Facturation et honoraires"),
            Self::Declarations => Some("Déclarations fiscales"),
            Self::Reporting => Some("Reporting et analyses"),
            Self::Parametres => Some("Paramètres du cabinet"),
            Self::Installation | Self::Setup => None,
        }
    }

    /// 页眉/面包屑显示用标题，缺失时为空字符串
    pub fn header_title(&self) -> &'static str {
        self.title().unwrap_or_default()
    }

    /// 面包屑下方的板块说明
    pub fn description(&self) -> &'static str {
        match self {
            Self::Dashboard => "Vue d'ensemble de l'activité du cabinet et indicateurs clés",
            Self::Clients => "Gestion complète du portefeuille clients et dossiers comptables",
            Self::PlanComptable => "Plan comptable général selon le référentiel OHADA",
            Self::Ecritures => "Saisie et validation des écritures comptables",
            Self::Immobilisations => {
                "Suivi du patrimoine immobilisé et calcul des amortissements"
            }
            Self::Tresorerie => "Gestion des flux de trésorerie et comptes bancaires",
            Self::Facturation => "Émission des factures d'honoraires et suivi des paiements",
            Self::Declarations => "Suivi des obligations fiscales et déclarations",
            Self::Reporting => "Analyses financières et génération de rapports",
            Self::Parametres => "Configuration générale du cabinet et préférences",
            Self::Installation => "Installation et gestion multi-cabinets",
            Self::Setup => "Configuration d'un nouveau cabinet",
        }
    }

    /// 导航栏标签
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Tableau de bord",
            Self::Clients => "Clients",
            Self::PlanComptable => "Plan comptable",
            Self::Ecritures => "Écritures",
            Self::Immobilisations => "Immobilisations",
            Self::Tresorerie => "Trésorerie",
            Self::Facturation => "Facturation",
            Self::Declarations => "Déclarations",
            Self::Reporting => "Reporting",
            Self::Parametres => "Paramètres",
            Self::Installation => "Installation",
            Self::Setup => "Nouveau cabinet",
        }
    }

    /// 面包屑右侧的上下文快捷操作
    pub fn quick_action(&self) -> Option<&'static str> {
        match self {
            Self::Clients => Some("Import clients"),
            Self::Reporting => Some("Planifier rapport"),
            _ => None,
        }
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.key() == key)
            .ok_or_else(|| UnknownSection(key.to_string()))
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_parses_back_to_its_section() {
        for section in Section::ALL {
            assert_eq!(section.key().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn unknown_keys_fall_back_to_dashboard() {
        for key in ["", "Dashboard", "CLIENTS", "plan_comptable", "admin", " clients"] {
            assert_eq!(Section::from_key_or_default(key), Section::Dashboard);
        }
        assert_eq!(
            "compta".parse::<Section>(),
            Err(UnknownSection("compta".to_string()))
        );
    }

    #[test]
    fn default_section_is_dashboard() {
        assert_eq!(Section::default(), Section::Dashboard);
    }

    #[test]
    fn installation_and_setup_have_blank_titles() {
        assert_eq!(Section::Installation.title(), None);
        assert_eq!(Section::Setup.header_title(), "");
        assert_eq!(
            Section::Setup.description(),
            "Configuration d'un nouveau cabinet"
        );
    }

    #[test]
    fn clients_labels_match_key() {
        let section = Section::from_key_or_default("clients");
        assert_eq!(section.header_title(), "Gestion des clients");
        assert_eq!(
            section.description(),
            "Gestion complète du portefeuille clients et dossiers comptables"
        );
    }

    #[test]
    fn quick_actions_only_on_clients_and_reporting() {
        let with_action: Vec<_> = Section::ALL
            .iter()
            .filter(|s| s.quick_action().is_some())
            .collect();
        assert_eq!(with_action, [&Section::Clients, &Section::Reporting]);
    }

    #[test]
    fn serde_uses_kebab_case_keys() {
        let json = serde_json::to_string(&Section::PlanComptable).unwrap();
        assert_eq!(json, "\"plan-comptable\"");
    }
}
