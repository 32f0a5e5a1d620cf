//! 用户与角色

use serde::{Deserialize, Serialize};

/// 事务所内的用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    ExpertComptable,
    Assistant,
    Stagiaire,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::ExpertComptable => "Expert-Comptable",
            Role::Assistant => "Assistant Comptable",
            Role::Stagiaire => "Stagiaire",
            Role::Admin => "Administrateur",
        }
    }

    /// 角色徽章样式
    pub fn badge_class(&self) -> &'static str {
        match self {
            Role::ExpertComptable => "bg-blue-100 text-blue-800",
            Role::Assistant => "bg-green-100 text-green-800",
            Role::Stagiaire => "bg-orange-100 text-orange-800",
            Role::Admin => "bg-purple-100 text-purple-800",
        }
    }
}

/// 已登录用户的公开资料
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl UserProfile {
    /// 头像占位用的首字母
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
