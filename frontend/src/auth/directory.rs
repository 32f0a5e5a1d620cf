//! 内存账户目录
//!
//! 演示用后端：每个角色一个预置账户。邮箱比较忽略大小写和首尾空白，
//! 密码精确匹配。

use async_trait::async_trait;
use caccompta_shared::{Role, UserProfile};

use super::AccountBackend;
use crate::error::AuthError;

#[derive(Debug, Clone)]
struct Account {
    password: String,
    profile: UserProfile,
}

#[derive(Debug, Clone, Default)]
pub struct DirectoryAuthenticator {
    accounts: Vec<Account>,
}

impl DirectoryAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置演示账户
    pub fn with_demo_accounts() -> Self {
        Self::new()
            .with_account(
                "expert@cabinet.ci",
                "expert2024",
                "Moussa Koné",
                Role::ExpertComptable,
            )
            .with_account(
                "assistant@cabinet.ci",
                "assistant2024",
                "Aminata Traoré",
                Role::Assistant,
            )
            .with_account(
                "stagiaire@cabinet.ci",
                "stagiaire2024",
                "Ibrahim Diallo",
                Role::Stagiaire,
            )
            .with_account(
                "admin@cabinet.ci",
                "admin2024",
                "Fatoumata Sangaré",
                Role::Admin,
            )
    }

    pub fn with_account(mut self, email: &str, password: &str, name: &str, role: Role) -> Self {
        let id = (self.accounts.len() + 1).to_string();
        self.accounts.push(Account {
            password: password.to_string(),
            profile: UserProfile {
                id,
                name: name.to_string(),
                email: normalize_email(email),
                role,
            },
        });
        self
    }

    fn find(&self, email: &str) -> Option<&Account> {
        let email = normalize_email(email);
        self.accounts.iter().find(|a| a.profile.email == email)
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait(?Send)]
impl AccountBackend for DirectoryAuthenticator {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserProfile>, AuthError> {
        Ok(self
            .find(email)
            .filter(|account| account.password == password)
            .map(|account| account.profile.clone()))
    }

    async fn lookup(&self, email: &str) -> Result<Option<UserProfile>, AuthError> {
        Ok(self.find(email).map(|account| account.profile.clone()))
    }
}
