//! 会话持久化

use caccompta_shared::{STORAGE_LAST_EMAIL_KEY, STORAGE_SESSION_KEY, SessionRecord};

use crate::error::AuthError;
use crate::web::LocalStorage;

/// 会话存储
pub trait SessionStore: Send + Sync {
    fn load_session(&self) -> Option<SessionRecord>;
    fn save_session(&self, record: &SessionRecord) -> Result<(), AuthError>;
    fn clear_session(&self);
    fn last_email(&self) -> Option<String>;
    fn remember_email(&self, email: &str);
}

/// 基于浏览器 LocalStorage 的会话存储
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn load_session(&self) -> Option<SessionRecord> {
        LocalStorage::get_json(STORAGE_SESSION_KEY)
    }

    fn save_session(&self, record: &SessionRecord) -> Result<(), AuthError> {
        if LocalStorage::set_json(STORAGE_SESSION_KEY, record) {
            Ok(())
        } else {
            Err(AuthError::Storage(format!(
                "could not persist session for {}",
                record.email
            )))
        }
    }

    fn clear_session(&self) {
        LocalStorage::delete(STORAGE_SESSION_KEY);
    }

    fn last_email(&self) -> Option<String> {
        LocalStorage::get(STORAGE_LAST_EMAIL_KEY).filter(|email| !email.is_empty())
    }

    fn remember_email(&self, email: &str) {
        LocalStorage::set(STORAGE_LAST_EMAIL_KEY, email);
    }
}
