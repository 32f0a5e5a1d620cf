use super::*;
use std::sync::Mutex;

// =========================================================
// 辅助类型
// =========================================================

#[derive(Default)]
struct MemorySessionStore {
    session: Mutex<Option<SessionRecord>>,
    last_email: Mutex<Option<String>>,
}

impl MemorySessionStore {
    fn with_session(record: SessionRecord) -> Self {
        Self {
            session: Mutex::new(Some(record)),
            ..Self::default()
        }
    }

    fn session(&self) -> Option<SessionRecord> {
        self.session.lock().unwrap().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load_session(&self) -> Option<SessionRecord> {
        self.session()
    }

    fn save_session(&self, record: &SessionRecord) -> Result<(), AuthError> {
        *self.session.lock().unwrap() = Some(record.clone());
        Ok(())
    }

    fn clear_session(&self) {
        *self.session.lock().unwrap() = None;
    }

    fn last_email(&self) -> Option<String> {
        self.last_email.lock().unwrap().clone()
    }

    fn remember_email(&self, email: &str) {
        *self.last_email.lock().unwrap() = Some(email.to_string());
    }
}

fn session_with(store: Arc<MemorySessionStore>) -> (Owner, AuthSession) {
    let owner = Owner::new();
    owner.set();
    let session = AuthSession::new(
        Arc::new(DirectoryAuthenticator::with_demo_accounts()),
        store,
        TimeDelta::hours(8),
    );
    (owner, session)
}

// =========================================================
// 账户目录
// =========================================================

#[tokio::test]
async fn test_directory_accepts_valid_credentials() {
    let directory = DirectoryAuthenticator::with_demo_accounts();
    let user = directory
        .authenticate("expert@cabinet.ci", "expert2024")
        .await
        .unwrap()
        .expect("account should exist");
    assert_eq!(user.name, "Moussa Koné");
    assert_eq!(user.role, caccompta_shared::Role::ExpertComptable);
}

#[tokio::test]
async fn test_directory_email_is_case_insensitive() {
    let directory = DirectoryAuthenticator::with_demo_accounts();
    let user = directory
        .authenticate("  Admin@Cabinet.CI ", "admin2024")
        .await
        .unwrap();
    assert!(user.is_some());
}

#[tokio::test]
async fn test_directory_rejects_wrong_password() {
    let directory = DirectoryAuthenticator::with_demo_accounts();
    let user = directory
        .authenticate("expert@cabinet.ci", "EXPERT2024")
        .await
        .unwrap();
    assert!(user.is_none());
    assert!(directory.lookup("nobody@cabinet.ci").await.unwrap().is_none());
}

// =========================================================
// 会话
// =========================================================

#[tokio::test]
async fn test_new_session_starts_loading_and_unauthenticated() {
    let (_owner, session) = session_with(Arc::new(MemorySessionStore::default()));
    assert!(session.is_loading());
    assert!(!session.is_authenticated());
    assert_eq!(session.gate(), AuthGate::Unauthenticated);
}

#[tokio::test]
async fn test_login_success_records_session() {
    let store = Arc::new(MemorySessionStore::default());
    let (_owner, session) = session_with(store.clone());

    let accepted = session.login("assistant@cabinet.ci", "assistant2024").await;

    assert_eq!(accepted, Ok(true));
    assert_eq!(session.gate(), AuthGate::Ready);
    assert_eq!(session.user().unwrap().name, "Aminata Traoré");
    assert_eq!(store.session().unwrap().email, "assistant@cabinet.ci");
    assert_eq!(
        session.remembered_email().as_deref(),
        Some("assistant@cabinet.ci")
    );
}

#[tokio::test]
async fn test_login_rejection_leaves_state_untouched() {
    let store = Arc::new(MemorySessionStore::default());
    let (_owner, session) = session_with(store.clone());

    let accepted = session.login("assistant@cabinet.ci", "wrong").await;

    assert_eq!(accepted, Ok(false));
    assert!(!session.is_authenticated());
    assert!(store.session().is_none());
    assert!(session.remembered_email().is_none());
}

#[tokio::test]
async fn test_restore_valid_session() {
    let record = SessionRecord::new("stagiaire@cabinet.ci", Utc::now() - TimeDelta::hours(1));
    let (_owner, session) = session_with(Arc::new(MemorySessionStore::with_session(record)));

    session.restore().await;

    assert!(!session.is_loading());
    assert_eq!(session.user().unwrap().email, "stagiaire@cabinet.ci");
}

#[tokio::test]
async fn test_restore_expired_session_clears_it() {
    let store = Arc::new(MemorySessionStore::with_session(SessionRecord::new(
        "stagiaire@cabinet.ci",
        Utc::now() - TimeDelta::hours(9),
    )));
    let (_owner, session) = session_with(store.clone());

    session.restore().await;

    assert!(!session.is_loading());
    assert!(!session.is_authenticated());
    assert!(store.session().is_none());
}

#[tokio::test]
async fn test_restore_unknown_account_clears_session() {
    let store = Arc::new(MemorySessionStore::with_session(SessionRecord::new(
        "ghost@cabinet.ci",
        Utc::now(),
    )));
    let (_owner, session) = session_with(store.clone());

    session.restore().await;

    assert!(!session.is_authenticated());
    assert!(store.session().is_none());
}

#[tokio::test]
async fn test_restore_without_record_stops_loading() {
    let (_owner, session) = session_with(Arc::new(MemorySessionStore::default()));

    session.restore().await;

    assert_eq!(session.state().get_untracked(), AuthState {
        user: None,
        loading: false,
    });
}

#[tokio::test]
async fn test_logout_clears_user_and_session() {
    let store = Arc::new(MemorySessionStore::default());
    let (_owner, session) = session_with(store.clone());
    session.login("admin@cabinet.ci", "admin2024").await.unwrap();

    session.logout();

    assert!(!session.is_authenticated());
    assert!(store.session().is_none());
    // 邮箱仍保留用于下次预填
    assert!(session.remembered_email().is_some());
}
