//! 持久化的会话记录
//!
//! 只保存邮箱和登录时间，不保存密码。

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(email: impl Into<String>, signed_in_at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            signed_in_at,
        }
    }

    /// 会话是否已超过最长有效期
    ///
    /// 登录时间在未来（时钟回拨）同样视为失效。
    pub fn is_expired(&self, now: DateTime<Utc>, max_age: TimeDelta) -> bool {
        let age = now - self.signed_in_at;
        age < TimeDelta::zero() || age > max_age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 23, hour, 0, 0).unwrap()
    }

    #[test]
    fn fresh_session_is_valid() {
        let record = SessionRecord::new("a@cabinet.ci", at(8));
        assert!(!record.is_expired(at(12), TimeDelta::hours(8)));
        assert!(!record.is_expired(at(16), TimeDelta::hours(8)));
    }

    #[test]
    fn old_session_expires() {
        let record = SessionRecord::new("a@cabinet.ci", at(8));
        assert!(record.is_expired(at(17), TimeDelta::hours(8)));
    }

    #[test]
    fn future_session_is_rejected() {
        let record = SessionRecord::new("a@cabinet.ci", at(12));
        assert!(record.is_expired(at(8), TimeDelta::hours(8)));
    }

    #[test]
    fn round_trips_through_json() {
        let record = SessionRecord::new("a@cabinet.ci", at(8));
        let json = serde_json::to_string(&record).unwrap();
        let back: SessionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
