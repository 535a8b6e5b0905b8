//! 標準時刻実装と固定時刻実装

use crate::ports::outbound::Clock;
use chrono::{DateTime, Utc};

/// システム時計を使う Clock 実装
#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 常に同じ時刻を返す Clock 実装（CLI の --now 指定やテスト用）
#[derive(Debug, Clone)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// RFC3339 文字列から生成する
    pub fn parse(s: &str) -> Result<Self, crate::error::Error> {
        DateTime::parse_from_rfc3339(s)
            .map(|t| Self(t.with_timezone(&Utc)))
            .map_err(|e| {
                crate::error::Error::invalid_argument(format!(
                    "Invalid timestamp '{}' (expected RFC3339): {}",
                    s, e
                ))
            })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_returns_same_instant() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now_ms(), at.timestamp_millis() as u64);
    }

    #[test]
    fn fixed_clock_parse_rfc3339() {
        let clock = FixedClock::parse("2026-07-15T12:00:00+05:30").unwrap();
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2026, 7, 15, 6, 30, 0).unwrap());
    }

    #[test]
    fn fixed_clock_parse_rejects_garbage() {
        let err = FixedClock::parse("yesterday").unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }
}
