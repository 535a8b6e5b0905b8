//! 季節（推薦の季節枠に使う）

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Monsoon,
}

impl Season {
    /// 0 始まりの月（1 月 = 0）から季節を決める
    ///
    /// 11,0,1 → 冬 / 2,3,4 → 春 / 5..=8 → 夏 / 9,10 → モンスーン
    pub fn from_month0(month0: u32) -> Self {
        match month0 {
            2..=4 => Season::Spring,
            5..=8 => Season::Summer,
            9 | 10 => Season::Monsoon,
            _ => Season::Winter,
        }
    }

    /// 与えられた時刻（UTC）の季節
    pub fn at(now: DateTime<Utc>) -> Self {
        Self::from_month0(now.month0())
    }

    /// 小文字の名前（"winter" 等）。推薦理由の文言に使う。
    pub fn label(&self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Monsoon => "monsoon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_boundaries() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Monsoon,
            Season::Monsoon,
            Season::Winter,
        ];
        for (m, s) in expected.iter().enumerate() {
            assert_eq!(Season::from_month0(m as u32), *s, "month0={}", m);
        }
    }

    #[test]
    fn test_at_uses_month_of_instant() {
        let oct = Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap();
        assert_eq!(Season::at(oct), Season::Monsoon);
        assert_eq!(Season::at(oct).label(), "monsoon");
    }
}
