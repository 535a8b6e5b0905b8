//! 時計から価格を決める PriceSource 実装

use crate::ports::outbound::PriceSource;
use common::ports::outbound::Clock;
use std::sync::Arc;

/// 現在時刻（ミリ秒）を範囲の幅で割った余りを使う。--now で固定すれば同じ値になる。
pub struct ClockPriceSource {
    clock: Arc<dyn Clock>,
}

impl ClockPriceSource {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl PriceSource for ClockPriceSource {
    fn price_between(&self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = u64::from(max - min) + 1;
        // span <= u32::MAX + 1 なので余りは u32 に収まる
        min + (self.clock.now_ms() % span) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use common::adapter::FixedClock;

    fn source_at_ms(ms: i64) -> ClockPriceSource {
        let at = Utc.timestamp_millis_opt(ms).unwrap();
        ClockPriceSource::new(Arc::new(FixedClock::new(at)))
    }

    #[test]
    fn test_price_within_inclusive_range() {
        assert_eq!(source_at_ms(0).price_between(30, 300), 30);
        assert_eq!(source_at_ms(270).price_between(30, 300), 300);
        assert_eq!(source_at_ms(271).price_between(30, 300), 30);
        assert_eq!(source_at_ms(1_700_000_000_123).price_between(30, 300), 30 + (1_700_000_000_123u64 % 271) as u32);
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(source_at_ms(999).price_between(40, 40), 40);
        assert_eq!(source_at_ms(999).price_between(50, 10), 50);
    }
}
