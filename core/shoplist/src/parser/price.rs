//! 発話中の価格条件（"under 50", "between rs 20 and 80" 等）

use crate::domain::PriceRange;
use common::error::Error;
use regex::Regex;

const CURRENCY: &str = r"(?:rs\.?|rupees?)?";

#[derive(Debug, Clone)]
pub struct PriceRangeParser {
    upper_bound: Regex,
    between: Regex,
}

impl PriceRangeParser {
    pub fn new() -> Result<Self, Error> {
        let upper_bound = Regex::new(&format!(
            r"(?i)(?:under|below|less than|maximum)\s*{c}\s*([0-9]+)",
            c = CURRENCY
        ))
        .map_err(|e| Error::system(format!("Invalid price pattern: {}", e)))?;
        let between = Regex::new(&format!(
            r"(?i)between\s*{c}\s*([0-9]+)\s*(?:and|to)\s*{c}\s*([0-9]+)",
            c = CURRENCY
        ))
        .map_err(|e| Error::system(format!("Invalid price pattern: {}", e)))?;
        Ok(Self {
            upper_bound,
            between,
        })
    }

    /// 上限指定を先に調べ、無ければ範囲指定を調べる。どちらも無ければ None。
    pub fn parse(&self, lower: &str) -> Option<PriceRange> {
        if let Some(caps) = self.upper_bound.captures(lower) {
            return Some(PriceRange::up_to(parse_amount(&caps[1])));
        }
        self.between
            .captures(lower)
            .map(|caps| PriceRange::new(parse_amount(&caps[1]), parse_amount(&caps[2])))
    }
}

fn parse_amount(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}
