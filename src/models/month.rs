//! Year-month bucket derived from entry dates
//!
//! Every ledger entry is bucketed into its calendar month for filtering and
//! grouping. The bucket is always recomputed from the entry date, never
//! stored on its own.

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A calendar month ("2024-01"), ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month bucket; `month` must be 1-12
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Truncate a date to its year-month bucket
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a month string in "YYYY-MM" form
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

// Serialized as the "YYYY-MM" string the presentation layer shows

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Month::parse(&s).map_err(de::Error::custom)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_truncates() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 28).unwrap();
        assert_eq!(Month::from_date(d1), Month::from_date(d2));
        assert_eq!(Month::from_date(d1), Month::new(2024, 1).unwrap());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Month::parse("2024-01").unwrap(), Month::new(2024, 1).unwrap());
        assert_eq!(Month::parse("2024-12").unwrap(), Month::new(2024, 12).unwrap());
        assert!(Month::parse("2024-13").is_err());
        assert!(Month::parse("202401").is_err());
        assert!(Month::parse("").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Month::new(2024, 3).unwrap()), "2024-03");
    }

    #[test]
    fn test_chronological_order() {
        let dec_2023 = Month::new(2023, 12).unwrap();
        let jan_2024 = Month::new(2024, 1).unwrap();
        let feb_2024 = Month::new(2024, 2).unwrap();

        assert!(dec_2023 < jan_2024);
        assert!(jan_2024 < feb_2024);
    }

    #[test]
    fn test_serialization() {
        let m = Month::new(2024, 1).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"2024-01\"");

        let deserialized: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
