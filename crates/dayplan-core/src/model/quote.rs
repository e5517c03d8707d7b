//! Motivational quotes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A motivational quote with attribution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            author: author.into(),
        }
    }

    /// Seed list applied on first run.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Even if I knew that tomorrow the world would go to pieces, \
                 I would still plant my apple tree today.",
                "Martin Luther",
            ),
            Self::new(
                "Having a vision is wonderful, but be ready to be \
                 misunderstood: people who act on a big vision get called \
                 crazy, even when they turn out to be right.",
                "Mark Zuckerberg",
            ),
        ]
    }
}

/// The quote shown on a given date: deterministic rotation by day of year.
pub fn quote_of_day(quotes: &[Quote], date: NaiveDate) -> Option<&Quote> {
    if quotes.is_empty() {
        return None;
    }
    let day_of_year = date.ordinal() as usize;
    Some(&quotes[day_of_year % quotes.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_of_day_is_deterministic_and_rotates() {
        let quotes = Quote::defaults();
        let day1 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(quote_of_day(&quotes, day1), quote_of_day(&quotes, day1));
        assert_ne!(quote_of_day(&quotes, day1), quote_of_day(&quotes, day2));
    }

    #[test]
    fn quote_of_day_on_empty_list() {
        assert!(quote_of_day(&[], NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()).is_none());
    }
}
