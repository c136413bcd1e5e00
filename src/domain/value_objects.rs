use crate::util::format_local;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Technical,
    Billing,
    Delivery,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Technical => "Technical",
            Category::Billing => "Billing",
            Category::Delivery => "Delivery",
        };
        write!(f, "{name}")
    }
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Technical, Category::Billing, Category::Delivery];

    /// Case-insensitive lookup; `None` for anything outside the fixed set.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "technical" => Some(Category::Technical),
            "billing" => Some(Category::Billing),
            "delivery" => Some(Category::Delivery),
            _ => None,
        }
    }
}

/// Creation time of a record, captured in local time. Kept at full clock
/// resolution in memory; rendered at second precision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Local>);

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_local(&self.0))
    }
}

impl Timestamp {
    pub fn now() -> Self {
        Self(Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_defaults_to_technical() {
        assert_eq!(Category::default(), Category::Technical);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(Category::parse("Billing"), Some(Category::Billing));
        assert_eq!(Category::parse("  delivery "), Some(Category::Delivery));
        assert_eq!(Category::parse("TECHNICAL"), Some(Category::Technical));
        assert_eq!(Category::parse("other"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_category_display_matches_fixed_set() {
        let rendered: Vec<String> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, ["Technical", "Billing", "Delivery"]);
    }

    #[test]
    fn test_timestamp_ordering() {
        let earlier = Timestamp::now();
        let later = Timestamp::now();
        assert!(earlier <= later);
    }
}
