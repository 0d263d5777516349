// models/src/weekday.rs

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Calendar weekday used as the key of a doctor's availability map.
/// Ordered Monday-first so a `BTreeMap` iterates in schedule order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match value.to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Monday),
            "tuesday" | "tue" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" => Ok(Weekday::Wednesday),
            "thursday" | "thu" => Ok(Weekday::Thursday),
            "friday" | "fri" => Ok(Weekday::Friday),
            "saturday" | "sat" => Ok(Weekday::Saturday),
            "sunday" | "sun" => Ok(Weekday::Sunday),
            _ => Err(ModelError::UnknownVariant {
                kind: "weekday",
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_and_short_names() {
        assert_eq!(Weekday::parse("monday").unwrap(), Weekday::Monday);
        assert_eq!(Weekday::parse("Fri").unwrap(), Weekday::Friday);
        assert!(Weekday::parse("someday").is_err());
    }

    #[test]
    fn btreemap_iterates_monday_first() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert(Weekday::Sunday, 7);
        map.insert(Weekday::Monday, 1);
        let first = map.keys().next().copied();
        assert_eq!(first, Some(Weekday::Monday));
    }
}
