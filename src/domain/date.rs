use chrono::{Datelike, Local, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Calendar date a pipeline run executed, stamped on every record the run
/// produces. Wire and storage format is `M-D-YYYY` without leading zeros,
/// e.g. `2-17-2026`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollectionDate(NaiveDate);

impl CollectionDate {
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }
}

impl From<NaiveDate> for CollectionDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CollectionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.0.month(), self.0.day(), self.0.year())
    }
}

impl FromStr for CollectionDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%m-%d-%Y").map(Self)
    }
}

impl Serialize for CollectionDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CollectionDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CollectionDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().into()
    }

    #[test]
    fn displays_without_leading_zeros() {
        assert_eq!(date(2026, 2, 17).to_string(), "2-17-2026");
        assert_eq!(date(2025, 11, 3).to_string(), "11-3-2025");
    }

    #[test]
    fn parses_its_own_format() {
        let parsed: CollectionDate = "2-17-2026".parse().unwrap();
        assert_eq!(parsed, date(2026, 2, 17));
    }

    #[test]
    fn rejects_garbage() {
        assert!("yesterday".parse::<CollectionDate>().is_err());
        assert!("13-40-2026".parse::<CollectionDate>().is_err());
    }

    #[test]
    fn serde_round_trip_is_the_wire_string() {
        let json = serde_json::to_string(&date(2026, 2, 17)).unwrap();
        assert_eq!(json, "\"2-17-2026\"");

        let back: CollectionDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date(2026, 2, 17));
    }
}
