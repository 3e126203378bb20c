use std::fmt::Display;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Followers (or subscribers) on one social platform. Absent means zero: the
/// form field is optional and older rows in the store may hold `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FollowerCount(u64);

impl FollowerCount {
    pub fn new(count: u64) -> Self { Self(count) }

    pub fn get(self) -> u64 { self.0 }

    /// Parse a form value. Empty means zero; thousands separators (`.`, `,`,
    /// spaces) are dropped, so "10.000" is ten thousand.
    pub fn parse(value: &str) -> Result<Self, String> {
        let digits: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | ' '))
            .collect();
        if digits.is_empty() {
            return Ok(Self::default());
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Ingresá una cantidad válida: {value:?}"))
    }
}

impl Display for FollowerCount {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Every shape the store has been seen to return for a count column.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for FollowerCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let count = match Option::<RawCount>::deserialize(deserializer)? {
            None => Self::default(),
            Some(RawCount::Unsigned(n)) => Self(n),
            // negative counts are noise, not data
            Some(RawCount::Signed(_)) => Self::default(),
            Some(RawCount::Float(f)) if f.is_finite() && f > 0.0 => Self(f as u64),
            Some(RawCount::Float(_)) => Self::default(),
            Some(RawCount::Text(s)) => Self::parse(&s).unwrap_or_default(),
        };
        Ok(count)
    }
}
