use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The three health categories the grid can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthCategory {
    Healthy,
    Injured,
    Critical,
}

impl HealthCategory {
    /// All categories in menu order.
    pub const ALL: [HealthCategory; 3] = [
        HealthCategory::Healthy,
        HealthCategory::Injured,
        HealthCategory::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCategory::Healthy => "Healthy",
            HealthCategory::Injured => "Injured",
            HealthCategory::Critical => "Critical",
        }
    }

    /// Case-insensitive match on the category name.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn color(&self) -> HealthColor {
        match self {
            HealthCategory::Healthy => HealthColor::Green,
            HealthCategory::Injured => HealthColor::Amber,
            HealthCategory::Critical => HealthColor::Red,
        }
    }
}

impl fmt::Display for HealthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row's health as received.
///
/// Values outside the three categories (including a missing field) are kept
/// verbatim in `Other` so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Health {
    Known(HealthCategory),
    Other(String),
}

impl Default for Health {
    fn default() -> Self {
        Health::Other(String::new())
    }
}

impl Health {
    pub fn parse(raw: &str) -> Self {
        match HealthCategory::parse(raw) {
            Some(category) => Health::Known(category),
            None => Health::Other(raw.to_string()),
        }
    }

    pub fn category(&self) -> Option<HealthCategory> {
        match self {
            Health::Known(category) => Some(*category),
            Health::Other(_) => None,
        }
    }

    /// Text shown in the health cell.
    pub fn label(&self) -> &str {
        match self {
            Health::Known(category) => category.as_str(),
            Health::Other(raw) => raw,
        }
    }

    /// Indicator color. Unrecognized values fall back to the healthy color.
    pub fn color(&self) -> HealthColor {
        self.category()
            .map(|category| category.color())
            .unwrap_or(HealthColor::Green)
    }
}

impl From<HealthCategory> for Health {
    fn from(category: HealthCategory) -> Self {
        Health::Known(category)
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Health {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(raw) => Health::parse(&raw),
            _ => Health::default(),
        })
    }
}

/// Tri-color health indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthColor {
    Green,
    Amber,
    Red,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            Health::parse("healthy"),
            Health::Known(HealthCategory::Healthy)
        );
        assert_eq!(
            Health::parse("INJURED"),
            Health::Known(HealthCategory::Injured)
        );
        assert_eq!(
            Health::parse("Critical"),
            Health::Known(HealthCategory::Critical)
        );
    }

    #[test]
    fn test_unknown_values_are_kept() {
        let health = Health::parse("Exhausted");
        assert_eq!(health, Health::Other("Exhausted".to_string()));
        assert_eq!(health.label(), "Exhausted");
        assert_eq!(health.category(), None);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Health::parse("Healthy").color(), HealthColor::Green);
        assert_eq!(Health::parse("Injured").color(), HealthColor::Amber);
        assert_eq!(Health::parse("Critical").color(), HealthColor::Red);
    }

    /// Documented quirk: anything unrecognized is painted with the healthy
    /// color rather than a neutral one.
    #[test]
    fn test_unknown_health_uses_healthy_color() {
        assert_eq!(Health::parse("Exhausted").color(), HealthColor::Green);
        assert_eq!(Health::default().color(), HealthColor::Green);
    }
}
