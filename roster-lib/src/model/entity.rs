use serde::{Deserialize, Serialize};

use super::Health;
use super::lenient;

/// One character record as delivered by the row source.
///
/// Every field defaults when absent, and `id`/`power` accept loosely typed
/// JSON, so one malformed record renders with empty cells instead of
/// failing the whole roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Stable unique identifier.
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub location: String,
    pub health: Health,
    /// `None` when the record has no usable power value.
    #[serde(deserialize_with = "lenient::integer")]
    pub power: Option<i64>,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        health: impl Into<Health>,
        power: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            health: health.into(),
            power: Some(power),
        }
    }
}

/// The `{id, name}` projection handed to selection consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedEntity {
    pub id: String,
    pub name: String,
}

impl From<&Entity> for SelectedEntity {
    fn from(entity: &Entity) -> Self {
        Self {
            id: entity.id.clone(),
            name: entity.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HealthCategory;

    #[test]
    fn test_full_record() {
        let entity: Entity = serde_json::from_str(
            r#"{"id":"1","name":"Naruto","location":"Konoha","health":"Healthy","power":1000}"#,
        )
        .unwrap();
        assert_eq!(
            entity,
            Entity::new("1", "Naruto", "Konoha", HealthCategory::Healthy, 1000)
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let entity: Entity = serde_json::from_str(r#"{"id":"7","name":"Rock Lee"}"#).unwrap();
        assert_eq!(entity.id, "7");
        assert_eq!(entity.name, "Rock Lee");
        assert_eq!(entity.location, "");
        assert_eq!(entity.health, Health::Other(String::new()));
        assert_eq!(entity.power, None);
    }

    #[test]
    fn test_loose_types_are_accepted() {
        let entity: Entity = serde_json::from_str(
            r#"{"id":3,"name":null,"location":"Suna","health":"critical","power":"750"}"#,
        )
        .unwrap();
        assert_eq!(entity.id, "3");
        assert_eq!(entity.name, "");
        assert_eq!(entity.health, Health::Known(HealthCategory::Critical));
        assert_eq!(entity.power, Some(750));
    }

    #[test]
    fn test_unusable_power_is_none() {
        let entity: Entity =
            serde_json::from_str(r#"{"id":"4","power":"over nine thousand"}"#).unwrap();
        assert_eq!(entity.power, None);

        let entity: Entity = serde_json::from_str(r#"{"id":"5","power":88.9}"#).unwrap();
        assert_eq!(entity.power, Some(88));
    }

    #[test]
    fn test_selected_projection() {
        let entity = Entity::new("2", "Sasuke", "Konoha", HealthCategory::Injured, 900);
        let selected = SelectedEntity::from(&entity);
        assert_eq!(
            serde_json::to_string(&selected).unwrap(),
            r#"{"id":"2","name":"Sasuke"}"#
        );
    }
}
