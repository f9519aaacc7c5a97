//! Row sources.
//!
//! A [`RowSource`] delivers the raw roster once. The grid never talks to it
//! directly; the host awaits `fetch` and hands the result to
//! [`RosterApp::finish_load`](crate::RosterApp::finish_load).

mod http;

pub use http::{HttpRowSource, HttpRowSourceBuilder, Missing, Set};

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::Entity;

/// Default endpoint of the local character service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/characters";

#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetch the complete roster.
    async fn fetch(&self) -> Result<Vec<Entity>, FetchError>;
}

/// A fixed in-memory roster.
#[derive(Debug, Clone, Default)]
pub struct StaticRowSource {
    rows: Vec<Entity>,
}

impl StaticRowSource {
    pub fn new(rows: Vec<Entity>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl RowSource for StaticRowSource {
    async fn fetch(&self) -> Result<Vec<Entity>, FetchError> {
        Ok(self.rows.clone())
    }
}

/// Decode a JSON array of roster records.
///
/// The body must be an array; entries that are not objects are skipped with
/// a warning, and object entries decode leniently (see [`Entity`]).
pub fn decode_rows(body: &str) -> Result<Vec<Entity>, FetchError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| FetchError::parse_with_body(e.to_string(), body))?;

    let rows = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            if !value.is_object() {
                log::warn!("skipping roster entry {index}: not an object");
                return None;
            }
            match serde_json::from_value::<Entity>(value) {
                Ok(row) => Some(row),
                Err(err) => {
                    log::warn!("skipping roster entry {index}: {err}");
                    None
                }
            }
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_array() {
        let rows = decode_rows(
            r#"[{"id":"1","name":"Naruto","location":"Konoha","health":"Healthy","power":1000},
                {"id":"2","name":"Sasuke","location":"Konoha","health":"Injured","power":900}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Sasuke");
    }

    #[test]
    fn test_decode_skips_non_objects() {
        let rows =
            decode_rows(r#"[null, 5, ["7", "Itachi"], {"id":"1","name":"Naruto"}]"#).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "1");
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_rows(r#"{"characters": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::Parse { body: Some(_), .. }));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_rows("<html>oops</html>"),
            Err(FetchError::Parse { .. })
        ));
    }
}
