use crate::model::Entity;

/// Rows whose name or location contains `query`, ignoring case.
///
/// A blank query (empty or whitespace only) returns every row in input
/// order.
pub fn search<'a>(rows: &'a [Entity], query: &str) -> Vec<&'a Entity> {
    if query.trim().is_empty() {
        return rows.iter().collect();
    }

    let needle = query.to_lowercase();
    rows.iter().filter(|row| matches(row, &needle)).collect()
}

fn matches(row: &Entity, needle: &str) -> bool {
    row.name.to_lowercase().contains(needle) || row.location.to_lowercase().contains(needle)
}
