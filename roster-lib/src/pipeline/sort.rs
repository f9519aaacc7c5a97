use std::cmp::Reverse;
use std::fmt;

use crate::model::Entity;

/// Sort direction for the power column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    /// Arrival order from the row source.
    #[default]
    Unordered,
    Ascending,
    Descending,
}

impl SortState {
    /// Unordered → Ascending → Descending → Unordered.
    pub fn next(self) -> Self {
        match self {
            SortState::Unordered => SortState::Ascending,
            SortState::Ascending => SortState::Descending,
            SortState::Descending => SortState::Unordered,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortState::Unordered => "unordered",
            SortState::Ascending => "ascending",
            SortState::Descending => "descending",
        }
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order rows by power. Stable: equal powers keep their input order.
///
/// Rows without a power value sort below every present value.
pub fn sort_by_power<'a>(rows: &[&'a Entity], state: SortState) -> Vec<&'a Entity> {
    let mut sorted = rows.to_vec();
    match state {
        SortState::Unordered => {}
        SortState::Ascending => sorted.sort_by_key(|row| row.power),
        SortState::Descending => sorted.sort_by_key(|row| Reverse(row.power)),
    }
    sorted
}
