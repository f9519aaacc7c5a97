use std::collections::BTreeSet;

use crate::model::{Entity, HealthCategory};

/// The set of health categories the user ticked in the filter menu.
///
/// Empty means "no filter", not "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    categories: BTreeSet<HealthCategory>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn contains(&self, category: HealthCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = HealthCategory> + '_ {
        self.categories.iter().copied()
    }

    /// A new filter with `category` flipped.
    pub fn toggled(&self, category: HealthCategory) -> Self {
        let mut categories = self.categories.clone();
        if !categories.remove(&category) {
            categories.insert(category);
        }
        Self { categories }
    }

    pub fn matches(&self, row: &Entity) -> bool {
        self.is_empty()
            || row
                .health
                .category()
                .is_some_and(|category| self.contains(category))
    }
}

impl FromIterator<HealthCategory> for CategoryFilter {
    fn from_iter<I: IntoIterator<Item = HealthCategory>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

/// Rows whose health is one of the selected categories, in input order.
pub fn filter_by_category<'a>(rows: &[&'a Entity], filter: &CategoryFilter) -> Vec<&'a Entity> {
    if filter.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .copied()
        .filter(|row| filter.matches(row))
        .collect()
}
