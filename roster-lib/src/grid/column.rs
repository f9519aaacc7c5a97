use crate::model::{Entity, HealthColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Location,
}

impl TextField {
    pub fn value<'a>(&self, row: &'a Entity) -> &'a str {
        match self {
            TextField::Name => &row.name,
            TextField::Location => &row.location,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Power,
}

impl NumericField {
    pub fn value(&self, row: &Entity) -> Option<i64> {
        match self {
            NumericField::Power => row.power,
        }
    }
}

/// A grid column. Each kind renders its cell through its own typed accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Per-row checkbox; the header holds the select-all checkbox.
    Select,
    Text(TextField),
    Health,
    Numeric(NumericField),
}

/// The rendered content of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellValue<'a> {
    Checkbox(bool),
    Text(&'a str),
    Health { label: &'a str, color: HealthColor },
    /// `None` renders as an empty cell.
    Number(Option<i64>),
}

impl Column {
    /// Select, Name, Location, Health, Power.
    pub fn defaults() -> Vec<Column> {
        vec![
            Column::Select,
            Column::Text(TextField::Name),
            Column::Text(TextField::Location),
            Column::Health,
            Column::Numeric(NumericField::Power),
        ]
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Select => "",
            Column::Text(TextField::Name) => "Name",
            Column::Text(TextField::Location) => "Location",
            Column::Health => "Health",
            Column::Numeric(NumericField::Power) => "Power",
        }
    }

    pub fn cell<'a>(&self, row: &'a Entity, selected: bool) -> CellValue<'a> {
        match self {
            Column::Select => CellValue::Checkbox(selected),
            Column::Text(field) => CellValue::Text(field.value(row)),
            Column::Health => CellValue::Health {
                label: row.health.label(),
                color: row.health.color(),
            },
            Column::Numeric(field) => CellValue::Number(field.value(row)),
        }
    }
}
