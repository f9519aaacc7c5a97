#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// Size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Intrinsic size on the main axis, stretched on the cross axis.
    #[default]
    Auto,
    Fixed(u16),
    /// Equal share of whatever the fixed and auto siblings leave over.
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Rounded,
}

impl Border {
    pub(crate) fn glyphs(self) -> Option<[char; 6]> {
        match self {
            Border::None => None,
            Border::Single => Some(['┌', '┐', '└', '┘', '─', '│']),
            Border::Rounded => Some(['╭', '╮', '╰', '╯', '─', '│']),
        }
    }

    pub(crate) fn size(self) -> u16 {
        match self {
            Border::None => 0,
            _ => 1,
        }
    }
}
