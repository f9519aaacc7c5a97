mod checkbox;
mod spinner;

pub use checkbox::checkbox;
pub use spinner::Spinner;
