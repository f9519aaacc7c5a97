pub mod a11y;
pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use a11y::{Checked, Role};
pub use buffer::Buffer;
pub use element::Element;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::hit_test;
pub use layout::{LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::*;
