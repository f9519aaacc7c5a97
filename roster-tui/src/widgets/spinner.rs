//! Spinner widget for loading states.
//!
//! A bar that slides across a dotted track and back, drawn in the theme's
//! accent color. The caller supplies the frame counter; the widget itself
//! keeps no state.

use roster_dom::{Color, Element, Role, Size, Style};

#[derive(Clone, Debug)]
pub struct Spinner {
    label: String,
    /// Width of the track in characters.
    track_width: u16,
    /// Length of the bar.
    snake_len: u16,
    /// Empty frames at the right end.
    right_pause: usize,
    /// Empty frames at the left end.
    left_pause: usize,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            label: "Loading".to_string(),
            track_width: 8,
            snake_len: 4,
            right_pause: 1,
            left_pause: 6,
        }
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accessible name of the progress indicator.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn track_width(mut self, width: u16) -> Self {
        self.track_width = width;
        self
    }

    pub fn snake_len(mut self, len: u16) -> Self {
        self.snake_len = len.max(1);
        self
    }

    /// Frames in one full cycle.
    pub fn cycle_len(&self) -> usize {
        let pass = (self.track_width + self.snake_len).saturating_sub(1) as usize;
        2 * pass + self.right_pause + self.left_pause
    }

    /// Build the element for animation frame `tick`.
    pub fn build(&self, tick: usize) -> Element {
        let pass = (self.track_width + self.snake_len).saturating_sub(1) as usize;
        let frame = tick % self.cycle_len().max(1);

        let row = if frame < pass {
            self.snake_frame(frame as i32, true)
        } else if frame < pass + self.right_pause {
            self.empty_frame()
        } else if frame < 2 * pass + self.right_pause {
            let back = frame - pass - self.right_pause;
            self.snake_frame((pass - 1 - back) as i32, false)
        } else {
            self.empty_frame()
        };

        row.role(Role::ProgressBar)
            .label(self.label.clone())
            .width(Size::Fixed(self.track_width))
    }

    fn track_cell() -> Element {
        Element::text("⬝").style(Style::new().foreground(Color::var("accent").darken(0.5)))
    }

    fn empty_frame(&self) -> Element {
        Element::row().children((0..self.track_width).map(|_| Self::track_cell()))
    }

    fn snake_frame(&self, head_pos: i32, moving_right: bool) -> Element {
        let track_width = self.track_width as i32;
        let snake_len = self.snake_len as i32;
        let snake_start = head_pos - snake_len + 1;

        Element::row().children((0..track_width).map(|i| {
            if i < snake_start || i > head_pos {
                return Self::track_cell();
            }
            let along = if snake_len > 1 {
                (i - snake_start) as f32 / (snake_len - 1) as f32
            } else {
                1.0
            };
            let t = if moving_right { along } else { 1.0 - along };
            // Tail dim, head bright.
            Element::text("■")
                .style(Style::new().foreground(Color::var("accent").darken(0.4 * (1.0 - t))))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_cells(element: &Element) -> usize {
        element
            .child_nodes()
            .iter()
            .filter(|cell| cell.text_content() == Some("■"))
            .count()
    }

    #[test]
    fn test_frames_cycle() {
        let spinner = Spinner::new();
        let len = spinner.cycle_len();
        for tick in 0..len {
            assert_eq!(
                bar_cells(&spinner.build(tick)),
                bar_cells(&spinner.build(tick + len))
            );
        }
    }

    #[test]
    fn test_bar_enters_and_leaves() {
        let spinner = Spinner::new().track_width(8).snake_len(4);
        assert_eq!(bar_cells(&spinner.build(0)), 1);
        assert_eq!(bar_cells(&spinner.build(3)), 4);
        // First frame of the right-end pause.
        assert_eq!(bar_cells(&spinner.build(11)), 0);
    }

    #[test]
    fn test_exposes_progressbar() {
        let element = Spinner::new().label("Loading characters").build(0);
        assert_eq!(element.role, Some(Role::ProgressBar));
        assert_eq!(element.label.as_deref(), Some("Loading characters"));
    }
}
