use std::collections::HashMap;

use super::Rgb;

/// Named colors referenced through `Color::Var`.
#[derive(Debug, Clone)]
pub struct Theme {
    colors: HashMap<String, Rgb>,
    fallback: Rgb,
}

impl Theme {
    /// An empty theme where every name resolves to `fallback`.
    pub fn new(fallback: Rgb) -> Self {
        Self {
            colors: HashMap::new(),
            fallback,
        }
    }

    pub fn color(mut self, name: impl Into<String>, rgb: Rgb) -> Self {
        self.colors.insert(name.into(), rgb);
        self
    }

    pub fn get(&self, name: &str) -> Rgb {
        self.colors.get(name).copied().unwrap_or_else(|| {
            log::trace!("theme color '{name}' not defined, using fallback");
            self.fallback
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Rgb::WHITE)
            .color("background", Rgb::new(18, 18, 24))
            .color("foreground", Rgb::new(220, 220, 230))
            .color("muted", Rgb::new(120, 120, 135))
            .color("border", Rgb::new(70, 70, 85))
            .color("primary", Rgb::new(110, 160, 255))
            .color("accent", Rgb::new(190, 130, 255))
            .color("success", Rgb::new(80, 200, 120))
            .color("warning", Rgb::new(240, 180, 60))
            .color("danger", Rgb::new(235, 80, 80))
    }
}
