use crate::element::{find_element, find_element_mut, Element};

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused.as_deref() == Some(id)
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.is_focused(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation), wrapping around.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.step(root, 1)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.step(root, -1)
    }

    fn step(&mut self, root: &Element, delta: isize) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let len = focusable.len() as isize;
        let current = self
            .focused
            .as_ref()
            .and_then(|id| focusable.iter().position(|f| f == id));
        let next = match current {
            Some(i) => (i as isize + delta).rem_euclid(len) as usize,
            None if delta < 0 => focusable.len() - 1,
            None => 0,
        };

        let new_focus = focusable[next].clone();
        if self.focused.as_ref() == Some(&new_focus) {
            return None;
        }
        self.focused = Some(new_focus.clone());
        Some(new_focus)
    }

    /// Drop focus if the focused element is no longer in the tree.
    pub fn retain(&mut self, root: &Element) {
        if let Some(id) = &self.focused {
            if find_element(root, id).is_none() {
                log::debug!("focused element '{id}' disappeared");
                self.focused = None;
            }
        }
    }

    /// Mark the focused element in a freshly built tree.
    pub fn enrich(&self, root: &mut Element) {
        if let Some(id) = &self.focused {
            if let Some(element) = find_element_mut(root, id) {
                element.focused = true;
            }
        }
    }
}

/// IDs of enabled focusable elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

fn collect(element: &Element, out: &mut Vec<String>) {
    if element.disabled {
        return;
    }
    if element.focusable {
        out.push(element.id.clone());
    }
    for child in element.child_nodes() {
        collect(child, out);
    }
}
