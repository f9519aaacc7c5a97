//! The interactive shell around [`RosterApp`]: focus, input, and the event
//! loop.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use roster_dom::element::find_element;
use roster_dom::{Element, Event, FocusState, Key, Modifiers, MouseButton, Terminal, hit_test};
use roster_lib::selection::SelectAll;
use roster_lib::source::{HttpRowSource, RowSource};
use roster_lib::{Entity, FetchError, GridMsg, RosterApp, SelectedEntity};
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::action::{Action, SEARCH};
use crate::config::Config;
use crate::error::AppError;
use crate::view;

/// Poll timeout per frame; also the spinner frame time.
const FRAME: Duration = Duration::from_millis(60);

/// UI state: the roster app plus what only the terminal front end needs.
pub struct Ui {
    app: RosterApp,
    focus: FocusState,
    tick: usize,
    /// Last selection the grid reported.
    notified: Rc<RefCell<Vec<SelectedEntity>>>,
    /// Result of the last "Mark Viewed".
    marked: Option<Vec<SelectedEntity>>,
    quit: bool,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        let notified = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notified);
        let app = RosterApp::new().with_observer(move |selected: &[SelectedEntity]| {
            *sink.borrow_mut() = selected.to_vec();
        });

        Self {
            app,
            focus: FocusState::new(),
            tick: 0,
            notified,
            marked: None,
            quit: false,
        }
    }

    pub fn app(&self) -> &RosterApp {
        &self.app
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The selection as last reported to the observer.
    pub fn notified(&self) -> Vec<SelectedEntity> {
        self.notified.borrow().clone()
    }

    pub fn marked(&self) -> Option<&[SelectedEntity]> {
        self.marked.as_deref()
    }

    pub fn finish_load(&mut self, result: Result<Vec<Entity>, FetchError>) {
        self.app.finish_load(result);
    }

    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Build this frame's tree with focus applied.
    pub fn root(&mut self) -> Element {
        let mut root = view::roster(&self.app, self.tick, &self.status());
        self.focus.retain(&root);
        self.focus.enrich(&mut root);
        root
    }

    fn status(&self) -> String {
        if self.app.is_loading() {
            return String::new();
        }
        if let Some(marked) = &self.marked {
            return format!("Marked {} viewed", marked.len());
        }
        let notified = self.notified.borrow();
        if notified.is_empty() {
            format!("{} characters", self.app.rows().len())
        } else {
            let names: Vec<&str> = notified.iter().map(|s| s.name.as_str()).collect();
            format!("Selected: {}", names.join(", "))
        }
    }

    /// Handle one key press. `root` is the tree currently on screen.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers, root: &Element) {
        if modifiers.ctrl && key == Key::Char('c') {
            self.quit = true;
            return;
        }

        match key {
            Key::Tab => {
                self.focus.focus_next(root);
                return;
            }
            Key::BackTab => {
                self.focus.focus_prev(root);
                return;
            }
            _ => {}
        }

        let captures_input = self
            .focus
            .focused()
            .and_then(|id| find_element(root, id))
            .is_some_and(|el| el.captures_input);
        if captures_input {
            match key {
                Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                    self.app.push_query_char(c);
                    return;
                }
                Key::Backspace => {
                    self.app.pop_query_char();
                    return;
                }
                Key::Escape => {
                    self.focus.blur();
                    return;
                }
                _ => {}
            }
        }

        match key {
            Key::Escape if self.app.view().filter_menu_open => {
                self.app.dispatch(GridMsg::CloseFilterMenu);
            }
            Key::Escape | Key::Char('q') => self.quit = true,
            Key::Char('/') => self.perform(Action::FocusSearch),
            Key::Enter | Key::Char(' ') => {
                if let Some(action) = self.focus.focused().and_then(Action::from_element_id) {
                    self.perform(action);
                }
            }
            _ => {}
        }
    }

    /// Handle a left click that landed on element `id`.
    pub fn handle_click(&mut self, id: &str) {
        self.focus.focus(id);
        let Some(action) = Action::from_element_id(id) else {
            return;
        };
        let keeps_menu = matches!(
            action,
            Action::ToggleFilterMenu | Action::ToggleCategory(_)
        );
        if !keeps_menu && self.app.view().filter_menu_open {
            self.app.dispatch(GridMsg::CloseFilterMenu);
        }
        self.perform(action);
    }

    pub fn perform(&mut self, action: Action) {
        log::debug!("action: {action:?}");
        match action {
            Action::FocusSearch => {
                self.focus.focus(SEARCH);
            }
            Action::ToggleAll => {
                let checked = self.app.view().select_all != SelectAll::Checked;
                self.app.dispatch(GridMsg::ToggleAll(checked));
            }
            Action::ToggleRow(id) => {
                let checked = !self.app.grid().is_selected(&id);
                self.app.dispatch(GridMsg::ToggleRow { id, checked });
            }
            Action::ToggleFilterMenu => self.app.dispatch(GridMsg::ToggleFilterMenu),
            Action::ToggleCategory(category) => {
                self.app.dispatch(GridMsg::ToggleCategory(category));
            }
            Action::CycleSort => self.app.dispatch(GridMsg::CycleSort),
            Action::MarkViewed => {
                self.marked = Some(self.app.mark_viewed());
                return;
            }
        }
        self.marked = None;
    }
}

/// Run the UI until the user quits.
///
/// The roster is fetched once in a background task; the loop renders a
/// loading state until it answers.
pub async fn run(config: Config) -> Result<(), AppError> {
    let mut builder = HttpRowSource::builder().endpoint(config.endpoint.clone());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let source = builder.build()?;

    let (tx, mut rx) = oneshot::channel();
    tokio::spawn(async move {
        let _ = tx.send(source.fetch().await);
    });

    let mut terminal = Terminal::new(view::theme())?;
    let mut ui = Ui::new();
    let mut pending = true;

    loop {
        if pending {
            match rx.try_recv() {
                Ok(result) => {
                    ui.finish_load(result);
                    pending = false;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    ui.finish_load(Err(FetchError::Aborted));
                    pending = false;
                }
            }
        }

        let root = ui.root();
        terminal.render(&root)?;

        for raw in terminal.poll(FRAME)? {
            let Some(event) = Event::from_crossterm(&raw) else {
                continue;
            };
            match event {
                Event::Key { key, modifiers } => ui.handle_key(key, modifiers, &root),
                Event::Click {
                    x,
                    y,
                    button: MouseButton::Left,
                } => {
                    if let Some(id) = hit_test(terminal.layout(), &root, x, y) {
                        ui.handle_click(&id);
                    }
                }
                _ => {}
            }
            if ui.should_quit() {
                log::info!("quit requested");
                return Ok(());
            }
        }

        ui.tick();
    }
}
