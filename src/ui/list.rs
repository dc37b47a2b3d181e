use crate::selection::Target;
use crate::telemetry::state::Reading;
use ratatui::widgets::ListState;

/// Minimal record a list row can display: a primary and a secondary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub title: String,
    pub subtitle: String,
}

impl From<&Reading> for Entity {
    fn from(reading: &Reading) -> Self {
        Self {
            title: reading.name.clone(),
            subtitle: reading.value.clone(),
        }
    }
}

/// Notification produced by the list as a direct result of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    ContentChanged,
    SelectionChanged(Target),
}

/// What a selectable list has to offer to whoever drives its selection.
pub trait ListView {
    fn row_count(&self) -> usize;
    fn row_at(&self, index: usize) -> Option<&Entity>;
    fn selected(&self) -> Target;
    /// Programmatic selection. Unlike user selection it produces no event.
    fn select_row(&mut self, target: Target);
}

/// Single-selection list of entities backed by a ratatui [`ListState`].
#[derive(Debug, Default)]
pub struct EntityList {
    entities: Vec<Entity>,
    state: ListState,
}

impl EntityList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Replaces every row. The current selection is left for the caller to
    /// reconcile, except that it never points past the new end.
    pub fn set_entities(&mut self, entities: Vec<Entity>) -> ListEvent {
        self.entities = entities;
        if matches!(self.state.selected(), Some(i) if i >= self.entities.len()) {
            self.state.select(None);
        }
        ListEvent::ContentChanged
    }

    pub fn on_select(&mut self, index: usize) -> Option<ListEvent> {
        if index >= self.entities.len() {
            return None;
        }
        self.state.select(Some(index));
        Some(ListEvent::SelectionChanged(Some(index)))
    }

    pub fn on_deselect(&mut self) -> Option<ListEvent> {
        self.state.selected()?;
        self.state.select(None);
        Some(ListEvent::SelectionChanged(None))
    }

    pub fn select_next(&mut self) -> Option<ListEvent> {
        let last = self.entities.len().checked_sub(1)?;
        let next = match self.state.selected() {
            Some(i) => (i + 1).min(last),
            None => 0,
        };
        self.on_select(next)
    }

    pub fn select_previous(&mut self) -> Option<ListEvent> {
        let last = self.entities.len().checked_sub(1)?;
        let previous = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => last,
        };
        self.on_select(previous)
    }

    pub fn toggle(&mut self) -> Option<ListEvent> {
        if self.state.selected().is_some() {
            self.on_deselect()
        } else {
            self.on_select(0)
        }
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }
}

impl ListView for EntityList {
    fn row_count(&self) -> usize {
        self.entities.len()
    }

    fn row_at(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    fn selected(&self) -> Target {
        self.state.selected()
    }

    fn select_row(&mut self, target: Target) {
        // Remembered rows past the end stay remembered but are not shown.
        let visible = target.filter(|&i| i < self.entities.len());
        self.state.select(visible);
    }
}
