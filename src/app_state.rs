use crate::selection::{SelectionReconciler, Tab, Target};
use crate::telemetry::poller::PollOutcome;
use crate::telemetry::state::{Reading, SystemState};
use crate::ui::list::{Entity, EntityList, ListEvent, ListView};
use log::{debug, warn};
use std::time::{Duration, Instant};

/// How long the content stays dimmed after the first successful load.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Loading,
    FadingIn { since: Instant },
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Logout,
    Cancel,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::Logout, MenuItem::Cancel];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Logout => "Logout",
            MenuItem::Cancel => "Cancel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub highlighted: usize,
}

impl MenuState {
    pub fn item(&self) -> MenuItem {
        MenuItem::ALL[self.highlighted.min(MenuItem::ALL.len() - 1)]
    }
}

pub struct AppState {
    pub system_state: Option<SystemState>,
    pub active_tab: Tab,
    pub list: EntityList,
    pub reconciler: SelectionReconciler,
    pub loading: LoadingPhase,
    pub error_message: Option<String>,
    pub menu: Option<MenuState>,
}

impl AppState {
    pub fn new(initial_tab: Tab) -> Self {
        Self {
            system_state: None,
            active_tab: initial_tab,
            list: EntityList::new(),
            reconciler: SelectionReconciler::new(initial_tab),
            loading: LoadingPhase::Loading,
            error_message: None,
            menu: None,
        }
    }

    /// Applies one poll cycle. A failed cycle changes nothing on screen except
    /// the error line.
    pub fn apply_poll(&mut self, outcome: PollOutcome, now: Instant) {
        match outcome {
            Ok(state) => {
                debug!(
                    "Received {} temperature and {} pressure readings",
                    state.temperatures.len(),
                    state.pressure.len()
                );
                self.system_state = Some(state);
                self.error_message = None;
                if self.loading == LoadingPhase::Loading {
                    self.loading = LoadingPhase::FadingIn { since: now };
                }
                self.refresh_list();
            }
            Err(e) => {
                warn!("Failed to fetch system state: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        debug!(
            "Switching to {} tab, remembered row {:?}",
            tab.title(),
            self.reconciler.memory(tab)
        );
        self.active_tab = tab;
        let target = self.reconciler.on_tab_changed(tab);
        self.apply_target(target);
        self.refresh_list();
    }

    pub fn toggle_tab(&mut self) {
        self.switch_tab(self.active_tab.other());
    }

    pub fn entities_for_tab(&self) -> Vec<Entity> {
        self.readings().iter().map(Entity::from).collect()
    }

    pub fn select_next(&mut self) {
        let event = self.list.select_next();
        self.forward(event);
    }

    pub fn select_previous(&mut self) {
        let event = self.list.select_previous();
        self.forward(event);
    }

    pub fn toggle_selection(&mut self) {
        let event = self.list.toggle();
        self.forward(event);
    }

    /// Advances time-based UI state.
    pub fn tick(&mut self, now: Instant) {
        if let LoadingPhase::FadingIn { since } = self.loading {
            if now.saturating_duration_since(since) >= FADE_DURATION {
                self.loading = LoadingPhase::Loaded;
            }
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.loading != LoadingPhase::Loading
    }

    pub fn open_menu(&mut self) {
        self.menu = Some(MenuState::default());
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    pub fn menu_move(&mut self, down: bool) {
        if let Some(menu) = &mut self.menu {
            let last = MenuItem::ALL.len() - 1;
            menu.highlighted = if down {
                (menu.highlighted + 1).min(last)
            } else {
                menu.highlighted.saturating_sub(1)
            };
        }
    }

    fn readings(&self) -> &[Reading] {
        match (&self.system_state, self.active_tab) {
            (Some(state), Tab::Temperature) => state.temperatures.as_slice(),
            (Some(state), Tab::Pressure) => state.pressure.as_slice(),
            (None, _) => &[],
        }
    }

    fn refresh_list(&mut self) {
        let event = self.list.set_entities(self.entities_for_tab());
        self.forward(Some(event));
    }

    fn forward(&mut self, event: Option<ListEvent>) {
        let target = match event {
            Some(ListEvent::ContentChanged) => self.reconciler.on_content_changed(),
            Some(ListEvent::SelectionChanged(selection)) => self
                .reconciler
                .on_row_selection(self.active_tab, selection),
            None => None,
        };
        self.apply_target(target);
    }

    fn apply_target(&mut self, target: Option<Target>) {
        if let Some(row) = target {
            self.list.select_row(row);
        }
    }
}
