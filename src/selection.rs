//! Keeps the list selection consistent across tab switches and reloads.
//!
//! Four inputs feed the reconciler: the active tab, row selections made while
//! the temperature tab is active, row selections made while the pressure tab
//! is active, and "list content changed" notifications. Once every input has a
//! value, any change re-emits the row that should be selected, which is the
//! remembered selection of the active tab.

/// The two views of a [`SystemState`](crate::telemetry::state::SystemState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Temperature,
    Pressure,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Temperature, Tab::Pressure];

    pub fn index(self) -> usize {
        match self {
            Tab::Temperature => 0,
            Tab::Pressure => 1,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Temperature => "Temperature",
            Tab::Pressure => "Pressure",
        }
    }

    pub fn other(self) -> Tab {
        match self {
            Tab::Temperature => Tab::Pressure,
            Tab::Pressure => Tab::Temperature,
        }
    }
}

/// Row the list widget should show as selected, `None` meaning no selection.
pub type Target = Option<usize>;

#[derive(Debug, Clone)]
pub struct SelectionReconciler {
    active_tab: Tab,
    /// Last selection seen per tab, seeded with "nothing selected".
    memory: [Target; 2],
    /// The content stream has no seed; output waits for the first reload.
    reloaded: bool,
}

impl SelectionReconciler {
    pub fn new(active_tab: Tab) -> Self {
        Self {
            active_tab,
            memory: [None; 2],
            reloaded: false,
        }
    }

    pub fn on_tab_changed(&mut self, tab: Tab) -> Option<Target> {
        self.active_tab = tab;
        self.target()
    }

    /// Records a user selection made while `tab_at_event` was active.
    ///
    /// Only the stream of the tab active at that moment accepts the event;
    /// anything else is dropped without emitting.
    pub fn on_row_selection(&mut self, tab_at_event: Tab, selection: Target) -> Option<Target> {
        if tab_at_event != self.active_tab {
            return None;
        }
        self.memory[tab_at_event.index()] = selection;
        self.target()
    }

    pub fn on_content_changed(&mut self) -> Option<Target> {
        self.reloaded = true;
        self.target()
    }

    pub fn memory(&self, tab: Tab) -> Target {
        self.memory[tab.index()]
    }

    /// Current derived selection, `None` until every input has produced a value.
    pub fn target(&self) -> Option<Target> {
        self.reloaded.then(|| self.memory[self.active_tab.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_until_first_reload() {
        let mut reconciler = SelectionReconciler::new(Tab::Temperature);
        assert_eq!(reconciler.on_tab_changed(Tab::Pressure), None);
        assert_eq!(reconciler.on_row_selection(Tab::Pressure, Some(3)), None);
        assert_eq!(reconciler.on_tab_changed(Tab::Temperature), None);
        assert_eq!(reconciler.target(), None);

        assert_eq!(reconciler.on_content_changed(), Some(None));
        reconciler.on_tab_changed(Tab::Pressure);
        assert_eq!(reconciler.target(), Some(Some(3)));
    }

    #[test]
    fn tab_switch_restores_each_tabs_selection() {
        let mut reconciler = SelectionReconciler::new(Tab::Temperature);
        reconciler.on_content_changed();

        assert_eq!(
            reconciler.on_row_selection(Tab::Temperature, Some(1)),
            Some(Some(1))
        );
        assert_eq!(reconciler.on_tab_changed(Tab::Pressure), Some(None));
        assert_eq!(
            reconciler.on_row_selection(Tab::Pressure, Some(0)),
            Some(Some(0))
        );
        assert_eq!(reconciler.on_tab_changed(Tab::Temperature), Some(Some(1)));
        assert_eq!(reconciler.on_tab_changed(Tab::Pressure), Some(Some(0)));
    }

    #[test]
    fn selection_on_one_tab_leaves_the_other_alone() {
        let mut reconciler = SelectionReconciler::new(Tab::Pressure);
        reconciler.on_content_changed();
        reconciler.on_row_selection(Tab::Pressure, Some(4));
        reconciler.on_tab_changed(Tab::Temperature);
        reconciler.on_row_selection(Tab::Temperature, Some(2));

        assert_eq!(reconciler.memory(Tab::Pressure), Some(4));
        assert_eq!(reconciler.memory(Tab::Temperature), Some(2));
    }

    #[test]
    fn events_for_the_inactive_tab_are_dropped() {
        let mut reconciler = SelectionReconciler::new(Tab::Temperature);
        reconciler.on_content_changed();

        assert_eq!(reconciler.on_row_selection(Tab::Pressure, Some(7)), None);
        assert_eq!(reconciler.memory(Tab::Pressure), None);
        assert_eq!(reconciler.on_tab_changed(Tab::Pressure), Some(None));
    }

    #[test]
    fn deselect_is_remembered() {
        let mut reconciler = SelectionReconciler::new(Tab::Temperature);
        reconciler.on_content_changed();
        reconciler.on_row_selection(Tab::Temperature, Some(1));
        assert_eq!(
            reconciler.on_row_selection(Tab::Temperature, None),
            Some(None)
        );

        reconciler.on_tab_changed(Tab::Pressure);
        assert_eq!(reconciler.on_tab_changed(Tab::Temperature), Some(None));
    }

    #[test]
    fn reload_reapplies_active_selection() {
        let mut reconciler = SelectionReconciler::new(Tab::Temperature);
        reconciler.on_content_changed();
        reconciler.on_row_selection(Tab::Temperature, Some(2));

        assert_eq!(reconciler.on_content_changed(), Some(Some(2)));
        assert_eq!(reconciler.on_content_changed(), Some(Some(2)));
    }

    #[test]
    fn target_tracks_memory_of_active_tab_for_any_sequence() {
        // Deterministic pseudo-random walk over the three kinds of event.
        let mut tab = Tab::Temperature;
        let mut reconciler = SelectionReconciler::new(tab);
        let mut seed: u32 = 0x2545_f491;
        let mut applied: Option<Target> = None;

        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let emitted = match seed % 3 {
                0 => {
                    tab = tab.other();
                    reconciler.on_tab_changed(tab)
                }
                1 => {
                    let row = (seed >> 8) % 5;
                    let selection = (row != 4).then_some(row as usize);
                    reconciler.on_row_selection(tab, selection)
                }
                _ => reconciler.on_content_changed(),
            };
            if emitted.is_some() {
                applied = emitted;
            }
            if let Some(target) = applied {
                assert_eq!(target, reconciler.memory(tab));
            }
        }
    }

    #[test]
    fn tab_indices_and_other() {
        assert_eq!(Tab::Temperature.index(), 0);
        assert_eq!(Tab::Pressure.index(), 1);
        assert_eq!(Tab::Temperature.other(), Tab::Pressure);
        assert_eq!(Tab::ALL.map(Tab::title), ["Temperature", "Pressure"]);
    }
}
