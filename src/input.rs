use crate::app_state::{AppState, MenuItem};
use crate::selection::Tab;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    Logout,
}

pub fn handle_key(app_state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    let is_quit = key.code == KeyCode::Char('q')
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL));
    if is_quit {
        return KeyAction::Quit;
    }

    // Input stays blocked until the first snapshot arrives.
    if !app_state.is_interactive() {
        return KeyAction::None;
    }

    if app_state.menu.is_some() {
        return handle_menu_key(app_state, key.code);
    }

    match key.code {
        KeyCode::Char('1') => app_state.switch_tab(Tab::Temperature),
        KeyCode::Char('2') => app_state.switch_tab(Tab::Pressure),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            app_state.toggle_tab()
        }
        KeyCode::Down | KeyCode::Char('j') => app_state.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app_state.select_previous(),
        KeyCode::Char(' ') | KeyCode::Enter => app_state.toggle_selection(),
        KeyCode::Char('m') => app_state.open_menu(),
        _ => {}
    }
    KeyAction::None
}

fn handle_menu_key(app_state: &mut AppState, code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Down | KeyCode::Char('j') => app_state.menu_move(true),
        KeyCode::Up | KeyCode::Char('k') => app_state.menu_move(false),
        KeyCode::Esc | KeyCode::Char('m') => app_state.close_menu(),
        KeyCode::Enter => {
            let item = app_state.menu.map(|menu| menu.item());
            app_state.close_menu();
            if item == Some(MenuItem::Logout) {
                return KeyAction::Logout;
            }
        }
        _ => {}
    }
    KeyAction::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::client::FetchError;
    use crate::telemetry::state::{Reading, SystemState};
    use crate::ui::list::ListView;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_app() -> AppState {
        let mut app = AppState::new(Tab::Temperature);
        let state = SystemState {
            temperatures: vec![Reading::new("Boiler", "81°C"), Reading::new("Intake", "12°C")],
            pressure: vec![Reading::new("Main line", "3.2 bar")],
        };
        app.apply_poll(Ok(state), Instant::now());
        app
    }

    #[test]
    fn keys_are_ignored_while_loading_except_quit() {
        let mut app = AppState::new(Tab::Temperature);
        app.apply_poll(Err(FetchError::Status(500)), Instant::now());

        assert_eq!(handle_key(&mut app, key(KeyCode::Char('2'))), KeyAction::None);
        assert_eq!(app.active_tab, Tab::Temperature);
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = loaded_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut app, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn tab_keys_switch_tabs() {
        let mut app = loaded_app();
        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.active_tab, Tab::Pressure);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_tab, Tab::Temperature);
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.active_tab, Tab::Pressure);
        handle_key(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.active_tab, Tab::Temperature);
    }

    #[test]
    fn arrow_keys_move_selection() {
        let mut app = loaded_app();
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.list.selected(), Some(1));
        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.list.selected(), Some(0));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.list.selected(), None);
    }

    #[test]
    fn menu_logout_and_cancel() {
        let mut app = loaded_app();
        handle_key(&mut app, key(KeyCode::Char('m')));
        assert!(app.menu.is_some());

        // Keys go to the menu while it is open.
        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.active_tab, Tab::Temperature);

        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(handle_key(&mut app, key(KeyCode::Enter)), KeyAction::None);
        assert!(app.menu.is_none());

        handle_key(&mut app, key(KeyCode::Char('m')));
        assert_eq!(handle_key(&mut app, key(KeyCode::Enter)), KeyAction::Logout);
        assert!(app.menu.is_none());
    }

    #[test]
    fn escape_closes_menu() {
        let mut app = loaded_app();
        handle_key(&mut app, key(KeyCode::Char('m')));
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.menu.is_none());
    }
}
