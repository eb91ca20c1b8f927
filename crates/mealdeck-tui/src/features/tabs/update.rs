//! Main stack reducer.
//!
//! Tab switching and the per-tab cursors. The only effect this slice can
//! produce besides quitting is `Logout`, from the profile tab.

use crossterm::event::{KeyCode, KeyEvent};

use super::state::{MainState, MainTab};
use crate::effects::UiEffect;

/// Handles a key press routed to the main stack.
pub fn handle_key(main: &mut MainState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') => return vec![UiEffect::Quit],
        KeyCode::Tab | KeyCode::Right => {
            main.tab = main.tab.next();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Left => {
            main.tab = main.tab.prev();
            return vec![];
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as usize) - ('1' as usize);
            main.tab = MainTab::all()[index];
            return vec![];
        }
        _ => {}
    }

    match main.tab {
        MainTab::Dashboard => vec![],
        MainTab::Meals => {
            handle_cursor(key, &mut main.meals_cursor, main.plan.len());
            vec![]
        }
        MainTab::Groceries => handle_groceries_key(main, key),
        MainTab::Profile => handle_profile_key(main, key),
    }
}

fn handle_cursor(key: KeyEvent, cursor: &mut usize, len: usize) {
    match key.code {
        KeyCode::Up => *cursor = cursor.saturating_sub(1),
        KeyCode::Down => {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
        _ => {}
    }
}

fn handle_groceries_key(main: &mut MainState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(item) = main.groceries.get_mut(main.grocery_cursor) {
                item.checked = !item.checked;
            }
        }
        _ => handle_cursor(key, &mut main.grocery_cursor, main.groceries.len()),
    }
    vec![]
}

fn handle_profile_key(main: &mut MainState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Enter if main.profile_cursor == MainState::LOGOUT_ENTRY => {
            vec![UiEffect::Logout]
        }
        _ => {
            handle_cursor(key, &mut main.profile_cursor, MainState::PROFILE_ENTRIES);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use mealdeck_core::config::Config;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Test: Tab cycles tabs, digits jump directly.
    #[test]
    fn test_tab_navigation() {
        let mut main = MainState::new(&Config::default());
        assert_eq!(main.tab, MainTab::Dashboard);

        handle_key(&mut main, key(KeyCode::Tab));
        assert_eq!(main.tab, MainTab::Meals);

        handle_key(&mut main, key(KeyCode::Char('4')));
        assert_eq!(main.tab, MainTab::Profile);

        handle_key(&mut main, key(KeyCode::BackTab));
        assert_eq!(main.tab, MainTab::Groceries);
    }

    /// Test: space toggles the selected grocery item.
    #[test]
    fn test_grocery_toggle() {
        let mut main = MainState::new(&Config::default());
        main.tab = MainTab::Groceries;

        let was_checked = main.groceries[0].checked;
        handle_key(&mut main, key(KeyCode::Char(' ')));
        assert_eq!(main.groceries[0].checked, !was_checked);

        handle_key(&mut main, key(KeyCode::Down));
        assert_eq!(main.grocery_cursor, 1);
    }

    /// Test: cursors clamp at both ends.
    #[test]
    fn test_cursor_clamping() {
        let mut main = MainState::new(&Config::default());
        main.tab = MainTab::Meals;
        main.meals_cursor = 0;

        handle_key(&mut main, key(KeyCode::Up));
        assert_eq!(main.meals_cursor, 0);

        for _ in 0..20 {
            handle_key(&mut main, key(KeyCode::Down));
        }
        assert_eq!(main.meals_cursor, main.plan.len() - 1);
    }

    /// Test: Enter on the Log out entry emits the logout effect.
    #[test]
    fn test_profile_logout_entry() {
        let mut main = MainState::new(&Config::default());
        main.tab = MainTab::Profile;

        // Enter on a section is not a logout.
        assert!(handle_key(&mut main, key(KeyCode::Enter)).is_empty());

        main.profile_cursor = MainState::LOGOUT_ENTRY;
        let effects = handle_key(&mut main, key(KeyCode::Enter));
        assert_eq!(effects, vec![UiEffect::Logout]);
    }

    /// Test: q quits from the main stack.
    #[test]
    fn test_quit_key() {
        let mut main = MainState::new(&Config::default());
        assert_eq!(handle_key(&mut main, key(KeyCode::Char('q'))), vec![UiEffect::Quit]);
    }
}
