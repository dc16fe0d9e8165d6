use crate::application::{App, AppMode, FormField};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Rooms => Self::handle_rooms_mode(app, key),
            AppMode::Form => Self::handle_form_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_rooms_mode(app: &mut App, key: KeyCode) {
        // Any keypress dismisses a lingering status banner.
        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.select_previous_room();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.select_next_room();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.open_form();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_form_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => {
                app.submit_form();
            }
            KeyCode::Esc => {
                app.close_form();
            }
            KeyCode::Tab | KeyCode::Down => {
                app.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.focus_previous();
            }
            KeyCode::Left if app.focus == FormField::Room => {
                app.cycle_form_room(-1);
            }
            KeyCode::Right if app.focus == FormField::Room => {
                app.cycle_form_room(1);
            }
            KeyCode::Backspace => {
                app.delete_char();
            }
            KeyCode::Char(' ') if app.focus.resource().is_some() => {
                app.toggle_focused_resource();
            }
            KeyCode::Char(c) => {
                if !modifiers.contains(KeyModifiers::CONTROL) {
                    app.input_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Rooms;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, AppMode, StatusKind};

    #[test]
    fn test_room_navigation_keys() {
        let mut app = App::default();

        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.selected, 1);

        InputHandler::handle_key_event(&mut app, KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.selected, 2);

        InputHandler::handle_key_event(&mut app, KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_enter_opens_form_for_selected_room() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert!(matches!(app.mode, AppMode::Form));
        assert_eq!(app.form.room_id, 2);
    }

    #[test]
    fn test_typing_into_name_field() {
        let mut app = App::default();
        app.open_form();

        for c in "Alice".chars() {
            InputHandler::handle_key_event(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.form.name, "Alice");

        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.form.name, "Alic");
    }

    #[test]
    fn test_space_toggles_focused_checkbox() {
        let mut app = App::default();
        app.open_form();
        app.focus = FormField::Projector;

        InputHandler::handle_key_event(&mut app, KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(app.form.resources.projector);

        // In a text field, space is just a character.
        app.focus = FormField::Name;
        InputHandler::handle_key_event(&mut app, KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(app.form.name, " ");
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut app = App::default();
        app.open_form();
        assert_eq!(app.focus, FormField::Name);

        InputHandler::handle_key_event(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, FormField::OfficeId);

        InputHandler::handle_key_event(&mut app, KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(app.focus, FormField::Name);
    }

    #[test]
    fn test_arrows_cycle_room_on_room_field() {
        let mut app = App::default();
        app.open_form();
        app.focus = FormField::Room;

        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.form.room_id, 2);

        InputHandler::handle_key_event(&mut app, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.form.room_id, 1);
    }

    #[test]
    fn test_esc_closes_form() {
        let mut app = App::default();
        app.open_form();

        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Rooms));
    }

    #[test]
    fn test_help_mode_keys() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Help));

        InputHandler::handle_key_event(&mut app, KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 1);

        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Rooms));
    }

    #[test]
    fn test_keypress_dismisses_status_banner() {
        let mut app = App::default();
        app.status_message = Some(("done".to_string(), StatusKind::Success));

        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert!(app.status_message.is_none());
    }
}
