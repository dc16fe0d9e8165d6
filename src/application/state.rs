//! Application state management for the booking terminal.
//!
//! This module contains the main application state, the form field focus
//! model, and the success-panel auto-close timer.

use crate::domain::{BookingManager, BookingRequest, ResourceKind, Room};
use chrono::{Local, NaiveDateTime};
use std::time::{Duration, Instant};

/// How long a confirmed submission keeps the form open before it closes
/// itself.
pub const FORM_AUTO_CLOSE: Duration = Duration::from_secs(2);

/// Represents the current mode of the application.
#[derive(Debug)]
pub enum AppMode {
    /// Room list navigation mode
    Rooms,
    /// Booking form is open
    Form,
    /// Help screen is displayed
    Help,
}

/// Severity of a transient status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// The form field that currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Room,
    Name,
    OfficeId,
    StartTime,
    Duration,
    Projector,
    Whiteboard,
    Laptop,
}

impl FormField {
    /// Focus traversal order, top to bottom of the form.
    pub const ORDER: [FormField; 8] = [
        FormField::Room,
        FormField::Name,
        FormField::OfficeId,
        FormField::StartTime,
        FormField::Duration,
        FormField::Projector,
        FormField::Whiteboard,
        FormField::Laptop,
    ];

    pub fn next(self) -> FormField {
        let index = Self::ORDER.iter().position(|field| *field == self).unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> FormField {
        let index = Self::ORDER.iter().position(|field| *field == self).unwrap_or(0);
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// The resource this field toggles, if it is a checkbox field.
    pub fn resource(self) -> Option<ResourceKind> {
        match self {
            FormField::Projector => Some(ResourceKind::Projector),
            FormField::Whiteboard => Some(ResourceKind::Whiteboard),
            FormField::Laptop => Some(ResourceKind::Laptop),
            _ => None,
        }
    }
}

/// Main application state containing the booking manager and UI state.
///
/// The manager is constructed once here and owns all availability state;
/// the rest of the fields drive the terminal UI.
///
/// # Examples
///
/// ```
/// use roombook::application::App;
///
/// let app = App::default();
/// assert_eq!(app.selected, 0);
/// assert!(app.manager.bookings().is_empty());
/// ```
#[derive(Debug)]
pub struct App {
    /// Availability state and booking ledger
    pub manager: BookingManager,
    /// Current application mode
    pub mode: AppMode,
    /// Index of the highlighted room in the room list
    pub selected: usize,
    /// Candidate booking being edited in the form
    pub form: BookingRequest,
    /// Form field with keyboard focus
    pub focus: FormField,
    /// Validation failure shown inside the form
    pub error_message: Option<String>,
    /// Transient status banner with its severity
    pub status_message: Option<(String, StatusKind)>,
    /// When a confirmed submission should close the form, if one is armed
    pub form_close_at: Option<Instant>,
    /// Scroll position in help text
    pub help_scroll: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            manager: BookingManager::default(),
            mode: AppMode::Rooms,
            selected: 0,
            form: BookingRequest::default(),
            focus: FormField::Name,
            error_message: None,
            status_message: None,
            form_close_at: None,
            help_scroll: 0,
        }
    }
}

impl App {
    /// The room currently highlighted in the room list.
    pub fn selected_room(&self) -> Room {
        Room::ALL[self.selected.min(Room::ALL.len() - 1)]
    }

    pub fn select_next_room(&mut self) {
        if self.selected < Room::ALL.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_previous_room(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Opens the booking form pre-selected to the highlighted room.
    ///
    /// Previously entered field values are kept; only the room selection
    /// follows the list. Any pending auto-close deadline is cancelled and
    /// stale messages are cleared.
    pub fn open_form(&mut self) {
        self.mode = AppMode::Form;
        self.form.room_id = self.selected_room().id;
        self.focus = FormField::Name;
        self.error_message = None;
        self.status_message = None;
        self.form_close_at = None;
    }

    /// Hides the form and clears messages and any pending auto-close.
    ///
    /// Field values survive so reopening the form restores them.
    pub fn close_form(&mut self) {
        self.mode = AppMode::Rooms;
        self.error_message = None;
        self.status_message = None;
        self.form_close_at = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Moves the form's room selection through the catalogue.
    pub fn cycle_form_room(&mut self, step: i32) {
        let count = Room::ALL.len() as i32;
        let position = Room::ALL
            .iter()
            .position(|room| room.id == self.form.room_id)
            .unwrap_or(0) as i32;
        let next = (position + step).rem_euclid(count) as usize;
        self.form.room_id = Room::ALL[next].id;
    }

    /// Toggles the checkbox under focus, if focus is on one.
    pub fn toggle_focused_resource(&mut self) {
        if let Some(kind) = self.focus.resource() {
            self.form.resources.toggle(kind);
        }
    }

    /// Routes a typed character into the focused text field.
    ///
    /// On the room field, digits jump straight to the matching room.
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Room => {
                if let Some(id) = c.to_digit(10) {
                    if Room::by_id(id as u8).is_some() {
                        self.form.room_id = id as u8;
                    }
                }
            }
            FormField::Name => self.form.name.push(c),
            FormField::OfficeId => self.form.office_id.push(c),
            FormField::StartTime => self.form.start.push(c),
            FormField::Duration => self.form.duration_hours.push(c),
            _ => {}
        }
    }

    /// Removes the last character from the focused text field.
    pub fn delete_char(&mut self) {
        match self.focus {
            FormField::Name => {
                self.form.name.pop();
            }
            FormField::OfficeId => {
                self.form.office_id.pop();
            }
            FormField::StartTime => {
                self.form.start.pop();
            }
            FormField::Duration => {
                self.form.duration_hours.pop();
            }
            _ => {}
        }
    }

    /// Submits the form against the current wall clock.
    pub fn submit_form(&mut self) {
        self.submit_form_at(Local::now().naive_local(), Instant::now());
    }

    /// Submits the form with an explicit clock, for deterministic tests.
    ///
    /// On success the confirmation banner is shown, the ledger re-renders
    /// on the next draw, and the auto-close deadline is armed (replacing
    /// any earlier one). On failure only the error message changes.
    pub fn submit_form_at(&mut self, now: NaiveDateTime, at: Instant) {
        match self.manager.submit(&self.form, now) {
            Ok(booking) => {
                self.error_message = None;
                self.status_message =
                    Some((booking.confirmation_message(), StatusKind::Success));
                self.form_close_at = Some(at + FORM_AUTO_CLOSE);
            }
            Err(err) => {
                self.error_message = Some(err.to_string());
            }
        }
    }

    /// Fires the auto-close if its deadline has passed.
    ///
    /// Called from the event loop on every poll timeout, so the form
    /// closes on schedule even without keyboard activity.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.form_close_at {
            if now >= deadline {
                if matches!(self.mode, AppMode::Form) {
                    self.close_form();
                } else {
                    self.form_close_at = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceSelection;
    use chrono::NaiveDate;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn fill_valid_form(app: &mut App) {
        app.form.name = "Alice".to_string();
        app.form.office_id = "O1".to_string();
        app.form.start = "2025-03-11T10:00".to_string();
        app.form.duration_hours = "2".to_string();
        app.form.resources = ResourceSelection {
            projector: true,
            ..Default::default()
        };
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert!(matches!(app.mode, AppMode::Rooms));
        assert_eq!(app.selected, 0);
        assert_eq!(app.focus, FormField::Name);
        assert!(app.error_message.is_none());
        assert!(app.status_message.is_none());
        assert!(app.form_close_at.is_none());
        assert_eq!(app.help_scroll, 0);
    }

    #[test]
    fn test_room_selection_bounds() {
        let mut app = App::default();
        app.select_previous_room();
        assert_eq!(app.selected, 0);

        for _ in 0..10 {
            app.select_next_room();
        }
        assert_eq!(app.selected, Room::ALL.len() - 1);
        assert_eq!(app.selected_room().name, "Seminar Hall");
    }

    #[test]
    fn test_open_form_preselects_room() {
        let mut app = App::default();
        app.select_next_room();
        app.select_next_room();
        app.open_form();

        assert!(matches!(app.mode, AppMode::Form));
        assert_eq!(app.form.room_id, 3);
        assert_eq!(app.focus, FormField::Name);
        assert!(app.error_message.is_none());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_open_form_keeps_previous_entries() {
        let mut app = App::default();
        app.open_form();
        app.form.name = "Alice".to_string();
        app.close_form();

        app.select_next_room();
        app.open_form();
        assert_eq!(app.form.name, "Alice");
        assert_eq!(app.form.room_id, 2);
    }

    #[test]
    fn test_focus_cycle_wraps() {
        let mut app = App::default();
        app.focus = FormField::Laptop;
        app.focus_next();
        assert_eq!(app.focus, FormField::Room);
        app.focus_previous();
        assert_eq!(app.focus, FormField::Laptop);
    }

    #[test]
    fn test_focus_order_covers_whole_form() {
        let mut field = FormField::Room;
        for expected in FormField::ORDER {
            assert_eq!(field, expected);
            field = field.next();
        }
        assert_eq!(field, FormField::Room);
    }

    #[test]
    fn test_cycle_form_room_wraps() {
        let mut app = App::default();
        app.open_form();
        assert_eq!(app.form.room_id, 1);

        app.cycle_form_room(-1);
        assert_eq!(app.form.room_id, 5);
        app.cycle_form_room(1);
        assert_eq!(app.form.room_id, 1);
        app.cycle_form_room(2);
        assert_eq!(app.form.room_id, 3);
    }

    #[test]
    fn test_input_char_routes_to_focused_field() {
        let mut app = App::default();
        app.open_form();

        app.focus = FormField::Name;
        app.input_char('A');
        app.input_char('l');
        assert_eq!(app.form.name, "Al");

        app.focus = FormField::Duration;
        app.input_char('2');
        assert_eq!(app.form.duration_hours, "2");

        app.focus = FormField::Room;
        app.input_char('4');
        assert_eq!(app.form.room_id, 4);
        app.input_char('9');
        assert_eq!(app.form.room_id, 4); // unknown room ignored
    }

    #[test]
    fn test_delete_char() {
        let mut app = App::default();
        app.open_form();
        app.form.office_id = "O12".to_string();
        app.focus = FormField::OfficeId;

        app.delete_char();
        assert_eq!(app.form.office_id, "O1");

        // Checkbox focus ignores deletes.
        app.focus = FormField::Laptop;
        app.delete_char();
        assert_eq!(app.form.office_id, "O1");
    }

    #[test]
    fn test_toggle_focused_resource() {
        let mut app = App::default();
        app.open_form();

        app.focus = FormField::Whiteboard;
        app.toggle_focused_resource();
        assert!(app.form.resources.whiteboard);

        app.focus = FormField::Name;
        app.toggle_focused_resource();
        assert!(app.form.resources.whiteboard); // no checkbox under focus

        app.focus = FormField::Whiteboard;
        app.toggle_focused_resource();
        assert!(!app.form.resources.whiteboard);
    }

    #[test]
    fn test_submit_success_arms_auto_close() {
        let mut app = App::default();
        app.open_form();
        fill_valid_form(&mut app);

        let at = Instant::now();
        app.submit_form_at(fixed_now(), at);

        assert!(app.error_message.is_none());
        let (message, kind) = app.status_message.clone().unwrap();
        assert_eq!(
            message,
            "Booking confirmed for Alice (Office ID: O1) in Room 1."
        );
        assert_eq!(kind, StatusKind::Success);
        assert_eq!(app.form_close_at, Some(at + FORM_AUTO_CLOSE));
        assert_eq!(app.manager.bookings().len(), 1);
        assert!(matches!(app.mode, AppMode::Form));
    }

    #[test]
    fn test_submit_failure_shows_error_only() {
        let mut app = App::default();
        app.open_form();
        fill_valid_form(&mut app);
        app.form.resources = ResourceSelection::default();

        app.submit_form_at(fixed_now(), Instant::now());

        assert_eq!(
            app.error_message.as_deref(),
            Some("Please select at least one additional resource.")
        );
        assert!(app.status_message.is_none());
        assert!(app.form_close_at.is_none());
        assert!(app.manager.bookings().is_empty());
        assert!(matches!(app.mode, AppMode::Form));
    }

    #[test]
    fn test_error_replaced_on_each_attempt() {
        let mut app = App::default();
        app.open_form();
        fill_valid_form(&mut app);
        app.form.name = String::new();

        app.submit_form_at(fixed_now(), Instant::now());
        assert_eq!(app.error_message.as_deref(), Some("Please fill in all fields."));

        app.form.name = "Alice".to_string();
        app.form.duration_hours = "0.5".to_string();
        app.submit_form_at(fixed_now(), Instant::now());
        assert_eq!(
            app.error_message.as_deref(),
            Some("The booking duration must be at least 1 hour.")
        );
    }

    #[test]
    fn test_tick_closes_form_after_deadline() {
        let mut app = App::default();
        app.open_form();
        fill_valid_form(&mut app);

        let at = Instant::now();
        app.submit_form_at(fixed_now(), at);

        app.tick(at + Duration::from_millis(500));
        assert!(matches!(app.mode, AppMode::Form));
        assert!(app.status_message.is_some());

        app.tick(at + FORM_AUTO_CLOSE + Duration::from_millis(1));
        assert!(matches!(app.mode, AppMode::Rooms));
        assert!(app.status_message.is_none());
        assert!(app.form_close_at.is_none());
    }

    #[test]
    fn test_manual_close_cancels_auto_close() {
        let mut app = App::default();
        app.open_form();
        fill_valid_form(&mut app);

        let at = Instant::now();
        app.submit_form_at(fixed_now(), at);
        app.close_form();
        assert!(app.form_close_at.is_none());

        // A late tick must not disturb the rooms view.
        app.tick(at + FORM_AUTO_CLOSE + Duration::from_secs(1));
        assert!(matches!(app.mode, AppMode::Rooms));
    }

    #[test]
    fn test_new_submission_replaces_pending_deadline() {
        let mut app = App::default();
        app.open_form();
        fill_valid_form(&mut app);

        let first = Instant::now();
        app.submit_form_at(fixed_now(), first);

        // Second booking for another room while the first timer pends.
        app.form.room_id = 2;
        app.form.resources = ResourceSelection {
            laptop: true,
            ..Default::default()
        };
        let second = first + Duration::from_secs(1);
        app.submit_form_at(fixed_now(), second);

        assert_eq!(app.form_close_at, Some(second + FORM_AUTO_CLOSE));
        assert_eq!(app.manager.bookings().len(), 2);
    }

    #[test]
    fn test_reopening_form_cancels_pending_deadline() {
        let mut app = App::default();
        app.open_form();
        fill_valid_form(&mut app);

        let at = Instant::now();
        app.submit_form_at(fixed_now(), at);
        app.close_form();

        app.select_next_room();
        app.open_form();
        assert!(app.form_close_at.is_none());

        app.tick(at + FORM_AUTO_CLOSE + Duration::from_secs(1));
        assert!(matches!(app.mode, AppMode::Form)); // stays open
    }
}
