use crate::application::{App, AppMode, FormField, StatusKind};
use crate::domain::{Booking, ResourceKind, Room};
use chrono::NaiveDateTime;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(chunks[1]);

    render_rooms(f, app, panels[0]);
    render_ledger(f, app, panels[1]);
    render_status_bar(f, app, chunks[2]);

    if matches!(app.mode, AppMode::Form) {
        render_form_popup(f, app);
    }
    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "roombook - Room Booking | {} booking(s) on record",
        app.manager.bookings().len()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_rooms(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Room::ALL
        .iter()
        .enumerate()
        .map(|(index, room)| {
            let (marker, marker_color) = if app.manager.room_available(room.id) {
                ("free", Color::Green)
            } else {
                ("booked", Color::Red)
            };
            let style = if index == app.selected {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<16}", room.name), style),
                Span::styled(marker, Style::default().fg(marker_color)),
            ]))
        })
        .collect();

    let resource_lines: Vec<ListItem> = ResourceKind::ALL
        .iter()
        .map(|kind| {
            let (marker, color) = if app.manager.resource_available(*kind) {
                ("free", Color::Green)
            } else {
                ("booked", Color::Red)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<16}", kind.display_name())),
                Span::styled(marker, Style::default().fg(color)),
            ]))
        })
        .collect();

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let rooms = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Rooms"));
    f.render_widget(rooms, halves[0]);

    let resources = List::new(resource_lines)
        .block(Block::default().borders(Borders::ALL).title("Resources"));
    f.render_widget(resources, halves[1]);
}

fn render_ledger(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = ledger_lines(app.manager.bookings())
        .into_iter()
        .map(Line::from)
        .collect();

    let ledger = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Bookings"));
    f.render_widget(ledger, area);
}

/// Pure projection of the ledger into display lines, one entry per booking
/// in commit order. An empty ledger yields the placeholder line.
pub fn ledger_lines(bookings: &[Booking]) -> Vec<String> {
    if bookings.is_empty() {
        return vec!["No bookings yet.".to_string()];
    }

    let mut lines = Vec::new();
    for booking in bookings {
        lines.push(booking.room.clone());
        lines.push(format!(
            "  Booked by: {} (Office ID: {})",
            booking.name, booking.office_id
        ));
        lines.push(format!("  From: {}", format_time(&booking.start)));
        lines.push(format!("  To: {}", format_time(&booking.end)));
        lines.push(format!("  Resources: {}", booking.resources.display_list()));
        lines.push(String::new());
    }
    lines
}

fn format_time(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.mode {
        AppMode::Rooms => {
            if let Some((message, kind)) = &app.status_message {
                let color = match kind {
                    StatusKind::Success => Color::Green,
                    StatusKind::Error => Color::Red,
                };
                (message.clone(), Style::default().fg(color))
            } else {
                (
                    "↑↓/jk: select room | Enter: book | F1/?: help | q: quit".to_string(),
                    Style::default(),
                )
            }
        }
        AppMode::Form => {
            if let Some((message, kind)) = &app.status_message {
                let color = match kind {
                    StatusKind::Success => Color::Green,
                    StatusKind::Error => Color::Red,
                };
                (message.clone(), Style::default().fg(color))
            } else {
                (
                    "Tab/↑↓: move | Space: toggle | Enter: confirm | Esc: close".to_string(),
                    Style::default().fg(Color::Yellow),
                )
            }
        }
        AppMode::Help => (
            "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
            Style::default().fg(Color::Cyan),
        ),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

fn render_form_popup(f: &mut Frame, app: &App) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 6,
        y: area.height / 8,
        width: area.width * 2 / 3,
        height: 14.min(area.height),
    };

    f.render_widget(Clear, popup_area);

    let focus_style = Style::default().bg(Color::LightBlue).fg(Color::Black);
    let field_style = |field: FormField| {
        if app.focus == field {
            focus_style
        } else {
            Style::default()
        }
    };

    let room_name = Room::by_id(app.form.room_id)
        .map(|room| room.name)
        .unwrap_or("?");
    let checkbox = |on: bool| if on { "[x]" } else { "[ ]" };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Room:        < {} - {} >", app.form.room_id, room_name),
            field_style(FormField::Room),
        )),
        Line::from(Span::styled(
            format!("Name:        {}", app.form.name),
            field_style(FormField::Name),
        )),
        Line::from(Span::styled(
            format!("Office ID:   {}", app.form.office_id),
            field_style(FormField::OfficeId),
        )),
        Line::from(Span::styled(
            format!("Start time:  {}  (YYYY-MM-DDTHH:MM)", app.form.start),
            field_style(FormField::StartTime),
        )),
        Line::from(Span::styled(
            format!("Duration:    {}  (hours)", app.form.duration_hours),
            field_style(FormField::Duration),
        )),
        Line::from(Span::styled(
            format!("{} Projector", checkbox(app.form.resources.projector)),
            field_style(FormField::Projector),
        )),
        Line::from(Span::styled(
            format!("{} Whiteboard", checkbox(app.form.resources.whiteboard)),
            field_style(FormField::Whiteboard),
        )),
        Line::from(Span::styled(
            format!("{} Laptop", checkbox(app.form.resources.laptop)),
            field_style(FormField::Laptop),
        )),
    ];

    if let Some(error) = &app.error_message {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Book a Room")
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(form, popup_area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("roombook Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"ROOMBOOK KEY REFERENCE

=== ROOM LIST ===
↑↓ or j/k       Select a room
Enter / Space   Open the booking form for the selected room
F1 or ?         Show this help
q               Quit application

=== BOOKING FORM ===
Tab / ↓         Focus next field
Shift+Tab / ↑   Focus previous field
← →             Change room (when the room field is focused)
1-5             Jump to a room by number (room field)
Space           Toggle the focused resource checkbox
Enter           Confirm the booking
Esc             Close the form

=== FORM FIELDS ===
Name            Who the booking is for (required)
Office ID       Requester's office identifier (required)
Start time      YYYY-MM-DDTHH:MM, e.g. 2025-03-11T10:00
                (a space instead of the T also works)
Duration        Hours, minimum 1 (fractions above 1 allowed)
Resources       At least one of projector/whiteboard/laptop

=== RULES ===
• Start time may not be in the past.
• A room or resource, once booked, stays booked until the
  program exits. There is no cancellation.
• On success the form closes itself after two seconds;
  Esc closes it sooner.

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#
        .to_string()
}
