use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A bookable physical space from the fixed catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub id: u8,
    pub name: &'static str,
}

impl Room {
    /// The full set of rooms known to the system.
    pub const ALL: [Room; 5] = [
        Room { id: 1, name: "Room 1" },
        Room { id: 2, name: "Room 2" },
        Room { id: 3, name: "Conference Room" },
        Room { id: 4, name: "VIP Room" },
        Room { id: 5, name: "Seminar Hall" },
    ];

    pub fn by_id(id: u8) -> Option<Room> {
        Room::ALL.iter().copied().find(|room| room.id == id)
    }

    /// Label used on committed bookings, derived from the id.
    pub fn label_for(id: u8) -> String {
        format!("Room {}", id)
    }
}

/// A shared bookable asset, independent of any room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Projector,
    Whiteboard,
    Laptop,
}

impl ResourceKind {
    /// All resources, in the order availability checks run.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Projector,
        ResourceKind::Whiteboard,
        ResourceKind::Laptop,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Projector => "projector",
            ResourceKind::Whiteboard => "whiteboard",
            ResourceKind::Laptop => "laptop",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Projector => "Projector",
            ResourceKind::Whiteboard => "Whiteboard",
            ResourceKind::Laptop => "Laptop",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which of the shared resources a booking asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSelection {
    pub projector: bool,
    pub whiteboard: bool,
    pub laptop: bool,
}

impl ResourceSelection {
    pub fn is_empty(&self) -> bool {
        !self.projector && !self.whiteboard && !self.laptop
    }

    pub fn contains(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::Projector => self.projector,
            ResourceKind::Whiteboard => self.whiteboard,
            ResourceKind::Laptop => self.laptop,
        }
    }

    pub fn toggle(&mut self, kind: ResourceKind) {
        match kind {
            ResourceKind::Projector => self.projector = !self.projector,
            ResourceKind::Whiteboard => self.whiteboard = !self.whiteboard,
            ResourceKind::Laptop => self.laptop = !self.laptop,
        }
    }

    /// Requested resources in the fixed check order.
    pub fn requested(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.contains(*kind))
            .collect()
    }

    /// Comma-joined display names, e.g. "Projector, Laptop".
    pub fn display_list(&self) -> String {
        self.requested()
            .iter()
            .map(|kind| kind.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A raw candidate booking as gathered from the form, before validation.
///
/// Start time and duration stay as entered text; parsing is part of
/// validation so the reported error matches what the user typed.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub room_id: u8,
    pub name: String,
    pub office_id: String,
    pub start: String,
    pub duration_hours: String,
    pub resources: ResourceSelection,
}

/// A committed reservation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub room: String,
    pub name: String,
    pub office_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub resources: ResourceSelection,
}

impl Booking {
    pub fn confirmation_message(&self) -> String {
        format!(
            "Booking confirmed for {} (Office ID: {}) in {}.",
            self.name, self.office_id, self.room
        )
    }
}
