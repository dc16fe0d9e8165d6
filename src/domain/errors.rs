use super::models::ResourceKind;

/// A reason a booking submission was rejected.
///
/// All of these are user-input or availability errors surfaced directly to
/// the view; none are system faults and none leave state modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    MissingField,
    PastStartTime,
    DurationTooShort,
    UnknownRoom,
    RoomUnavailable,
    NoResourceSelected,
    ResourceUnavailable(ResourceKind),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::MissingField => {
                write!(f, "Please fill in all fields.")
            }
            BookingError::PastStartTime => {
                write!(f, "You cannot book for a past time.")
            }
            BookingError::DurationTooShort => {
                write!(f, "The booking duration must be at least 1 hour.")
            }
            BookingError::UnknownRoom | BookingError::RoomUnavailable => {
                write!(f, "Sorry, this room is not available.")
            }
            BookingError::NoResourceSelected => {
                write!(f, "Please select at least one additional resource.")
            }
            BookingError::ResourceUnavailable(kind) => {
                write!(f, "The {} is unavailable at the selected time.", kind)
            }
        }
    }
}

impl std::error::Error for BookingError {}

pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BookingError::MissingField.to_string(),
            "Please fill in all fields."
        );
        assert_eq!(
            BookingError::PastStartTime.to_string(),
            "You cannot book for a past time."
        );
        assert_eq!(
            BookingError::DurationTooShort.to_string(),
            "The booking duration must be at least 1 hour."
        );
        assert_eq!(
            BookingError::RoomUnavailable.to_string(),
            "Sorry, this room is not available."
        );
        assert_eq!(
            BookingError::NoResourceSelected.to_string(),
            "Please select at least one additional resource."
        );
        assert_eq!(
            BookingError::ResourceUnavailable(ResourceKind::Whiteboard).to_string(),
            "The whiteboard is unavailable at the selected time."
        );
    }
}
