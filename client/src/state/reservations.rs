//! Per-reservation actions offered on the reservations screen.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use gateway::model::ReservationStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReservationAction {
    Confirm,
    Cancel,
}

impl ReservationAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirm => "Confirm",
            Self::Cancel => "Cancel",
        }
    }

    /// Status written when the action runs.
    #[must_use]
    pub fn target_status(self) -> ReservationStatus {
        match self {
            Self::Confirm => ReservationStatus::Confirmed,
            Self::Cancel => ReservationStatus::Cancelled,
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Confirm => "Reservation confirmed.",
            Self::Cancel => "Reservation cancelled.",
        }
    }

    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Confirm => "Could not confirm the reservation.",
            Self::Cancel => "Could not cancel the reservation.",
        }
    }
}

/// Buttons shown for a reservation in `status`, left to right.
#[must_use]
pub fn actions_for(status: ReservationStatus) -> &'static [ReservationAction] {
    match status {
        ReservationStatus::Pending => &[ReservationAction::Cancel, ReservationAction::Confirm],
        ReservationStatus::Confirmed => &[ReservationAction::Cancel],
        ReservationStatus::Cancelled => &[],
    }
}

/// CSS modifier for the status badge.
#[must_use]
pub fn status_badge_class(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "badge badge--warning",
        ReservationStatus::Confirmed => "badge badge--success",
        ReservationStatus::Cancelled => "badge badge--danger",
    }
}
