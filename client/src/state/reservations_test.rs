use super::*;

#[test]
fn pending_offers_cancel_then_confirm() {
    assert_eq!(
        actions_for(ReservationStatus::Pending),
        &[ReservationAction::Cancel, ReservationAction::Confirm]
    );
}

#[test]
fn confirmed_offers_cancel_only() {
    assert_eq!(actions_for(ReservationStatus::Confirmed), &[ReservationAction::Cancel]);
}

#[test]
fn cancelled_offers_nothing() {
    assert!(actions_for(ReservationStatus::Cancelled).is_empty());
}

#[test]
fn actions_map_to_target_status() {
    assert_eq!(ReservationAction::Confirm.target_status(), ReservationStatus::Confirmed);
    assert_eq!(ReservationAction::Cancel.target_status(), ReservationStatus::Cancelled);
}

#[test]
fn badge_classes_differ_per_status() {
    assert_ne!(
        status_badge_class(ReservationStatus::Pending),
        status_badge_class(ReservationStatus::Confirmed)
    );
    assert_eq!(status_badge_class(ReservationStatus::Cancelled), "badge badge--danger");
}
