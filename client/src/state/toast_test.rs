use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.success("Saved.");
    let second = state.error("Could not save.");
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].kind, ToastKind::Success);
    assert_eq!(state.items[1].message, "Could not save.");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.success("one");
    let second = state.success("two");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.error("boom");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.success("one");
    state.dismiss(first);
    let second = state.success("two");
    assert_ne!(first, second);
}
