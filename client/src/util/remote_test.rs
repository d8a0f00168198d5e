use std::cell::Cell;
use std::rc::Rc;

use any_spawner::Executor;
use tokio::task::LocalSet;

use super::*;
use crate::state::toast::ToastKind;

/// Run `start` on a local task set and wait for everything it spawned.
async fn settle(start: impl FnOnce()) {
    let _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();
    let local = LocalSet::new();
    local.run_until(async { start() }).await;
    local.await;
}

fn offline() -> GatewayError {
    GatewayError::Transport("offline".into())
}

#[tokio::test]
async fn failed_load_toasts_and_clears_loading() {
    let list = RwSignal::new(ListState { items: vec![1_u32, 2], loading: false });
    let toasts = RwSignal::new(ToastState::default());

    settle(|| load_into(list, toasts, "Could not load resources.", async { Err::<Vec<u32>, _>(offline()) })).await;

    let list = list.get_untracked();
    assert!(!list.loading);
    assert_eq!(list.items, vec![1, 2]);
    let toasts = toasts.get_untracked();
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].kind, ToastKind::Error);
    assert_eq!(toasts.items[0].message, "Could not load resources.");
}

#[tokio::test]
async fn successful_load_replaces_items_quietly() {
    let list = RwSignal::new(ListState::<u32>::default());
    let toasts = RwSignal::new(ToastState::default());

    settle(|| load_into(list, toasts, "Could not load resources.", async { Ok(vec![7_u32]) })).await;

    let list = list.get_untracked();
    assert!(!list.loading);
    assert_eq!(list.items, vec![7]);
    assert!(toasts.get_untracked().items.is_empty());
}

#[tokio::test]
async fn failed_mutation_toasts_and_skips_follow_up() {
    let toasts = RwSignal::new(ToastState::default());
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);

    settle(|| {
        mutate(toasts, "Saved.", "Could not save.", async { Err(offline()) }, move || flag.set(true));
    })
    .await;

    assert!(!ran.get());
    let toasts = toasts.get_untracked();
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].kind, ToastKind::Error);
    assert_eq!(toasts.items[0].message, "Could not save.");
}

#[tokio::test]
async fn successful_mutation_toasts_and_runs_follow_up() {
    let toasts = RwSignal::new(ToastState::default());
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);

    settle(|| mutate(toasts, "Saved.", "Could not save.", async { Ok(()) }, move || flag.set(true))).await;

    assert!(ran.get());
    let toasts = toasts.get_untracked();
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].kind, ToastKind::Success);
}
