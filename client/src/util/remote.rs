//! Spawned remote calls with the standard toast handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages follow one pattern: fetch a list, render it, mutate, toast, and
//! re-fetch the whole list. These helpers own the spawn and the toast so
//! pages only supply the gateway future.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use gateway::GatewayError;
use leptos::prelude::*;

use crate::components::toaster::{notify_error, notify_success};
use crate::state::list::ListState;
use crate::state::toast::ToastState;

/// Reload `list` from `fetch`. On failure the previous items stay and
/// `failure` is shown.
pub fn load_into<T, Fut>(list: RwSignal<ListState<T>>, toasts: RwSignal<ToastState>, failure: &'static str, fetch: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, GatewayError>> + 'static,
{
    list.update(ListState::begin_load);
    leptos::task::spawn_local(async move {
        let result = fetch.await;
        let mut outcome = Ok(());
        list.update(|state| outcome = state.finish_load(result));
        if let Err(e) = outcome {
            log::error!("{failure} ({e})");
            notify_error(toasts, failure);
        }
    });
}

/// Run a mutation, toast the outcome, and call `then` only on success.
pub fn mutate<Fut, F>(toasts: RwSignal<ToastState>, success: &'static str, failure: &'static str, action: Fut, then: F)
where
    Fut: Future<Output = Result<(), GatewayError>> + 'static,
    F: FnOnce() + 'static,
{
    leptos::task::spawn_local(async move {
        match action.await {
            Ok(()) => {
                notify_success(toasts, success);
                then();
            }
            Err(e) => {
                log::error!("{failure} ({e})");
                notify_error(toasts, failure);
            }
        }
    });
}
