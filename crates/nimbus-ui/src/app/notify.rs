//! Store-backed notifier: queue a toast and mirror errors to the console.

use crate::core::notify::{Notice, Notifier};
use crate::core::store::AppStore;
use crate::models::ToastKind;
use gloo::console;
use yewdux::prelude::Dispatch;

/// Maximum number of toasts kept on screen.
const MAX_TOASTS: usize = 4;

#[derive(Clone)]
pub(crate) struct StoreNotifier {
    dispatch: Dispatch<AppStore>,
}

impl StoreNotifier {
    pub(crate) fn new() -> Self {
        Self {
            dispatch: Dispatch::<AppStore>::new(),
        }
    }
}

impl Notifier for StoreNotifier {
    fn notify(&self, notice: Notice) {
        if notice.kind == ToastKind::Error {
            console::error!(notice.message.clone());
        }
        self.dispatch.reduce_mut(|store| {
            store.toasts.push(notice.kind, notice.message);
            let overflow = store.toasts.items.len().saturating_sub(MAX_TOASTS);
            store.toasts.items.drain(0..overflow);
        });
    }
}
