//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared dashboard state in one store; rows and modals dispatch into it.
//! - Slices expose small reducers so store mutations stay testable natively.

use crate::core::auth::UserSession;
use crate::core::events::AssetEvent;
use crate::core::modal::AnchorRect;
use crate::features::assets::state::{AssetKey, AssetTree};
use crate::features::labels::state::LabelCatalog;
use crate::models::{BackendType, Label, LabelName, Toast, ToastKind};
use std::collections::BTreeSet;
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppStore {
    /// Signed-in user and backend selection.
    pub session: SessionSlice,
    /// Asset tree shown in the dashboard.
    pub assets: AssetTree,
    /// Event waiting for the row it targets; cleared by that row.
    pub asset_event: Option<AssetEvent>,
    /// Label catalog.
    pub labels: LabelsSlice,
    /// Pending toasts.
    pub toasts: ToastSlice,
    /// Modal currently open, if any.
    pub modal: Option<ActiveModal>,
}

/// Session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSlice {
    /// Signed-in user.
    pub user: Option<UserSession>,
    /// Backend flavour in use.
    pub backend: BackendType,
}

impl Default for SessionSlice {
    fn default() -> Self {
        Self {
            user: None,
            backend: BackendType::Remote,
        }
    }
}

/// Label catalog slice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelsSlice {
    /// Labels keyed by name.
    pub catalog: LabelCatalog,
}

impl LabelsSlice {
    /// Replace the catalog with a fresh listing.
    pub fn reset(&mut self, labels: Vec<Label>) {
        self.catalog = labels
            .into_iter()
            .map(|label| (label.value.clone(), label))
            .collect();
    }

    /// Insert or replace a label.
    pub fn insert(&mut self, label: Label) {
        self.catalog.insert(label.value.clone(), label);
    }

    /// Names of every catalog label.
    #[must_use]
    pub fn names(&self) -> BTreeSet<LabelName> {
        self.catalog.keys().cloned().collect()
    }
}

/// Toast queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastSlice {
    /// Toasts in display order.
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastSlice {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message, kind });
        id
    }

    /// Remove a toast.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Modals the shell can show.
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    /// Change-password form, centered.
    ChangePassword,
    /// Label selection for one row.
    ManageLabels {
        /// Row whose labels are edited.
        key: AssetKey,
        /// Trigger position; centered when absent.
        anchor: Option<AnchorRect>,
    },
    /// Catalog label creation.
    NewLabel {
        /// Trigger position.
        anchor: AnchorRect,
    },
}
