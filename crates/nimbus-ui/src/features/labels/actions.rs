//! Label modal side effects.
//!
//! # Design
//! - Selection changes are applied locally first and rolled back on failure.
//! - Creation goes through a caller-supplied future so the shell owns the catalog.
//! - Failures are toasted and logged here; callers only see the outcome.

use crate::core::backend::{Backend, BackendError};
use crate::core::notify::Notifier;
use crate::features::labels::state::{LabelCatalog, ManageLabelsState, NewLabelForm};
use crate::models::{AssetId, LChColor, LabelName};
use std::collections::BTreeSet;
use std::future::Future;

/// Receives the asset's label list whenever the modal changes it.
pub trait LabelSelectionSink {
    /// Replace the attached labels.
    fn set_labels(&self, labels: Vec<LabelName>);
}

/// Result of toggling a label on an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The label was attached.
    Added,
    /// The label was detached.
    Removed,
    /// The backend rejected the change and the previous list was restored.
    RolledBack,
}

/// Attach or detach `name`, sending the full resulting list to the backend.
pub async fn toggle_label<B: Backend + ?Sized>(
    backend: &B,
    asset_id: &AssetId,
    title: &str,
    state: &ManageLabelsState,
    name: &LabelName,
    sink: &dyn LabelSelectionSink,
    notifier: &dyn Notifier,
) -> ToggleOutcome {
    let removing = state.is_active(name);
    let labels = state.toggled(name);
    sink.set_labels(labels.clone());
    match backend.associate_tag(asset_id, &labels, title).await {
        Ok(()) if removing => ToggleOutcome::Removed,
        Ok(()) => ToggleOutcome::Added,
        Err(err) => {
            notifier.toast_and_log(None, Some(&err));
            sink.set_labels(state.labels.clone());
            ToggleOutcome::RolledBack
        }
    }
}

/// Result of submitting the label modal's create form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateLabelOutcome {
    /// The form was not creatable; nothing happened.
    Skipped,
    /// The label was created and attached.
    Created,
    /// Creation failed and the optimistic label was removed.
    RolledBack,
}

/// Attach the query as a new label and create it in the catalog.
///
/// The caller closes the modal regardless of the outcome.
pub async fn submit_label_creation<F, Fut>(
    state: &ManageLabelsState,
    catalog: &LabelCatalog,
    sink: &dyn LabelSelectionSink,
    create: F,
    notifier: &dyn Notifier,
) -> CreateLabelOutcome
where
    F: FnOnce(LabelName, LChColor) -> Fut,
    Fut: Future<Output = Result<(), BackendError>>,
{
    let Some(color) = state.color.filter(|_| state.can_create(catalog)) else {
        return CreateLabelOutcome::Skipped;
    };
    let name = LabelName::new(state.query.as_str());
    let mut labels = state.labels.clone();
    labels.push(name.clone());
    sink.set_labels(labels);
    match create(name.clone(), color).await {
        Ok(()) => CreateLabelOutcome::Created,
        Err(err) => {
            notifier.toast_and_log(None, Some(&err));
            sink.set_labels(
                state
                    .labels
                    .iter()
                    .filter(|label| **label != name)
                    .cloned()
                    .collect(),
            );
            CreateLabelOutcome::RolledBack
        }
    }
}

/// Submit the new-label modal: close it, then create the label.
///
/// Returns whether creation succeeded; failures are reported and the modal
/// stays closed.
pub async fn submit_new_label<C, F, Fut>(
    form: &NewLabelForm,
    existing: &BTreeSet<LabelName>,
    close: C,
    create: F,
    notifier: &dyn Notifier,
) -> bool
where
    C: FnOnce(),
    F: FnOnce(LabelName, LChColor) -> Fut,
    Fut: Future<Output = Result<(), BackendError>>,
{
    if !form.can_submit(existing) {
        return false;
    }
    close();
    let Some(color) = form.color else {
        return false;
    };
    match create(LabelName::new(form.name.as_str()), color).await {
        Ok(()) => true,
        Err(err) => {
            notifier.toast_and_log(None, Some(&err));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notify::testing::RecordingNotifier;
    use crate::features::assets::actions::testing::{Call, FakeBackend};
    use crate::features::labels::state::fixtures::catalog;
    use crate::models::COLORS;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingSelection {
        updates: RefCell<Vec<Vec<LabelName>>>,
    }

    impl LabelSelectionSink for RecordingSelection {
        fn set_labels(&self, labels: Vec<LabelName>) {
            self.updates.borrow_mut().push(labels);
        }
    }

    fn names(values: &[&str]) -> Vec<LabelName> {
        values.iter().copied().map(LabelName::from).collect()
    }

    #[tokio::test]
    async fn toggling_absent_label_sends_appended_list() {
        let backend = FakeBackend::remote();
        let sink = RecordingSelection::default();
        let notifier = RecordingNotifier::default();
        let state = ManageLabelsState::new(&names(&["bug"]));

        let outcome = toggle_label(
            &backend,
            &AssetId::new("p-1"),
            "Notes",
            &state,
            &LabelName::from("docs"),
            &sink,
            &notifier,
        )
        .await;

        assert_eq!(outcome, ToggleOutcome::Added);
        assert_eq!(
            backend.calls(),
            [Call::AssociateTag(AssetId::new("p-1"), names(&["bug", "docs"]))]
        );
        assert_eq!(*sink.updates.borrow(), [names(&["bug", "docs"])]);
    }

    #[tokio::test]
    async fn toggling_present_label_sends_list_without_it() {
        let backend = FakeBackend::remote();
        let sink = RecordingSelection::default();
        let notifier = RecordingNotifier::default();
        let state = ManageLabelsState::new(&names(&["bug", "docs"]));

        let outcome = toggle_label(
            &backend,
            &AssetId::new("p-1"),
            "Notes",
            &state,
            &LabelName::from("bug"),
            &sink,
            &notifier,
        )
        .await;

        assert_eq!(outcome, ToggleOutcome::Removed);
        assert_eq!(
            backend.calls(),
            [Call::AssociateTag(AssetId::new("p-1"), names(&["docs"]))]
        );
    }

    #[tokio::test]
    async fn failed_toggle_restores_previous_list() {
        let backend = FakeBackend::failing();
        let sink = RecordingSelection::default();
        let notifier = RecordingNotifier::default();
        let state = ManageLabelsState::new(&names(&["bug"]));

        let outcome = toggle_label(
            &backend,
            &AssetId::new("p-1"),
            "Notes",
            &state,
            &LabelName::from("docs"),
            &sink,
            &notifier,
        )
        .await;

        assert_eq!(outcome, ToggleOutcome::RolledBack);
        assert_eq!(
            *sink.updates.borrow(),
            [names(&["bug", "docs"]), names(&["bug"])]
        );
        assert_eq!(
            notifier.messages(),
            ["could not set labels: 503 Service Unavailable"]
        );
    }

    #[tokio::test]
    async fn creation_appends_query_and_calls_creator() {
        let catalog = catalog(&["bug", "docs"]);
        let sink = RecordingSelection::default();
        let notifier = RecordingNotifier::default();
        let created = RefCell::new(None);
        let state = ManageLabelsState {
            labels: names(&["bug"]),
            query: "urgent".to_string(),
            color: Some(COLORS[4]),
        };

        let outcome = submit_label_creation(
            &state,
            &catalog,
            &sink,
            |name, color| {
                *created.borrow_mut() = Some((name, color));
                async { Ok(()) }
            },
            &notifier,
        )
        .await;

        assert_eq!(outcome, CreateLabelOutcome::Created);
        assert_eq!(*sink.updates.borrow(), [names(&["bug", "urgent"])]);
        assert_eq!(
            *created.borrow(),
            Some((LabelName::from("urgent"), COLORS[4]))
        );
    }

    #[tokio::test]
    async fn failed_creation_removes_optimistic_label() {
        let catalog = catalog(&["bug"]);
        let sink = RecordingSelection::default();
        let notifier = RecordingNotifier::default();
        let state = ManageLabelsState {
            labels: names(&["bug"]),
            query: "urgent".to_string(),
            color: Some(COLORS[4]),
        };

        let outcome = submit_label_creation(
            &state,
            &catalog,
            &sink,
            |_, _| async { Err(BackendError::request("create label", "409 Conflict")) },
            &notifier,
        )
        .await;

        assert_eq!(outcome, CreateLabelOutcome::RolledBack);
        assert_eq!(
            *sink.updates.borrow(),
            [names(&["bug", "urgent"]), names(&["bug"])]
        );
        assert_eq!(notifier.messages(), ["could not create label: 409 Conflict"]);
    }

    #[tokio::test]
    async fn creation_without_color_is_skipped() {
        let catalog = catalog(&["bug"]);
        let sink = RecordingSelection::default();
        let notifier = RecordingNotifier::default();
        let called = Cell::new(false);
        let state = ManageLabelsState {
            query: "urgent".to_string(),
            ..ManageLabelsState::default()
        };

        let outcome = submit_label_creation(
            &state,
            &catalog,
            &sink,
            |_, _| {
                called.set(true);
                async { Ok(()) }
            },
            &notifier,
        )
        .await;

        assert_eq!(outcome, CreateLabelOutcome::Skipped);
        assert!(!called.get());
        assert!(sink.updates.borrow().is_empty());
    }

    #[tokio::test]
    async fn new_label_closes_before_creating() {
        let order = RefCell::new(Vec::new());
        let notifier = RecordingNotifier::default();
        let form = NewLabelForm {
            name: "urgent".to_string(),
            color: Some(COLORS[0]),
        };

        let created = submit_new_label(
            &form,
            &BTreeSet::new(),
            || order.borrow_mut().push("close"),
            |_, _| {
                order.borrow_mut().push("create");
                async { Err(BackendError::request("create label", "500")) }
            },
            &notifier,
        )
        .await;

        assert!(!created);
        assert_eq!(*order.borrow(), ["close", "create"]);
        assert_eq!(notifier.messages(), ["could not create label: 500"]);
    }

    #[tokio::test]
    async fn new_label_with_taken_name_does_nothing() {
        let closed = Cell::new(false);
        let notifier = RecordingNotifier::default();
        let form = NewLabelForm {
            name: "bug".to_string(),
            color: Some(COLORS[0]),
        };
        let existing: BTreeSet<_> = names(&["bug"]).into_iter().collect();

        let created = submit_new_label(
            &form,
            &existing,
            || closed.set(true),
            |_, _| async { Ok(()) },
            &notifier,
        )
        .await;

        assert!(!created);
        assert!(!closed.get());
    }
}
