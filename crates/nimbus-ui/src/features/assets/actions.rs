//! Directory row side effects: rename and placeholder creation.
//!
//! # Design
//! - Each flow is two-phase: apply the tentative state through the row sink,
//!   call the backend, and restore what it changed on failure.
//! - Row updates touch only the fields a flow owns, so label edits that land
//!   while a request is in flight are kept.
//! - Failures are reported through the notifier and never propagate.

use crate::core::backend::Backend;
use crate::core::events::{AssetEvent, AssetListEvent};
use crate::core::notify::Notifier;
use crate::features::assets::state::{AssetKey, Visibility};
use crate::models::{
    Asset, AssetId, BackendType, CreateDirectoryRequest, CreatedDirectory, UpdateDirectoryRequest,
};

/// Narrow mutation interface a row uses to change its own state.
pub trait AssetRowSink {
    /// Apply `update` to the row's current asset.
    fn update_asset(&self, update: Box<dyn FnOnce(&mut Asset)>);
    /// Change the row's visibility.
    fn set_visibility(&self, visibility: Visibility);
    /// Ask the list to change its structure.
    fn dispatch_list_event(&self, event: AssetListEvent);
}

/// Result of submitting a new directory title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The title did not change; nothing was sent.
    Unchanged,
    /// The new title was kept.
    Renamed,
    /// The backend rejected the rename and the previous title was restored.
    RolledBack,
}

/// Rename a directory optimistically, reverting on backend failure.
///
/// Local backends have no directories to rename, so the new title is kept
/// without a backend call.
pub async fn rename_directory<B: Backend + ?Sized>(
    backend: &B,
    row: &dyn AssetRowSink,
    asset: &Asset,
    new_title: &str,
    notifier: &dyn Notifier,
) -> RenameOutcome {
    if new_title == asset.title {
        return RenameOutcome::Unchanged;
    }
    let title = new_title.to_string();
    row.update_asset(Box::new(move |item| item.title = title));
    if backend.backend_type() == BackendType::Local {
        return RenameOutcome::Renamed;
    }
    let body = UpdateDirectoryRequest {
        title: new_title.to_string(),
    };
    match backend.update_directory(&asset.id, body, &asset.title).await {
        Ok(_) => RenameOutcome::Renamed,
        Err(err) => {
            notifier.toast_and_log(Some("Could not rename folder"), Some(&err));
            let previous = asset.title.clone();
            row.update_asset(Box::new(move |item| item.title = previous));
            RenameOutcome::RolledBack
        }
    }
}

/// Result of handling an [`AssetEvent`] on a directory row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NewFolderOutcome {
    /// The event targets another row.
    NotTargeted,
    /// Folders cannot be created on the local drive.
    LocalUnsupported,
    /// The directory was created and the placeholder now carries its fields.
    Created(CreatedDirectory),
    /// Creation failed and the placeholder row was deleted.
    Failed,
}

/// Persist a placeholder directory row when a new-folder event targets it.
pub async fn handle_asset_event<B: Backend + ?Sized>(
    backend: &B,
    row: &dyn AssetRowSink,
    key: &AssetKey,
    asset: &Asset,
    event: &AssetEvent,
    notifier: &dyn Notifier,
) -> NewFolderOutcome {
    match event {
        AssetEvent::NewFolder { placeholder_id } => {
            if placeholder_id != key {
                return NewFolderOutcome::NotTargeted;
            }
            if backend.backend_type() != BackendType::Remote {
                notifier.toast_and_log(Some("Cannot create folders on the local drive"), None);
                return NewFolderOutcome::LocalUnsupported;
            }
            row.set_visibility(Visibility::Faded);
            let body = CreateDirectoryRequest {
                parent_id: Some(asset.parent_id.clone()).filter(|id| !id.as_str().is_empty()),
                title: asset.title.clone(),
            };
            match backend.create_directory(body).await {
                Ok(created) => {
                    row.set_visibility(Visibility::Visible);
                    let fields = created.clone();
                    row.update_asset(Box::new(move |item| {
                        item.id = fields.id;
                        item.parent_id = fields.parent_id;
                        item.title = fields.title;
                    }));
                    NewFolderOutcome::Created(created)
                }
                Err(err) => {
                    row.dispatch_list_event(AssetListEvent::Delete { key: key.clone() });
                    notifier.toast_and_log(Some("Could not create new folder"), Some(&err));
                    NewFolderOutcome::Failed
                }
            }
        }
    }
}

/// List a directory's children (the root when `parent_id` is `None`).
///
/// Failures are reported and yield `None`.
pub async fn list_children<B: Backend + ?Sized>(
    backend: &B,
    parent_id: Option<&AssetId>,
    notifier: &dyn Notifier,
) -> Option<Vec<Asset>> {
    match backend.list_directory(parent_id).await {
        Ok(assets) => Some(assets),
        Err(err) => {
            notifier.toast_and_log(Some("Could not list folder"), Some(&err));
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::core::backend::{Backend, BackendError};
    use crate::models::{
        Asset, AssetId, BackendType, CreateDirectoryRequest, CreateProjectRequest,
        CreateTagRequest, CreatedDirectory, Label, LabelName, UpdateDirectoryRequest,
        UpdatedDirectory,
    };
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Call made against [`FakeBackend`].
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub(crate) enum Call {
        CreateDirectory(CreateDirectoryRequest),
        UpdateDirectory(AssetId, String),
        AssociateTag(AssetId, Vec<LabelName>),
        CreateTag(String),
    }

    /// Scriptable backend that records calls and fails on demand.
    pub(crate) struct FakeBackend {
        pub(crate) kind: BackendType,
        pub(crate) fail: bool,
        pub(crate) calls: RefCell<Vec<Call>>,
        /// Runs once while a rename request is outstanding.
        pub(crate) in_flight: RefCell<Option<Box<dyn FnOnce()>>>,
    }

    impl FakeBackend {
        pub(crate) fn remote() -> Self {
            Self {
                kind: BackendType::Remote,
                fail: false,
                calls: RefCell::new(Vec::new()),
                in_flight: RefCell::new(None),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                fail: true,
                ..Self::remote()
            }
        }

        pub(crate) fn local() -> Self {
            Self {
                kind: BackendType::Local,
                ..Self::remote()
            }
        }

        pub(crate) fn during_rename(self, hook: impl FnOnce() + 'static) -> Self {
            *self.in_flight.borrow_mut() = Some(Box::new(hook));
            self
        }

        pub(crate) fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn outcome<T>(&self, operation: &str, value: T) -> Result<T, BackendError> {
            if self.fail {
                Err(BackendError::request(operation, "503 Service Unavailable"))
            } else {
                Ok(value)
            }
        }
    }

    #[async_trait(?Send)]
    impl Backend for FakeBackend {
        fn backend_type(&self) -> BackendType {
            self.kind
        }

        async fn list_directory(
            &self,
            _parent_id: Option<&AssetId>,
        ) -> Result<Vec<Asset>, BackendError> {
            self.outcome("list directory", Vec::new())
        }

        async fn create_directory(
            &self,
            body: CreateDirectoryRequest,
        ) -> Result<CreatedDirectory, BackendError> {
            self.calls
                .borrow_mut()
                .push(Call::CreateDirectory(body.clone()));
            self.outcome(
                "create directory",
                CreatedDirectory {
                    id: AssetId::new("directory-42"),
                    parent_id: body.parent_id.unwrap_or_else(|| AssetId::new("root")),
                    title: body.title,
                },
            )
        }

        async fn update_directory(
            &self,
            id: &AssetId,
            body: UpdateDirectoryRequest,
            _previous_title: &str,
        ) -> Result<UpdatedDirectory, BackendError> {
            self.calls
                .borrow_mut()
                .push(Call::UpdateDirectory(id.clone(), body.title.clone()));
            let hook = self.in_flight.borrow_mut().take();
            if let Some(hook) = hook {
                hook();
            }
            self.outcome(
                "rename directory",
                UpdatedDirectory {
                    id: id.clone(),
                    parent_id: AssetId::new("root"),
                    title: body.title,
                },
            )
        }

        async fn associate_tag(
            &self,
            id: &AssetId,
            labels: &[LabelName],
            _title: &str,
        ) -> Result<(), BackendError> {
            self.calls
                .borrow_mut()
                .push(Call::AssociateTag(id.clone(), labels.to_vec()));
            self.outcome("set labels", ())
        }

        async fn list_tags(&self) -> Result<Vec<Label>, BackendError> {
            self.outcome("list labels", Vec::new())
        }

        async fn create_tag(&self, body: CreateTagRequest) -> Result<Label, BackendError> {
            self.calls
                .borrow_mut()
                .push(Call::CreateTag(body.value.as_str().to_string()));
            self.outcome(
                "create label",
                Label {
                    id: crate::models::LabelId(format!("tag-{}", body.value)),
                    value: body.value,
                    color: body.color,
                },
            )
        }

        async fn create_project(&self, body: CreateProjectRequest) -> Result<Asset, BackendError> {
            self.outcome(
                "create project",
                Asset {
                    id: AssetId::new("project-7"),
                    kind: crate::models::AssetType::Project,
                    title: body.name,
                    parent_id: body.parent_id.unwrap_or_else(|| AssetId::new("root")),
                    labels: None,
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{Call, FakeBackend};
    use super::*;
    use crate::core::notify::testing::RecordingNotifier;
    use crate::features::assets::state::fixtures::directory;
    use crate::models::{AssetId, LabelName};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingRow {
        asset: RefCell<Asset>,
        titles: RefCell<Vec<String>>,
        visibility: RefCell<Vec<Visibility>>,
        list_events: RefCell<Vec<AssetListEvent>>,
    }

    impl AssetRowSink for RecordingRow {
        fn update_asset(&self, update: Box<dyn FnOnce(&mut Asset)>) {
            let mut asset = self.asset.borrow_mut();
            update(&mut *asset);
            self.titles.borrow_mut().push(asset.title.clone());
        }

        fn set_visibility(&self, visibility: Visibility) {
            self.visibility.borrow_mut().push(visibility);
        }

        fn dispatch_list_event(&self, event: AssetListEvent) {
            self.list_events.borrow_mut().push(event);
        }
    }

    impl RecordingRow {
        fn holding(asset: &Asset) -> Self {
            Self {
                asset: RefCell::new(asset.clone()),
                titles: RefCell::new(Vec::new()),
                visibility: RefCell::new(Vec::new()),
                list_events: RefCell::new(Vec::new()),
            }
        }

        fn titles(&self) -> Vec<String> {
            self.titles.borrow().clone()
        }

        fn current(&self) -> Asset {
            self.asset.borrow().clone()
        }
    }

    #[tokio::test]
    async fn unchanged_title_skips_backend() {
        let backend = FakeBackend::remote();
        let notifier = RecordingNotifier::default();
        let asset = directory("d-reports", "Reports");
        let row = RecordingRow::holding(&asset);

        let outcome = rename_directory(&backend, &row, &asset, "Reports", &notifier).await;

        assert_eq!(outcome, RenameOutcome::Unchanged);
        assert!(backend.calls().is_empty());
        assert!(row.titles().is_empty());
    }

    #[tokio::test]
    async fn rename_applies_title_before_backend_confirms() {
        let backend = FakeBackend::remote();
        let notifier = RecordingNotifier::default();
        let asset = directory("d-reports", "Reports");
        let row = RecordingRow::holding(&asset);

        let outcome = rename_directory(&backend, &row, &asset, "Archive", &notifier).await;

        assert_eq!(outcome, RenameOutcome::Renamed);
        assert_eq!(row.titles(), ["Archive"]);
        assert_eq!(
            backend.calls(),
            [Call::UpdateDirectory(
                AssetId::new("d-reports"),
                "Archive".to_string()
            )]
        );
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn failed_rename_restores_previous_title() {
        let backend = FakeBackend::failing();
        let notifier = RecordingNotifier::default();
        let asset = directory("d-reports", "Reports");
        let row = RecordingRow::holding(&asset);

        let outcome = rename_directory(&backend, &row, &asset, "Archive", &notifier).await;

        assert_eq!(outcome, RenameOutcome::RolledBack);
        assert_eq!(row.titles(), ["Archive", "Reports"]);
        assert_eq!(
            notifier.messages(),
            ["Could not rename folder: could not rename directory: 503 Service Unavailable"]
        );
    }

    #[tokio::test]
    async fn failed_rename_keeps_labels_set_while_in_flight() {
        let asset = directory("d-reports", "Reports");
        let row = Rc::new(RecordingRow::holding(&asset));
        let notifier = RecordingNotifier::default();
        let labeller = Rc::clone(&row);
        let backend = FakeBackend::failing().during_rename(move || {
            labeller.update_asset(Box::new(|item| {
                item.labels = Some(vec![LabelName::new("bug")]);
            }));
        });

        let outcome = rename_directory(&backend, row.as_ref(), &asset, "Archive", &notifier).await;

        assert_eq!(outcome, RenameOutcome::RolledBack);
        let current = row.current();
        assert_eq!(current.title, "Reports");
        assert_eq!(current.labels, Some(vec![LabelName::new("bug")]));
    }

    #[tokio::test]
    async fn placeholder_labels_survive_creation() {
        let backend = FakeBackend::remote();
        let notifier = RecordingNotifier::default();
        let key = AssetKey("placeholder-1".to_string());
        let asset = directory("placeholder-1", "New_Folder_1");
        let row = RecordingRow::holding(&asset);
        row.update_asset(Box::new(|item| {
            item.labels = Some(vec![LabelName::new("draft")]);
        }));
        let event = AssetEvent::NewFolder {
            placeholder_id: key.clone(),
        };

        handle_asset_event(&backend, &row, &key, &asset, &event, &notifier).await;

        let current = row.current();
        assert_eq!(current.id, AssetId::new("directory-42"));
        assert_eq!(current.labels, Some(vec![LabelName::new("draft")]));
    }

    #[tokio::test]
    async fn local_rename_is_a_successful_no_op() {
        let backend = FakeBackend::local();
        let notifier = RecordingNotifier::default();
        let asset = directory("d-reports", "Reports");
        let row = RecordingRow::holding(&asset);

        let outcome = rename_directory(&backend, &row, &asset, "Archive", &notifier).await;

        assert_eq!(outcome, RenameOutcome::Renamed);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn new_folder_for_other_row_is_ignored() {
        let backend = FakeBackend::remote();
        let notifier = RecordingNotifier::default();
        let asset = directory("placeholder-1", "New_Folder_1");
        let row = RecordingRow::holding(&asset);
        let event = AssetEvent::NewFolder {
            placeholder_id: AssetKey("placeholder-2".to_string()),
        };

        let outcome = handle_asset_event(
            &backend,
            &row,
            &AssetKey("placeholder-1".to_string()),
            &asset,
            &event,
            &notifier,
        )
        .await;

        assert_eq!(outcome, NewFolderOutcome::NotTargeted);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn new_folder_fades_then_adopts_server_fields() {
        let backend = FakeBackend::remote();
        let notifier = RecordingNotifier::default();
        let key = AssetKey("placeholder-1".to_string());
        let asset = directory("placeholder-1", "New_Folder_1");
        let row = RecordingRow::holding(&asset);
        let event = AssetEvent::NewFolder {
            placeholder_id: key.clone(),
        };

        let outcome = handle_asset_event(&backend, &row, &key, &asset, &event, &notifier).await;

        assert!(matches!(outcome, NewFolderOutcome::Created(_)));
        assert_eq!(
            *row.visibility.borrow(),
            [Visibility::Faded, Visibility::Visible]
        );
        let current = row.current();
        assert_eq!(current.id, AssetId::new("directory-42"));
        assert_eq!(current.parent_id, AssetId::new("root"));
        assert_eq!(current.title, "New_Folder_1");
    }

    #[tokio::test]
    async fn top_level_placeholder_is_created_without_parent() {
        let backend = FakeBackend::remote();
        let notifier = RecordingNotifier::default();
        let key = AssetKey("placeholder-1".to_string());
        let asset = Asset {
            parent_id: AssetId::new(""),
            ..directory("placeholder-1", "New_Folder_1")
        };
        let row = RecordingRow::holding(&asset);
        let event = AssetEvent::NewFolder {
            placeholder_id: key.clone(),
        };

        handle_asset_event(&backend, &row, &key, &asset, &event, &notifier).await;

        assert_eq!(
            backend.calls(),
            [Call::CreateDirectory(CreateDirectoryRequest {
                parent_id: None,
                title: "New_Folder_1".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn failed_creation_deletes_placeholder() {
        let backend = FakeBackend::failing();
        let notifier = RecordingNotifier::default();
        let key = AssetKey("placeholder-1".to_string());
        let asset = directory("placeholder-1", "New_Folder_1");
        let row = RecordingRow::holding(&asset);
        let event = AssetEvent::NewFolder {
            placeholder_id: key.clone(),
        };

        let outcome = handle_asset_event(&backend, &row, &key, &asset, &event, &notifier).await;

        assert_eq!(outcome, NewFolderOutcome::Failed);
        assert_eq!(
            *row.list_events.borrow(),
            [AssetListEvent::Delete { key }]
        );
        assert_eq!(notifier.messages().len(), 1);
        assert!(row.titles().is_empty());
    }

    #[tokio::test]
    async fn local_backend_cannot_create_folders() {
        let backend = FakeBackend::local();
        let notifier = RecordingNotifier::default();
        let key = AssetKey("placeholder-1".to_string());
        let asset = directory("placeholder-1", "New_Folder_1");
        let row = RecordingRow::holding(&asset);
        let event = AssetEvent::NewFolder {
            placeholder_id: key.clone(),
        };

        let outcome = handle_asset_event(&backend, &row, &key, &asset, &event, &notifier).await;

        assert_eq!(outcome, NewFolderOutcome::LocalUnsupported);
        assert_eq!(
            notifier.messages(),
            ["Cannot create folders on the local drive"]
        );
        assert!(row.visibility.borrow().is_empty());
    }

    #[tokio::test]
    async fn listing_failure_is_reported() {
        let notifier = RecordingNotifier::default();
        let listed = list_children(&FakeBackend::failing(), None, &notifier).await;
        assert!(listed.is_none());
        assert_eq!(
            notifier.messages(),
            ["Could not list folder: could not list directory: 503 Service Unavailable"]
        );
        let listed = list_children(&FakeBackend::remote(), Some(&AssetId::new("d-1")), &notifier).await;
        assert_eq!(listed, Some(Vec::new()));
    }
}
