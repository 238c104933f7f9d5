//! Project creation from the samples gallery.

use crate::core::backend::Backend;
use crate::core::notify::Notifier;
use crate::features::samples::state::{SpinnerState, TemplateChoice};
use crate::models::{Asset, AssetId, CreateProjectRequest};

const BLANK_PROJECT_BASE: &str = "New_Project";

/// First `<base>_<n>` name not taken by `titles`, where the base is the
/// template id or `New_Project`.
#[must_use]
pub fn next_project_name<'a>(
    choice: TemplateChoice,
    titles: impl IntoIterator<Item = &'a str>,
) -> String {
    let base = choice.template_id().unwrap_or(BLANK_PROJECT_BASE);
    let prefix = format!("{base}_");
    let highest = titles
        .into_iter()
        .filter_map(|title| title.strip_prefix(prefix.as_str())?.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{}", highest + 1)
}

/// Create a project and report spinner progress through `report`.
///
/// The spinner goes `Active` then `Done` on success; on failure it is cleared
/// and the error is toasted.
pub async fn create_project<B: Backend + ?Sized>(
    backend: &B,
    choice: TemplateChoice,
    name: String,
    parent_id: Option<AssetId>,
    report: &dyn Fn(Option<SpinnerState>),
    notifier: &dyn Notifier,
) -> Option<Asset> {
    report(Some(SpinnerState::Active));
    let body = CreateProjectRequest {
        name,
        template_id: choice.template_id().map(str::to_string),
        parent_id,
    };
    match backend.create_project(body).await {
        Ok(project) => {
            report(Some(SpinnerState::Done));
            Some(project)
        }
        Err(err) => {
            report(None);
            notifier.toast_and_log(Some("Could not create project"), Some(&err));
            None
        }
    }
}
