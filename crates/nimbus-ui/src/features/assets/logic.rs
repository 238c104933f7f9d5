//! Directory row decisions: click gestures and the rename submit check.

use crate::core::shortcuts::{MouseAction, MouseGesture, ShortcutRegistry};
use crate::features::assets::state::{AssetKey, AssetTree};
use thiserror::Error;

/// Why a new directory title cannot be submitted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NameRejection {
    /// Another directory under the same parent already has this title.
    #[error("a folder named '{0}' already exists here")]
    DuplicateSibling(String),
}

/// Check a proposed title against the row's sibling directories.
///
/// Only directories take part: a file or project may share a directory's name.
///
/// # Errors
/// Returns [`NameRejection::DuplicateSibling`] when another sibling directory
/// already uses `new_title`.
pub fn check_directory_title(
    tree: &AssetTree,
    key: &AssetKey,
    new_title: &str,
) -> Result<(), NameRejection> {
    let clash = tree.siblings(key).into_iter().any(|sibling| {
        &sibling.key != key && sibling.item.is_directory() && sibling.item.title == new_title
    });
    if clash {
        Err(NameRejection::DuplicateSibling(new_title.to_string()))
    } else {
        Ok(())
    }
}

/// What a click on a directory row should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowClickOutcome {
    /// Enter name editing.
    BeginEditing,
    /// Toggle expansion now and deselect the row on the next tick.
    ToggleExpansionAndDeselect,
    /// Leave the click to the default selection handling.
    Ignore,
}

/// Selection facts about the clicked row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSelection {
    /// Whether the row is selected.
    pub selected: bool,
    /// Number of rows selected in the table.
    pub selected_count: usize,
    /// Whether the row is currently being renamed.
    pub is_editing_name: bool,
}

/// Resolve a click on a directory row.
#[must_use]
pub fn resolve_row_click(
    gesture: &MouseGesture,
    selection: RowSelection,
    shortcuts: &ShortcutRegistry,
) -> RowClickOutcome {
    if gesture.is_single_click()
        && ((selection.selected && selection.selected_count == 1)
            || shortcuts.matches_mouse_action(MouseAction::EditName, gesture))
    {
        RowClickOutcome::BeginEditing
    } else if gesture.is_double_click() && !selection.is_editing_name {
        RowClickOutcome::ToggleExpansionAndDeselect
    } else {
        RowClickOutcome::Ignore
    }
}
