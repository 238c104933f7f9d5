//! Asset tree state owned by the dashboard shell.
//!
//! # Design
//! - Nodes are keyed by a client-side [`AssetKey`] so placeholder rows can
//!   exist before the server assigns an id.
//! - `children == None` means the directory has not been listed yet.
//! - Rows never hold references into the tree; they receive copies and mutate
//!   through sinks that dispatch back into the store.

use crate::models::{Asset, AssetId, AssetType};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;
use uuid::Uuid;

/// Prefix of generated placeholder folder titles.
pub const NEW_FOLDER_PREFIX: &str = "New_Folder_";

static NEW_FOLDER_TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!("^{NEW_FOLDER_PREFIX}(\\d+)$")).ok());

/// Client-side row key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetKey(pub String);

impl AssetKey {
    /// Key for a row backed by a persisted asset.
    #[must_use]
    pub fn for_asset(id: &AssetId) -> Self {
        Self(id.as_str().to_string())
    }

    /// Fresh key for a placeholder row.
    #[must_use]
    pub fn placeholder() -> Self {
        Self(format!("placeholder-{}", Uuid::new_v4()))
    }

    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Row visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Rendered normally.
    #[default]
    Visible,
    /// Rendered dimmed while a backend call is pending.
    Faded,
    /// Not rendered.
    Hidden,
}

impl Visibility {
    /// CSS class applied to the row.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Visible => "",
            Self::Faded => "opacity-50 pointer-events-none",
            Self::Hidden => "hidden",
        }
    }
}

/// Transient per-row UI state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowState {
    /// Whether the title is being edited inline.
    pub is_editing_name: bool,
    /// Row visibility.
    pub visibility: Visibility,
}

/// Result of toggling a directory's expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpansionOutcome {
    /// The subtree was hidden.
    Collapsed,
    /// The subtree was shown from already-listed children.
    Expanded,
    /// The directory was marked expanded but its children must be listed.
    NeedsListing,
    /// The key does not name a directory row.
    NotADirectory,
}

/// A row of the asset tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetNode {
    /// Row key.
    pub key: AssetKey,
    /// Asset shown by the row.
    pub item: Asset,
    /// Key of the containing directory row; `None` at top level.
    pub directory_key: Option<AssetKey>,
    /// Nesting depth, 0 at top level.
    pub depth: u32,
    /// Listed children, `None` until listed.
    pub children: Option<Vec<AssetKey>>,
    /// Whether the children are shown.
    pub expanded: bool,
    /// Transient row state.
    pub row: RowState,
}

/// Ancestor-owned asset tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetTree {
    nodes: BTreeMap<AssetKey, AssetNode>,
    top_level: Vec<AssetKey>,
    selected: BTreeSet<AssetKey>,
}

impl AssetTree {
    /// Replace the tree with a freshly listed root directory.
    pub fn reset(&mut self, assets: Vec<Asset>) {
        self.nodes.clear();
        self.selected.clear();
        self.top_level = self.insert_nodes(None, 0, assets);
    }

    /// Top-level rows in display order, hidden ones included.
    #[must_use]
    pub fn top_level_rows(&self) -> Vec<&AssetNode> {
        self.top_level
            .iter()
            .filter_map(|key| self.nodes.get(key))
            .collect()
    }

    /// Look up a row.
    #[must_use]
    pub fn get(&self, key: &AssetKey) -> Option<&AssetNode> {
        self.nodes.get(key)
    }

    /// Number of rows in the tree, including collapsed ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Rows in display order, skipping collapsed subtrees and hidden rows.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&AssetNode> {
        let mut rows = Vec::with_capacity(self.nodes.len());
        self.collect_visible(&self.top_level, &mut rows);
        rows
    }

    fn collect_visible<'a>(&'a self, keys: &[AssetKey], rows: &mut Vec<&'a AssetNode>) {
        for key in keys {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            if node.row.visibility == Visibility::Hidden {
                continue;
            }
            rows.push(node);
            if node.expanded {
                if let Some(children) = &node.children {
                    self.collect_visible(children, rows);
                }
            }
        }
    }

    /// Sibling rows of `key` (including the row itself).
    #[must_use]
    pub fn siblings(&self, key: &AssetKey) -> Vec<&AssetNode> {
        let Some(node) = self.nodes.get(key) else {
            return Vec::new();
        };
        let keys = match &node.directory_key {
            Some(parent) => self
                .nodes
                .get(parent)
                .and_then(|parent| parent.children.as_deref())
                .unwrap_or_default(),
            None => self.top_level.as_slice(),
        };
        keys.iter().filter_map(|key| self.nodes.get(key)).collect()
    }

    /// Store the listing of a directory, keeping its expansion flag.
    pub fn insert_children(&mut self, parent: &AssetKey, assets: Vec<Asset>) {
        let Some(depth) = self.nodes.get(parent).map(|node| node.depth + 1) else {
            return;
        };
        let previous = self
            .nodes
            .get(parent)
            .and_then(|node| node.children.clone())
            .unwrap_or_default();
        for key in &previous {
            self.remove_subtree(key);
        }
        let children = self.insert_nodes(Some(parent), depth, assets);
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children = Some(children);
        }
    }

    /// Hide a directory's children.
    pub fn collapse(&mut self, key: &AssetKey) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.expanded = false;
        }
    }

    /// Toggle a directory's expansion.
    pub fn toggle_expansion(&mut self, key: &AssetKey) -> ExpansionOutcome {
        let Some(node) = self.nodes.get_mut(key) else {
            return ExpansionOutcome::NotADirectory;
        };
        if !node.item.is_directory() {
            return ExpansionOutcome::NotADirectory;
        }
        if node.expanded {
            node.expanded = false;
            return ExpansionOutcome::Collapsed;
        }
        node.expanded = true;
        if node.children.is_some() {
            ExpansionOutcome::Expanded
        } else {
            ExpansionOutcome::NeedsListing
        }
    }

    /// Next free `New_Folder_<n>` title among the children of `parent`.
    #[must_use]
    pub fn next_folder_title(&self, parent: Option<&AssetKey>) -> String {
        let keys = match parent {
            Some(parent) => self
                .nodes
                .get(parent)
                .and_then(|node| node.children.as_deref())
                .unwrap_or_default(),
            None => self.top_level.as_slice(),
        };
        let highest = keys
            .iter()
            .filter_map(|key| self.nodes.get(key))
            .filter(|node| node.item.is_directory())
            .filter_map(|node| {
                NEW_FOLDER_TITLE
                    .as_ref()?
                    .captures(&node.item.title)?
                    .get(1)?
                    .as_str()
                    .parse::<u64>()
                    .ok()
            })
            .max()
            .unwrap_or(0);
        format!("{NEW_FOLDER_PREFIX}{}", highest + 1)
    }

    /// Insert a placeholder directory as the first child of `parent` (or at
    /// top level) and return its key.
    pub fn insert_placeholder_directory(&mut self, parent: Option<&AssetKey>) -> AssetKey {
        let title = self.next_folder_title(parent);
        let key = AssetKey::placeholder();
        let (parent_id, depth) = match parent.and_then(|parent| self.nodes.get(parent)) {
            Some(node) => (node.item.id.clone(), node.depth + 1),
            None => (AssetId::new(""), 0),
        };
        let node = AssetNode {
            key: key.clone(),
            item: Asset {
                id: AssetId::new(key.as_str()),
                kind: AssetType::Directory,
                title,
                parent_id,
                labels: None,
            },
            directory_key: parent.cloned().filter(|_| depth > 0),
            depth,
            children: Some(Vec::new()),
            expanded: false,
            row: RowState::default(),
        };
        self.nodes.insert(key.clone(), node);
        match parent.and_then(|parent| self.nodes.get_mut(parent)) {
            Some(parent_node) => {
                parent_node.expanded = true;
                parent_node
                    .children
                    .get_or_insert_with(Vec::new)
                    .insert(0, key.clone());
            }
            None => self.top_level.insert(0, key.clone()),
        }
        key
    }

    /// Insert an asset at top level, ahead of existing rows.
    pub fn insert_top_level(&mut self, asset: Asset) -> AssetKey {
        let key = AssetKey::for_asset(&asset.id);
        let mut inserted = self.insert_nodes(None, 0, vec![asset]);
        self.top_level.splice(0..0, inserted.drain(..));
        key
    }

    /// Apply `update` to a row's asset.
    pub fn update_asset(&mut self, key: &AssetKey, update: impl FnOnce(&mut Asset)) {
        if let Some(node) = self.nodes.get_mut(key) {
            update(&mut node.item);
        }
    }

    /// Apply `update` to a row's transient state.
    pub fn update_row(&mut self, key: &AssetKey, update: impl FnOnce(&mut RowState)) {
        if let Some(node) = self.nodes.get_mut(key) {
            update(&mut node.row);
        }
    }

    /// Remove a row and its subtree.
    pub fn remove(&mut self, key: &AssetKey) {
        let parent = self
            .nodes
            .get(key)
            .and_then(|node| node.directory_key.clone());
        match parent.and_then(|parent| self.nodes.get_mut(&parent)) {
            Some(parent_node) => {
                if let Some(children) = parent_node.children.as_mut() {
                    children.retain(|child| child != key);
                }
            }
            None => self.top_level.retain(|child| child != key),
        }
        self.remove_subtree(key);
    }

    /// Mark a row selected or not.
    pub fn set_selected(&mut self, key: &AssetKey, selected: bool) {
        if selected {
            if self.nodes.contains_key(key) {
                self.selected.insert(key.clone());
            }
        } else {
            self.selected.remove(key);
        }
    }

    /// Make `key` the only selected row.
    pub fn select_only(&mut self, key: &AssetKey) {
        self.selected.clear();
        self.set_selected(key, true);
    }

    /// Whether a row is selected.
    #[must_use]
    pub fn is_selected(&self, key: &AssetKey) -> bool {
        self.selected.contains(key)
    }

    /// Number of selected rows.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    fn insert_nodes(
        &mut self,
        parent: Option<&AssetKey>,
        depth: u32,
        assets: Vec<Asset>,
    ) -> Vec<AssetKey> {
        assets
            .into_iter()
            .map(|asset| {
                let key = AssetKey::for_asset(&asset.id);
                let children = if asset.is_directory() {
                    None
                } else {
                    Some(Vec::new())
                };
                self.nodes.insert(
                    key.clone(),
                    AssetNode {
                        key: key.clone(),
                        item: asset,
                        directory_key: parent.cloned(),
                        depth,
                        children,
                        expanded: false,
                        row: RowState::default(),
                    },
                );
                key
            })
            .collect()
    }

    fn remove_subtree(&mut self, key: &AssetKey) {
        self.selected.remove(key);
        if let Some(node) = self.nodes.remove(key) {
            for child in node.children.unwrap_or_default() {
                self.remove_subtree(&child);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Asset, AssetId, AssetType};

    pub(crate) fn directory(id: &str, title: &str) -> Asset {
        Asset {
            id: AssetId::new(id),
            kind: AssetType::Directory,
            title: title.to_string(),
            parent_id: AssetId::new("root"),
            labels: None,
        }
    }

    pub(crate) fn project(id: &str, title: &str) -> Asset {
        Asset {
            kind: AssetType::Project,
            ..directory(id, title)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{directory, project};
    use super::*;

    fn key(id: &str) -> AssetKey {
        AssetKey(id.to_string())
    }

    fn sample_tree() -> AssetTree {
        let mut tree = AssetTree::default();
        tree.reset(
            vec![
                directory("d-reports", "Reports"),
                directory("d-data", "Data"),
                project("p-sales", "Sales"),
            ],
        );
        tree
    }

    #[test]
    fn collapsed_directories_hide_children() {
        let mut tree = sample_tree();
        tree.toggle_expansion(&key("d-reports"));
        tree.insert_children(&key("d-reports"), vec![directory("d-q1", "Q1")]);
        let titles: Vec<_> = tree
            .visible_rows()
            .iter()
            .map(|node| node.item.title.as_str())
            .collect();
        assert_eq!(titles, ["Reports", "Q1", "Data", "Sales"]);

        assert_eq!(
            tree.toggle_expansion(&key("d-reports")),
            ExpansionOutcome::Collapsed
        );
        assert_eq!(tree.visible_rows().len(), 3);
        assert_eq!(
            tree.toggle_expansion(&key("d-reports")),
            ExpansionOutcome::Expanded
        );
    }

    #[test]
    fn unlisted_directory_needs_listing() {
        let mut tree = sample_tree();
        assert_eq!(
            tree.toggle_expansion(&key("d-data")),
            ExpansionOutcome::NeedsListing
        );
        assert_eq!(
            tree.toggle_expansion(&key("p-sales")),
            ExpansionOutcome::NotADirectory
        );
    }

    #[test]
    fn listing_arriving_after_collapse_stays_collapsed() {
        let mut tree = sample_tree();
        assert_eq!(
            tree.toggle_expansion(&key("d-reports")),
            ExpansionOutcome::NeedsListing
        );
        assert_eq!(
            tree.toggle_expansion(&key("d-reports")),
            ExpansionOutcome::Collapsed
        );
        tree.insert_children(&key("d-reports"), vec![directory("d-q1", "Q1")]);

        let node = tree.get(&key("d-reports")).expect("directory listed");
        assert!(!node.expanded);
        assert_eq!(node.children.as_ref().map(Vec::len), Some(1));
        assert_eq!(tree.visible_rows().len(), 3);
        assert_eq!(
            tree.toggle_expansion(&key("d-reports")),
            ExpansionOutcome::Expanded
        );
        assert_eq!(tree.visible_rows().len(), 4);
    }

    #[test]
    fn collapse_hides_a_directory_without_toggling() {
        let mut tree = sample_tree();
        tree.toggle_expansion(&key("d-data"));
        tree.collapse(&key("d-data"));
        tree.collapse(&key("d-data"));
        assert_eq!(tree.get(&key("d-data")).map(|node| node.expanded), Some(false));
    }

    #[test]
    fn top_level_placeholders_have_no_parent_id() {
        let mut tree = sample_tree();
        let placeholder = tree.insert_placeholder_directory(None);
        let node = tree.get(&placeholder).expect("placeholder inserted");
        assert!(node.item.parent_id.as_str().is_empty());
        assert_eq!(node.depth, 0);
    }

    #[test]
    fn siblings_come_from_parent_listing() {
        let mut tree = sample_tree();
        tree.insert_children(
            &key("d-reports"),
            vec![directory("d-q1", "Q1"), directory("d-q2", "Q2")],
        );
        let siblings: Vec<_> = tree
            .siblings(&key("d-q1"))
            .iter()
            .map(|node| node.item.title.clone())
            .collect();
        assert_eq!(siblings, ["Q1", "Q2"]);
        assert_eq!(tree.siblings(&key("d-data")).len(), 3);
        assert_eq!(tree.get(&key("d-q2")).map(|node| node.depth), Some(1));
    }

    #[test]
    fn placeholder_titles_count_up() {
        let mut tree = sample_tree();
        let first = tree.insert_placeholder_directory(None);
        assert_eq!(tree.get(&first).map(|n| n.item.title.as_str()), Some("New_Folder_1"));
        assert!(first.as_str().starts_with("placeholder-"));
        assert_eq!(tree.next_folder_title(None), "New_Folder_2");

        let nested = tree.insert_placeholder_directory(Some(&key("d-data")));
        let node = tree.get(&nested).expect("placeholder inserted");
        assert_eq!(node.depth, 1);
        assert_eq!(node.item.parent_id, AssetId::new("d-data"));
        assert_eq!(node.item.title, "New_Folder_1");
    }

    #[test]
    fn new_projects_lead_the_top_level() {
        let mut tree = sample_tree();
        let key = tree.insert_top_level(project("p-new", "KMeans_1"));
        let titles: Vec<_> = tree
            .top_level_rows()
            .iter()
            .map(|node| node.item.title.as_str())
            .collect();
        assert_eq!(titles, ["KMeans_1", "Reports", "Data", "Sales"]);
        assert_eq!(tree.get(&key).map(|node| node.depth), Some(0));
    }

    #[test]
    fn remove_drops_subtree_and_selection() {
        let mut tree = sample_tree();
        tree.insert_children(&key("d-reports"), vec![directory("d-q1", "Q1")]);
        tree.set_selected(&key("d-q1"), true);
        tree.remove(&key("d-reports"));
        assert!(tree.get(&key("d-q1")).is_none());
        assert_eq!(tree.selected_count(), 0);
        assert_eq!(tree.visible_rows().len(), 2);
    }

    #[test]
    fn select_only_replaces_selection() {
        let mut tree = sample_tree();
        tree.set_selected(&key("d-reports"), true);
        tree.set_selected(&key("d-data"), true);
        tree.select_only(&key("p-sales"));
        assert_eq!(tree.selected_count(), 1);
        assert!(tree.is_selected(&key("p-sales")));
        tree.set_selected(&key("missing"), true);
        assert_eq!(tree.selected_count(), 1);
    }
}
