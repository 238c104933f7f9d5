//! Label modal form state.
//!
//! # Design
//! - The catalog is keyed by label name; modals borrow it and never copy it.
//! - Derived flags (`can_select_color`, `can_create`, `can_submit`) are
//!   recomputed from the inputs instead of being stored.

use crate::core::pattern::LiteralMatcher;
use crate::models::{Label, LabelName, LChColor};
use std::collections::{BTreeMap, BTreeSet};

/// Organization-wide label catalog keyed by name.
pub type LabelCatalog = BTreeMap<LabelName, Label>;

/// Working state of the label management modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManageLabelsState {
    /// Labels currently attached to the asset.
    pub labels: Vec<LabelName>,
    /// Live search query.
    pub query: String,
    /// Color chosen for a label about to be created.
    pub color: Option<LChColor>,
}

impl ManageLabelsState {
    /// Start from the labels already attached to an asset.
    #[must_use]
    pub fn new(labels: &[LabelName]) -> Self {
        Self {
            labels: labels.to_vec(),
            ..Self::default()
        }
    }

    /// Catalog entries whose name contains the query, ignoring case.
    #[must_use]
    pub fn filtered<'a>(&self, catalog: &'a LabelCatalog) -> Vec<&'a Label> {
        let matcher = LiteralMatcher::case_insensitive(&self.query);
        catalog
            .values()
            .filter(|label| matcher.is_match(label.value.as_str()))
            .collect()
    }

    /// A color may be picked once the query names a label that does not exist yet.
    #[must_use]
    pub fn can_select_color(&self, catalog: &LabelCatalog) -> bool {
        if self.query.is_empty() {
            return false;
        }
        let matcher = LiteralMatcher::case_insensitive(&self.query);
        !catalog.keys().any(|name| matcher.is_match(name.as_str()))
    }

    /// Whether the create control is enabled.
    #[must_use]
    pub fn can_create(&self, catalog: &LabelCatalog) -> bool {
        self.can_select_color(catalog) && self.color.is_some()
    }

    /// Color tinting the query field, if any.
    #[must_use]
    pub fn query_tint(&self, catalog: &LabelCatalog) -> Option<LChColor> {
        self.color.filter(|_| self.can_select_color(catalog))
    }

    /// Whether `name` is attached to the asset.
    #[must_use]
    pub fn is_active(&self, name: &LabelName) -> bool {
        self.labels.contains(name)
    }

    /// Label list after toggling `name`: removed when present, appended otherwise.
    #[must_use]
    pub fn toggled(&self, name: &LabelName) -> Vec<LabelName> {
        if self.is_active(name) {
            self.labels
                .iter()
                .filter(|label| *label != name)
                .cloned()
                .collect()
        } else {
            let mut labels = self.labels.clone();
            labels.push(name.clone());
            labels
        }
    }
}

/// Working state of the new-label modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewLabelForm {
    /// Entered label name.
    pub name: String,
    /// Chosen color.
    pub color: Option<LChColor>,
}

impl NewLabelForm {
    /// A submit needs a fresh, non-empty name and a color.
    #[must_use]
    pub fn can_submit(&self, existing: &BTreeSet<LabelName>) -> bool {
        !self.name.is_empty()
            && !existing.contains(&LabelName::new(self.name.as_str()))
            && self.color.is_some()
    }
}
