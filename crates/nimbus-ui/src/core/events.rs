//! Asset events broadcast from the shell to rows, and list events sent back.
//!
//! # Design
//! - Rows react only to events addressed to their key and ignore the rest.
//! - Row-to-list requests travel as [`AssetListEvent`]s; rows never edit the
//!   tree structure directly.

use crate::features::assets::state::AssetKey;

/// Event broadcast to every visible row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetEvent {
    /// A placeholder directory row was inserted and must be created remotely.
    NewFolder {
        /// Key of the placeholder row.
        placeholder_id: AssetKey,
    },
}

impl AssetEvent {
    /// Row key the event is addressed to.
    #[must_use]
    pub const fn target(&self) -> &AssetKey {
        match self {
            Self::NewFolder { placeholder_id } => placeholder_id,
        }
    }
}

/// Structural change requested by a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetListEvent {
    /// Remove the row (and its subtree) from the tree.
    Delete {
        /// Row to remove.
        key: AssetKey,
    },
}
