//! Modal placement and keyboard containment rules.

/// Viewport-relative position of the element that opened a modal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorRect {
    /// Left edge in CSS pixels.
    pub left: f64,
    /// Top edge in CSS pixels.
    pub top: f64,
}

/// Where a modal panel is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModalPlacement {
    /// Centered in the viewport.
    Centered,
    /// Absolutely positioned at document coordinates.
    Anchored {
        /// Left offset in CSS pixels.
        left: f64,
        /// Top offset in CSS pixels.
        top: f64,
    },
}

impl ModalPlacement {
    /// Place at the anchor translated by the window scroll, or centered without one.
    #[must_use]
    pub fn from_anchor(anchor: Option<AnchorRect>, scroll_x: f64, scroll_y: f64) -> Self {
        anchor.map_or(Self::Centered, |rect| Self::Anchored {
            left: rect.left + scroll_x,
            top: rect.top + scroll_y,
        })
    }

    /// Inline style for the panel, if any.
    #[must_use]
    pub fn style(&self) -> Option<String> {
        match self {
            Self::Centered => None,
            Self::Anchored { left, top } => Some(format!("left: {left}px; top: {top}px;")),
        }
    }

    /// Whether the modal should be centered.
    #[must_use]
    pub const fn is_centered(&self) -> bool {
        matches!(self, Self::Centered)
    }
}

/// Keys other than Escape are swallowed by an open modal.
#[must_use]
pub fn key_escapes_modal(key: &str) -> bool {
    key == "Escape"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchored_placement_adds_scroll_offset() {
        let placement = ModalPlacement::from_anchor(
            Some(AnchorRect {
                left: 120.0,
                top: 40.0,
            }),
            0.0,
            300.0,
        );
        assert_eq!(
            placement,
            ModalPlacement::Anchored {
                left: 120.0,
                top: 340.0
            }
        );
        assert_eq!(placement.style().as_deref(), Some("left: 120px; top: 340px;"));
    }

    #[test]
    fn missing_anchor_centers() {
        let placement = ModalPlacement::from_anchor(None, 10.0, 10.0);
        assert!(placement.is_centered());
        assert_eq!(placement.style(), None);
    }

    #[test]
    fn only_escape_leaves_modal() {
        assert!(key_escapes_modal("Escape"));
        assert!(!key_escapes_modal("Enter"));
    }
}
