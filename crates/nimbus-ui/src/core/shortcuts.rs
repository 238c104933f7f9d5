//! Mouse gesture bindings.
//!
//! # Design
//! - Gestures are captured as plain data so click handling is testable natively.
//! - Bindings live in a registry the shell can customize; rows only ask
//!   whether a gesture matches an action.

use std::collections::BTreeMap;

/// Keyboard modifiers held during a gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Shift key.
    pub shift: bool,
    /// Alt / Option key.
    pub alt: bool,
    /// Meta / Command key.
    pub meta: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    /// Only Control held.
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };

    /// Only Shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
}

/// A pointer click as reported by the DOM (`MouseEvent.detail` is the click count).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseGesture {
    /// Primary button is 0.
    pub button: i16,
    /// Consecutive click count.
    pub click_count: i32,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl MouseGesture {
    /// Plain primary-button click with the given click count.
    #[must_use]
    pub const fn primary(click_count: i32) -> Self {
        Self {
            button: 0,
            click_count,
            modifiers: Modifiers::NONE,
        }
    }

    /// Same gesture with different modifiers.
    #[must_use]
    pub const fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }

    /// Whether this is the first click of a sequence.
    #[must_use]
    pub const fn is_single_click(&self) -> bool {
        self.click_count == 1
    }

    /// Whether this is the second click of a sequence.
    #[must_use]
    pub const fn is_double_click(&self) -> bool {
        self.click_count == 2
    }
}

/// Mouse actions with configurable bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MouseAction {
    /// Start editing an asset's name.
    EditName,
    /// Add the row to the selection.
    SelectAdditional,
    /// Extend the selection to the row.
    SelectRange,
}

/// Binding of a mouse action to a button + modifier combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseBinding {
    /// Button index.
    pub button: i16,
    /// Exact modifiers required.
    pub modifiers: Modifiers,
}

/// Registry of mouse bindings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutRegistry {
    mouse: BTreeMap<MouseAction, Vec<MouseBinding>>,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        let mut mouse = BTreeMap::new();
        mouse.insert(
            MouseAction::EditName,
            vec![MouseBinding {
                button: 0,
                modifiers: Modifiers::CTRL,
            }],
        );
        mouse.insert(
            MouseAction::SelectAdditional,
            vec![MouseBinding {
                button: 0,
                modifiers: Modifiers {
                    meta: true,
                    ..Modifiers::NONE
                },
            }],
        );
        mouse.insert(
            MouseAction::SelectRange,
            vec![MouseBinding {
                button: 0,
                modifiers: Modifiers::SHIFT,
            }],
        );
        Self { mouse }
    }
}

impl ShortcutRegistry {
    /// Replace the bindings of an action.
    pub fn rebind(&mut self, action: MouseAction, bindings: Vec<MouseBinding>) {
        self.mouse.insert(action, bindings);
    }

    /// Whether `gesture` triggers `action`.
    #[must_use]
    pub fn matches_mouse_action(&self, action: MouseAction, gesture: &MouseGesture) -> bool {
        self.mouse.get(&action).is_some_and(|bindings| {
            bindings.iter().any(|binding| {
                binding.button == gesture.button && binding.modifiers == gesture.modifiers
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_click_edits_name_by_default() {
        let registry = ShortcutRegistry::default();
        let ctrl_click = MouseGesture::primary(1).with_modifiers(Modifiers::CTRL);
        assert!(registry.matches_mouse_action(MouseAction::EditName, &ctrl_click));
        assert!(!registry.matches_mouse_action(MouseAction::EditName, &MouseGesture::primary(1)));
    }

    #[test]
    fn rebinding_replaces_previous_gesture() {
        let mut registry = ShortcutRegistry::default();
        registry.rebind(
            MouseAction::EditName,
            vec![MouseBinding {
                button: 0,
                modifiers: Modifiers {
                    alt: true,
                    ..Modifiers::NONE
                },
            }],
        );
        let ctrl_click = MouseGesture::primary(1).with_modifiers(Modifiers::CTRL);
        assert!(!registry.matches_mouse_action(MouseAction::EditName, &ctrl_click));
    }

    #[test]
    fn click_count_classifies_gesture() {
        assert!(MouseGesture::primary(1).is_single_click());
        assert!(MouseGesture::primary(2).is_double_click());
        assert!(!MouseGesture::primary(3).is_double_click());
    }
}
