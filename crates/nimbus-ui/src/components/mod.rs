//! Shared Yew building blocks used by the feature views.
pub(crate) mod color_picker;
pub(crate) mod editable_span;
pub(crate) mod input;
pub(crate) mod label_chip;
pub(crate) mod modal;
pub(crate) mod spinner;
pub(crate) mod toast;

use crate::core::modal::AnchorRect;
use crate::core::shortcuts::{Modifiers, MouseGesture};
use web_sys::{Element, HtmlInputElement, MouseEvent};
use yew::prelude::*;

/// Capture a DOM click as a [`MouseGesture`].
pub(crate) fn gesture_from_event(event: &MouseEvent) -> MouseGesture {
    MouseGesture {
        button: event.button(),
        click_count: event.detail(),
        modifiers: Modifiers {
            ctrl: event.ctrl_key(),
            shift: event.shift_key(),
            alt: event.alt_key(),
            meta: event.meta_key(),
        },
    }
}

/// Viewport rectangle of the element a modal is opened from.
pub(crate) fn anchor_of(element: &Element) -> AnchorRect {
    let rect = element.get_bounding_client_rect();
    AnchorRect {
        left: rect.left(),
        top: rect.top(),
    }
}

/// Node ref for an input that takes focus whenever `active` turns true.
///
/// Browsers honour `autofocus` only at page load, so inputs rendered later
/// are focused explicitly once mounted.
#[hook]
pub(crate) fn use_focus_when(active: bool) -> NodeRef {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |active: &bool| {
                if *active {
                    if let Some(input) = node.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                || ()
            },
            active,
        );
    }
    node
}
