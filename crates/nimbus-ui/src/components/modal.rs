use crate::core::modal::{ModalPlacement, key_escapes_modal};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or(ModalPlacement::Centered)]
    pub placement: ModalPlacement,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub panel_class: Classes,
    #[prop_or_default]
    pub children: Children,
    pub on_close: Callback<()>,
}

/// Full-screen backdrop with a panel that keeps clicks and keys to itself.
#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_panel_click = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_context_menu = Callback::from(|event: MouseEvent| {
        event.stop_propagation();
        event.prevent_default();
    });
    let on_key_down = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: KeyboardEvent| {
            if key_escapes_modal(&event.key()) {
                on_close.emit(());
            } else {
                event.stop_propagation();
            }
        })
    };

    html! {
        <div
            class={classes!(
                "modal",
                "modal-open",
                props.placement.is_centered().then_some("modal-centered"),
                props.class.clone()
            )}
            role="dialog"
            aria-modal="true"
            onclick={on_backdrop}
        >
            <div
                tabindex="-1"
                class={classes!("modal-box", props.panel_class.clone())}
                style={props.placement.style()}
                onclick={on_panel_click}
                oncontextmenu={on_context_menu}
                onkeydown={on_key_down}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}
