use crate::components::use_focus_when;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EditableSpanProps {
    pub value: AttrValue,
    pub editing: bool,
    pub on_submit: Callback<String>,
    pub on_cancel: Callback<()>,
    /// Returns whether a candidate value may be submitted.
    pub check: Callback<String, bool>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: AttrValue,
}

/// Text that turns into an inline input while editing.
///
/// Enter submits, Escape or blur cancels. Enter never reaches the row.
#[function_component(EditableSpan)]
pub(crate) fn editable_span(props: &EditableSpanProps) -> Html {
    let draft = use_state(|| props.value.to_string());
    let node = use_focus_when(props.editing);
    {
        let draft = draft.clone();
        use_effect_with_deps(
            move |(value, _editing): &(AttrValue, bool)| {
                draft.set(value.to_string());
                || ()
            },
            (props.value.clone(), props.editing),
        );
    }

    if !props.editing {
        return html! { <span class={props.class.clone()}>{props.value.clone()}</span> };
    }

    let accepted = props.check.emit((*draft).clone());
    let oninput = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let onkeydown = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |event: KeyboardEvent| match event.key().as_str() {
            "Enter" => {
                event.stop_propagation();
                event.prevent_default();
                if accepted {
                    on_submit.emit((*draft).clone());
                }
            }
            "Escape" => on_cancel.emit(()),
            _ => {}
        })
    };
    let onblur = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: FocusEvent| on_cancel.emit(()))
    };
    let onclick = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <input
            class={classes!("editable-span", props.class.clone(), (!accepted).then_some("input-error"))}
            type="text"
            value={(*draft).clone()}
            aria-label={props.aria_label.clone()}
            aria-invalid={(!accepted).to_string()}
            ref={node}
            {oninput}
            {onkeydown}
            {onblur}
            {onclick}
        />
    }
}
