use crate::components::use_focus_when;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InputProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub pattern: Option<AttrValue>,
    /// Validity computed by the caller; the error shows only for non-empty values.
    #[prop_or(true)]
    pub valid: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub autofocus: bool,
    #[prop_or(true)]
    pub required: bool,
}

/// Labelled form input with pattern validation.
#[function_component(Input)]
pub(crate) fn input(props: &InputProps) -> Html {
    let node = use_focus_when(props.autofocus);
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_input.emit(input.value());
        })
    };
    let show_error = !props.valid && !props.value.is_empty();
    html! {
        <label class="form-control w-full">
            <span class="label-text">{props.label.clone()}</span>
            <input
                class={classes!("input", "rounded-full", show_error.then_some("input-error"))}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                pattern={props.pattern.clone()}
                required={props.required}
                ref={node}
                {oninput}
            />
            if show_error {
                if let Some(error) = props.error.clone() {
                    <span class="text-error text-xs">{error}</span>
                }
            }
        </label>
    }
}
