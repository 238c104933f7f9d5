use crate::features::labels::logic::{background_style, contrast_class};
use crate::models::LChColor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LabelChipProps {
    pub color: LChColor,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub on_click: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Rounded label pill; inactive chips are drawn dimmed.
#[function_component(LabelChip)]
pub(crate) fn label_chip(props: &LabelChipProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_click.emit(());
        })
    };
    html! {
        <button
            type="button"
            class={classes!(
                "label-chip",
                contrast_class(Some(&props.color)),
                (!props.active).then_some("opacity-50")
            )}
            style={background_style(Some(&props.color))}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}
