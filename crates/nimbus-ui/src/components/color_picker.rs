use crate::models::{COLORS, LChColor};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ColorPickerProps {
    #[prop_or_default]
    pub selected: Option<LChColor>,
    pub on_select: Callback<LChColor>,
}

#[function_component(ColorPicker)]
pub(crate) fn color_picker(props: &ColorPickerProps) -> Html {
    html! {
        <div class="color-picker" role="radiogroup">
            {for COLORS.iter().map(|color| {
                let color = *color;
                let checked = props.selected == Some(color);
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        on_select.emit(color);
                    })
                };
                html! {
                    <button
                        type="button"
                        role="radio"
                        aria-checked={checked.to_string()}
                        class={classes!("color-swatch", checked.then_some("selected"))}
                        style={format!("background-color: {};", color.to_css())}
                        {onclick}
                    />
                }
            })}
        </div>
    }
}
