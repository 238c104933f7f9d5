use crate::features::samples::state::SpinnerState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SpinnerProps {
    pub size: u32,
    pub state: SpinnerState,
}

#[function_component(Spinner)]
pub(crate) fn spinner(props: &SpinnerProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg width={size.clone()} height={size} viewBox="0 0 24 24" fill="none" role="progressbar">
            <rect
                x="1.5"
                y="1.5"
                width="21"
                height="21"
                rx="10.5"
                stroke="currentColor"
                stroke-linecap="round"
                stroke-width="3"
                class={classes!("animate-spin-ease", "origin-center", "transition-stroke-dasharray", props.state.class())}
            />
        </svg>
    }
}
