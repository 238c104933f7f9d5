//! Samples gallery: blank-project entry plus template tiles.

use crate::components::spinner::Spinner;
use crate::features::samples::state::{
    DUMMY_AUTHOR, DUMMY_LIKE_COUNT, DUMMY_OPEN_COUNT, SAMPLES, SPINNER_DONE_DURATION_MS,
    SPINNER_SIZE_PX, SpinnerState, TemplateChoice, TileSpinner,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// A tile click: the choice plus the reporter for that tile's spinner.
pub(crate) type TemplateClick = (TemplateChoice, Callback<Option<SpinnerState>>);

#[derive(Properties, PartialEq)]
struct TileProps {
    choice: TemplateChoice,
    title: AttrValue,
    #[prop_or_default]
    description: Option<AttrValue>,
    #[prop_or_default]
    background: Option<AttrValue>,
    #[prop_or_default]
    class: Classes,
    on_click: Callback<TemplateClick>,
    #[prop_or_default]
    children: Children,
}

#[function_component(ProjectTile)]
fn project_tile(props: &TileProps) -> Html {
    let spinner = use_state(TileSpinner::default);

    let report = {
        let spinner = spinner.clone();
        Callback::from(move |state: Option<SpinnerState>| {
            let (next, schedule_clear) = spinner.reported(state);
            spinner.set(next);
            if schedule_clear {
                let spinner = spinner.clone();
                Timeout::new(SPINNER_DONE_DURATION_MS, move || {
                    spinner.set(spinner.cleared());
                })
                .forget();
            }
        })
    };
    let onclick = {
        let spinner = spinner.clone();
        let on_click = props.on_click.clone();
        let choice = props.choice;
        Callback::from(move |_: MouseEvent| {
            spinner.set(spinner.clicked());
            on_click.emit((choice, report.clone()));
        })
    };

    html! {
        <button
            type="button"
            class={classes!("project-tile", "relative", "flex", "flex-col", "rounded-2xl", "text-left", props.class.clone())}
            {onclick}
        >
            <div class="h-28 w-full rounded-t-2xl" style={props.background.clone().map(|bg| format!("background: {bg};"))}>
                {for props.children.iter()}
            </div>
            <div class="p-3">
                <h3 class="font-semibold">{props.title.clone()}</h3>
                if let Some(description) = props.description.clone() {
                    <p class="text-sm opacity-70">{description}</p>
                }
            </div>
            if let Some(state) = spinner.state() {
                <div class="absolute inset-0 flex items-center justify-center">
                    <Spinner size={SPINNER_SIZE_PX} {state} />
                </div>
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SamplesProps {
    pub on_template_click: Callback<TemplateClick>,
}

#[function_component(Samples)]
pub(crate) fn samples(props: &SamplesProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let opens = bundle.text("samples.opens", "Opens");
    let likes = bundle.text("samples.likes", "Likes");

    let tiles = SAMPLES
        .iter()
        .map(|sample| {
            html! {
                <div key={sample.id} class="flex flex-col gap-1">
                    <ProjectTile
                        choice={TemplateChoice::Template(sample.id)}
                        title={sample.title}
                        description={Some(AttrValue::Static(sample.description))}
                        background={sample.background.map(AttrValue::Static)}
                        on_click={props.on_template_click.clone()}
                    />
                    <div class="flex justify-between px-2 text-xs opacity-70">
                        <span>{DUMMY_AUTHOR}</span>
                        <span>{format!("{DUMMY_OPEN_COUNT} {opens} · {DUMMY_LIKE_COUNT} {likes}")}</span>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section class="samples flex flex-col gap-4">
            <h2 class="text-lg font-semibold">
                {bundle.text("samples.title", "Sample and community projects")}
            </h2>
            <div class="grid grid-cols-4 gap-4">
                <ProjectTile
                    choice={TemplateChoice::Blank}
                    title={bundle.text("samples.blank", "New empty project")}
                    class={classes!("border-dashed", "border-2")}
                    on_click={props.on_template_click.clone()}
                >
                    <span class="flex h-full items-center justify-center text-4xl">{"+"}</span>
                </ProjectTile>
                {tiles}
            </div>
        </section>
    }
}
