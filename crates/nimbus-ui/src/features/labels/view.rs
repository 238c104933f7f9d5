//! Label management and new-label modals.

use crate::app::api::ApiCtx;
use crate::app::notify::StoreNotifier;
use crate::components::color_picker::ColorPicker;
use crate::components::label_chip::LabelChip;
use crate::components::modal::Modal;
use crate::components::use_focus_when;
use crate::core::backend::{Backend, BackendError};
use crate::core::modal::{AnchorRect, ModalPlacement};
use crate::core::store::AppStore;
use crate::features::assets::state::AssetKey;
use crate::features::labels::actions::{
    LabelSelectionSink, submit_label_creation, submit_new_label, toggle_label,
};
use crate::features::labels::logic::{LabelsAccess, background_style, contrast_class};
use crate::features::labels::state::{LabelCatalog, ManageLabelsState, NewLabelForm};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::{Asset, CreateTagRequest, LChColor, LabelName};
use gloo::utils::window;
use std::collections::BTreeSet;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

/// Create a catalog label and add it to the store.
pub(crate) async fn create_catalog_label(
    backend: Rc<dyn Backend>,
    name: LabelName,
    color: LChColor,
) -> Result<(), BackendError> {
    let label = backend
        .create_tag(CreateTagRequest { value: name, color })
        .await?;
    Dispatch::<AppStore>::new().reduce_mut(|store| store.labels.insert(label));
    Ok(())
}

/// Create a catalog label, then attach it to the asset alongside `labels`.
async fn create_and_attach(
    backend: Rc<dyn Backend>,
    asset: Asset,
    labels: Vec<LabelName>,
    name: LabelName,
    color: LChColor,
) -> Result<(), BackendError> {
    create_catalog_label(backend.clone(), name.clone(), color).await?;
    let mut attached = labels;
    attached.push(name);
    backend
        .associate_tag(&asset.id, &attached, &asset.title)
        .await
}

fn placement(anchor: Option<AnchorRect>) -> ModalPlacement {
    let scroll_x = window().scroll_x().unwrap_or_default();
    let scroll_y = window().scroll_y().unwrap_or_default();
    ModalPlacement::from_anchor(anchor, scroll_x, scroll_y)
}

fn close_modal() {
    Dispatch::<AppStore>::new().reduce_mut(|store| store.modal = None);
}

/// Keeps the modal's list and the tree row in step.
struct RowLabels {
    key: AssetKey,
    local: UseStateHandle<Vec<LabelName>>,
}

impl LabelSelectionSink for RowLabels {
    fn set_labels(&self, labels: Vec<LabelName>) {
        self.local.set(labels.clone());
        let key = self.key.clone();
        Dispatch::<AppStore>::new().reduce_mut(move |store| {
            store
                .assets
                .update_asset(&key, |asset| asset.labels = Some(labels));
        });
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ManageLabelsModalProps {
    pub access: LabelsAccess,
    pub asset_key: AssetKey,
    pub asset: Asset,
    pub catalog: LabelCatalog,
    #[prop_or_default]
    pub anchor: Option<AnchorRect>,
}

#[function_component(ManageLabelsModal)]
pub(crate) fn manage_labels_modal(props: &ManageLabelsModalProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let labels = use_state(|| props.asset.label_names().to_vec());
    let query = use_state(String::new);
    let color = use_state(|| None::<LChColor>);
    let query_input = use_focus_when(true);
    let Some(api) = api else {
        return html! {};
    };

    let state = ManageLabelsState {
        labels: (*labels).clone(),
        query: (*query).clone(),
        color: *color,
    };
    let can_select_color = state.can_select_color(&props.catalog);
    let can_create = state.can_create(&props.catalog);
    let tint = state.query_tint(&props.catalog);

    let on_query = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };
    let on_color = {
        let color = color.clone();
        Callback::from(move |picked: LChColor| color.set(Some(picked)))
    };

    let onsubmit = {
        let state = state.clone();
        let catalog = props.catalog.clone();
        let sink_key = props.asset_key.clone();
        let labels = labels.clone();
        let backend = api.backend.clone();
        let asset = props.asset.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let state = state.clone();
            let catalog = catalog.clone();
            let sink = RowLabels {
                key: sink_key.clone(),
                local: labels.clone(),
            };
            let backend = backend.clone();
            let asset = asset.clone();
            yew::platform::spawn_local(async move {
                let notifier = StoreNotifier::new();
                let current = state.labels.clone();
                submit_label_creation(
                    &state,
                    &catalog,
                    &sink,
                    |name, color| create_and_attach(backend, asset, current, name, color),
                    &notifier,
                )
                .await;
                close_modal();
            });
        })
    };

    let chips = state
        .filtered(&props.catalog)
        .into_iter()
        .map(|label| {
            let name = label.value.clone();
            let on_click = {
                let state = state.clone();
                let sink_key = props.asset_key.clone();
                let labels = labels.clone();
                let backend = api.backend.clone();
                let asset_id = props.asset.id.clone();
                let title = props.asset.title.clone();
                Callback::from(move |()| {
                    let state = state.clone();
                    let name = name.clone();
                    let sink = RowLabels {
                        key: sink_key.clone(),
                        local: labels.clone(),
                    };
                    let backend = backend.clone();
                    let asset_id = asset_id.clone();
                    let title = title.clone();
                    yew::platform::spawn_local(async move {
                        let notifier = StoreNotifier::new();
                        toggle_label(
                            backend.as_ref(),
                            &asset_id,
                            &title,
                            &state,
                            &name,
                            &sink,
                            &notifier,
                        )
                        .await;
                    });
                })
            };
            html! {
                <div key={label.id.0.clone()} class="flex items-center h-8">
                    <LabelChip active={state.is_active(&label.value)} color={label.color} {on_click}>
                        {label.value.to_string()}
                    </LabelChip>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <Modal
            placement={placement(props.anchor)}
            on_close={Callback::from(|()| close_modal())}
            panel_class={classes!("w-60")}
        >
            <form class="relative flex flex-col gap-2 rounded-2xl p-2" {onsubmit}>
                <h2 class="text-sm font-bold">{bundle.text("labels.title", "Labels")}</h2>
                <div
                    class={classes!("flex", "items-center", "grow", "rounded-full", "border", "px-1", contrast_class(tint.as_ref()))}
                    style={background_style(tint.as_ref())}
                >
                    <input
                        ref={query_input}
                        type="text"
                        class="grow bg-transparent h-6 px-1"
                        placeholder={bundle.text("labels.search_placeholder", "Type labels to search")}
                        value={(*query).clone()}
                        oninput={on_query}
                    />
                </div>
                <button type="submit" class="btn btn-primary rounded-full" disabled={!can_create}>
                    {bundle.text("labels.create", "Create")}
                </button>
                if can_select_color {
                    <ColorPicker selected={*color} on_select={on_color} />
                }
                <div class="overflow-auto max-h-80 pl-1 pr-12">{chips}</div>
            </form>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct NewLabelModalProps {
    pub access: LabelsAccess,
    pub anchor: AnchorRect,
    pub names: BTreeSet<LabelName>,
}

#[function_component(NewLabelModal)]
pub(crate) fn new_label_modal(props: &NewLabelModalProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let form = use_state(NewLabelForm::default);
    let name_input = use_focus_when(true);
    let Some(api) = api else {
        return html! {};
    };
    let can_submit = form.can_submit(&props.names);

    let on_name = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            form.set(NewLabelForm {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_color = {
        let form = form.clone();
        Callback::from(move |color: LChColor| {
            form.set(NewLabelForm {
                color: Some(color),
                ..(*form).clone()
            });
        })
    };
    let onsubmit = {
        let form = form.clone();
        let names = props.names.clone();
        let backend = api.backend.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let form = (*form).clone();
            let names = names.clone();
            let backend = backend.clone();
            yew::platform::spawn_local(async move {
                let notifier = StoreNotifier::new();
                submit_new_label(
                    &form,
                    &names,
                    close_modal,
                    |name, color| create_catalog_label(backend, name, color),
                    &notifier,
                )
                .await;
            });
        })
    };
    let on_cancel = Callback::from(|_: MouseEvent| close_modal());

    html! {
        <Modal
            placement={placement(Some(props.anchor))}
            on_close={Callback::from(|()| close_modal())}
            panel_class={classes!("w-80")}
        >
            <form class="relative flex flex-col gap-2 p-4 pt-2" data-testid="new-label-modal" {onsubmit}>
                <h1 class="text-sm font-semibold">{bundle.text("labels.new_title", "New Label")}</h1>
                <label class="flex">
                    <div class="w-12 h-6 py-1">{bundle.text("labels.name", "Name")}</div>
                    <input
                        ref={name_input}
                        class={classes!("grow", "bg-transparent", "border", "rounded-full", "h-6", "px-4", contrast_class(form.color.as_ref()))}
                        style={background_style(form.color.as_ref())}
                        placeholder={bundle.text("labels.name_placeholder", "Enter the name of the label")}
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                </label>
                <div class="flex">
                    <div class="w-12 h-6 py-1">{bundle.text("labels.color", "Color")}</div>
                    <ColorPicker selected={form.color} on_select={on_color} />
                </div>
                <div class="flex gap-2">
                    <button type="submit" class="btn btn-primary rounded-full" disabled={!can_submit}>
                        {bundle.text("labels.create", "Create")}
                    </button>
                    <button type="button" class="btn rounded-full" onclick={on_cancel}>
                        {bundle.text("labels.cancel", "Cancel")}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
