//! Directory name column: inline rename, expansion toggle and placeholder creation.

use crate::app::api::ApiCtx;
use crate::app::notify::StoreNotifier;
use crate::components::editable_span::EditableSpan;
use crate::components::gesture_from_event;
use crate::core::events::{AssetEvent, AssetListEvent};
use crate::core::shortcuts::ShortcutRegistry;
use crate::core::store::AppStore;
use crate::features::assets::actions::{
    AssetRowSink, handle_asset_event, list_children, rename_directory,
};
use crate::features::assets::logic::{
    RowClickOutcome, RowSelection, check_directory_title, resolve_row_click,
};
use crate::features::assets::state::{AssetKey, AssetNode, ExpansionOutcome, Visibility};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::Asset;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

/// Row sink that writes back into the app store.
struct StoreRowSink {
    key: AssetKey,
    dispatch: Dispatch<AppStore>,
}

impl AssetRowSink for StoreRowSink {
    fn update_asset(&self, update: Box<dyn FnOnce(&mut Asset)>) {
        let key = self.key.clone();
        self.dispatch
            .reduce_mut(move |store| store.assets.update_asset(&key, update));
    }

    fn set_visibility(&self, visibility: Visibility) {
        let key = self.key.clone();
        self.dispatch.reduce_mut(move |store| {
            store
                .assets
                .update_row(&key, |row| row.visibility = visibility);
        });
    }

    fn dispatch_list_event(&self, event: AssetListEvent) {
        match event {
            AssetListEvent::Delete { key } => {
                self.dispatch.reduce_mut(move |store| store.assets.remove(&key));
            }
        }
    }
}

/// Toggle a directory and list it when its children are unknown.
pub(crate) fn toggle_directory(api: &ApiCtx, key: &AssetKey) {
    let dispatch = Dispatch::<AppStore>::new();
    let mut outcome = ExpansionOutcome::NotADirectory;
    dispatch.reduce_mut(|store| outcome = store.assets.toggle_expansion(key));
    if outcome != ExpansionOutcome::NeedsListing {
        return;
    }
    let Some(parent_id) = dispatch.get().assets.get(key).map(|node| node.item.id.clone()) else {
        return;
    };
    let backend = api.backend.clone();
    let key = key.clone();
    yew::platform::spawn_local(async move {
        let notifier = StoreNotifier::new();
        match list_children(backend.as_ref(), Some(&parent_id), &notifier).await {
            Some(assets) => dispatch.reduce_mut(|store| store.assets.insert_children(&key, assets)),
            None => dispatch.reduce_mut(|store| store.assets.collapse(&key)),
        }
    });
}

#[derive(Properties, PartialEq)]
pub(crate) struct DirectoryNameColumnProps {
    pub node: AssetNode,
    pub selected: bool,
    pub selected_count: usize,
}

#[function_component(DirectoryNameColumn)]
pub(crate) fn directory_name_column(props: &DirectoryNameColumnProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let shortcuts = use_memo(|_| ShortcutRegistry::default(), ());
    let hovered = use_state(|| false);
    let pending_event = use_selector(|store: &AppStore| store.asset_event.clone());
    let node = &props.node;
    let key = node.key.clone();

    {
        let api = api.clone();
        let key = key.clone();
        let asset = node.item.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |event: &Rc<Option<AssetEvent>>| {
                let targeted = event.as_ref().clone().filter(|event| event.target() == &key);
                if let (Some(event), Some(api)) = (targeted, api) {
                    dispatch.reduce_mut(|store| store.asset_event = None);
                    let row = StoreRowSink {
                        key: key.clone(),
                        dispatch,
                    };
                    yew::platform::spawn_local(async move {
                        let notifier = StoreNotifier::new();
                        handle_asset_event(
                            api.backend.as_ref(),
                            &row,
                            &key,
                            &asset,
                            &event,
                            &notifier,
                        )
                        .await;
                    });
                }
                || ()
            },
            pending_event,
        );
    }

    let Some(api) = api else {
        return html! {};
    };

    let onclick = {
        let key = key.clone();
        let api = api.clone();
        let dispatch = dispatch.clone();
        let selection = RowSelection {
            selected: props.selected,
            selected_count: props.selected_count,
            is_editing_name: node.row.is_editing_name,
        };
        Callback::from(move |event: MouseEvent| {
            let gesture = gesture_from_event(&event);
            match resolve_row_click(&gesture, selection, &shortcuts) {
                RowClickOutcome::BeginEditing => {
                    let key = key.clone();
                    dispatch.reduce_mut(move |store| {
                        store.assets.update_row(&key, |row| row.is_editing_name = true);
                    });
                }
                RowClickOutcome::ToggleExpansionAndDeselect => {
                    let deselect_key = key.clone();
                    let deselect = dispatch.clone();
                    Timeout::new(0, move || {
                        deselect.reduce_mut(|store| store.assets.set_selected(&deselect_key, false));
                    })
                    .forget();
                    toggle_directory(&api, &key);
                }
                RowClickOutcome::Ignore => {}
            }
        })
    };

    let on_toggle = {
        let key = key.clone();
        let api = api.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            toggle_directory(&api, &key);
        })
    };

    let check = {
        let key = key.clone();
        Callback::from(move |title: String| {
            let store = Dispatch::<AppStore>::new().get();
            check_directory_title(&store.assets, &key, &title).is_ok()
        })
    };

    let stop_editing = {
        let key = key.clone();
        let dispatch = dispatch.clone();
        move || {
            let key = key.clone();
            dispatch.reduce_mut(move |store| {
                store.assets.update_row(&key, |row| row.is_editing_name = false);
            });
        }
    };

    let on_submit = {
        let key = key.clone();
        let asset = node.item.clone();
        let dispatch = dispatch.clone();
        let stop_editing = stop_editing.clone();
        Callback::from(move |title: String| {
            stop_editing();
            let row = StoreRowSink {
                key: key.clone(),
                dispatch: dispatch.clone(),
            };
            let backend = api.backend.clone();
            let asset = asset.clone();
            yew::platform::spawn_local(async move {
                let notifier = StoreNotifier::new();
                rename_directory(backend.as_ref(), &row, &asset, &title, &notifier).await;
            });
        })
    };
    let on_cancel = Callback::from(move |()| stop_editing());

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let indent = format!("padding-left: {}rem;", f64::from(node.depth) * 1.5);
    html! {
        <div
            class={classes!("directory-name", "flex", "items-center", "gap-2", node.row.visibility.class())}
            style={indent}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            {onclick}
        >
            if *hovered {
                <button
                    type="button"
                    class={classes!("folder-toggle", (!node.expanded).then_some("-rotate-90"))}
                    aria-label={bundle.text("assets.toggle", "Toggle folder")}
                    onclick={on_toggle}
                >
                    {"▾"}
                </button>
            } else {
                <span class="folder-icon" aria-hidden="true">{"📁"}</span>
            }
            <EditableSpan
                value={AttrValue::from(node.item.title.clone())}
                editing={node.row.is_editing_name}
                {on_submit}
                {on_cancel}
                {check}
                class={classes!("grow", "whitespace-nowrap")}
                aria_label={bundle.text("assets.rename", "Folder name")}
            />
        </div>
    }
}
