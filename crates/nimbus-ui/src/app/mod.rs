use crate::app::api::ApiCtx;
use crate::app::notify::StoreNotifier;
use crate::components::anchor_of;
use crate::components::toast::ToastHost;
use crate::core::backend::Backend;
use crate::core::events::AssetEvent;
use crate::core::notify::Notifier;
use crate::core::store::{ActiveModal, AppStore};
use crate::features::assets::actions::list_children;
use crate::features::assets::state::{AssetKey, AssetNode};
use crate::features::assets::view::DirectoryNameColumn;
use crate::features::auth::view::{ChangePasswordModal, ForgotPasswordPage};
use crate::features::labels::logic::{LabelsAccess, ensure_labels_supported};
use crate::features::labels::view::{ManageLabelsModal, NewLabelModal};
use crate::features::samples::actions::{create_project, next_project_name};
use crate::features::samples::state::{SpinnerState, TemplateChoice};
use crate::features::samples::view::Samples;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use crate::models::BackendType;
use preferences::{
    api_base_url, load_backend_type, load_locale, load_session, persist_backend_type,
    persist_locale,
};
pub(crate) use routes::Route;
use std::rc::Rc;
use web_sys::{Element, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod notify;
mod preferences;
mod routes;

/// Check label availability for the current session, toasting when missing.
fn labels_access(store: &AppStore) -> Option<LabelsAccess> {
    match ensure_labels_supported(store.session.backend, store.session.user.as_ref()) {
        Ok(access) => Some(access),
        Err(err) => {
            StoreNotifier::new().toast_and_log(None, Some(&err));
            None
        }
    }
}

/// Load the root listing and, for remote backends, the label catalog.
async fn load_dashboard(backend: Rc<dyn Backend>) {
    let dispatch = Dispatch::<AppStore>::new();
    let notifier = StoreNotifier::new();
    if let Some(assets) = list_children(backend.as_ref(), None, &notifier).await {
        dispatch.reduce_mut(|store| store.assets.reset(assets));
    }
    if backend.backend_type() != BackendType::Remote {
        dispatch.reduce_mut(|store| store.labels.reset(Vec::new()));
        return;
    }
    match backend.list_tags().await {
        Ok(labels) => dispatch.reduce_mut(|store| store.labels.reset(labels)),
        Err(err) => notifier.toast_and_log(Some("Could not load labels"), Some(&err)),
    }
}

#[function_component(NimbusApp)]
pub(crate) fn nimbus_app() -> Html {
    let locale = use_state(load_locale);
    let backend_type = use_state(load_backend_type);
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let api_ctx = use_memo(
        |backend_type| ApiCtx::new(*backend_type, &api_base_url()),
        *backend_type,
    );
    let toasts = use_selector(|store: &AppStore| store.toasts.items.clone());

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |ctx: &Rc<ApiCtx>| {
                let backend = ctx.backend.clone();
                dispatch.reduce_mut(|store| {
                    store.session.user = load_session();
                    store.session.backend = backend.backend_type();
                    store.modal = None;
                });
                yew::platform::spawn_local(load_dashboard(backend));
                || ()
            },
            api_ctx.clone(),
        );
    }

    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                persist_locale(next);
                locale.set(next);
            }
        })
    };
    let on_backend = {
        let backend_type = backend_type.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Some(next) = BackendType::parse(&select.value()) {
                persist_backend_type(next);
                backend_type.set(next);
            }
        })
    };
    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| dispatch.reduce_mut(|store| store.toasts.dismiss(id)))
    };

    let locale_selector = html! {
        <select class="select select-sm" aria-label="Language" onchange={on_locale}>
            {for LocaleCode::all().iter().map(|lc| html! {
                <option value={lc.code()} selected={*lc == *locale}>{lc.label()}</option>
            })}
        </select>
    };
    let backend_selector = html! {
        <select class="select select-sm" aria-label="Backend" onchange={on_backend}>
            {for [BackendType::Remote, BackendType::Local].into_iter().map(|kind| html! {
                <option value={kind.as_str()} selected={kind == *backend_type}>{kind.as_str()}</option>
            })}
        </select>
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <BrowserRouter>
                    <header class="flex items-center justify-between gap-4 px-6 py-3">
                        <span class="text-lg font-bold">{bundle.text("shell.title", "Nimbus")}</span>
                        <div class="flex items-center gap-2">
                            {backend_selector}
                            {locale_selector}
                        </div>
                    </header>
                    <Switch<Route> render={switch} />
                    <ToastHost toasts={(*toasts).clone()} {on_dismiss} />
                </BrowserRouter>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <Dashboard /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Dashboard} /> },
    }
}

#[function_component(Dashboard)]
fn dashboard() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let dispatch = Dispatch::<AppStore>::new();
    let assets = use_selector(|store: &AppStore| store.assets.clone());
    let catalog = use_selector(|store: &AppStore| store.labels.catalog.clone());
    let modal = use_selector(|store: &AppStore| store.modal.clone());
    let Some(api) = api else {
        return html! {};
    };

    let on_new_folder = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| {
                let key = store.assets.insert_placeholder_directory(None);
                store.asset_event = Some(AssetEvent::NewFolder {
                    placeholder_id: key,
                });
            });
        })
    };
    let on_new_label = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: MouseEvent| {
            if labels_access(&dispatch.get()).is_none() {
                return;
            }
            let Some(anchor) = event.target_dyn_into::<Element>().map(|el| anchor_of(&el)) else {
                return;
            };
            dispatch.reduce_mut(|store| store.modal = Some(ActiveModal::NewLabel { anchor }));
        })
    };
    let on_change_password = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|store| store.modal = Some(ActiveModal::ChangePassword));
        })
    };
    let on_template_click = {
        let backend = api.backend.clone();
        let dispatch = dispatch.clone();
        Callback::from(
            move |(choice, report): (TemplateChoice, Callback<Option<SpinnerState>>)| {
                let store = dispatch.get();
                let name = next_project_name(
                    choice,
                    store
                        .assets
                        .top_level_rows()
                        .iter()
                        .map(|node| node.item.title.as_str()),
                );
                let backend = backend.clone();
                let dispatch = dispatch.clone();
                yew::platform::spawn_local(async move {
                    let notifier = StoreNotifier::new();
                    let report = |state: Option<SpinnerState>| report.emit(state);
                    let created =
                        create_project(backend.as_ref(), choice, name, None, &report, &notifier)
                            .await;
                    if let Some(project) = created {
                        dispatch.reduce_mut(|store| {
                            store.assets.insert_top_level(project);
                        });
                    }
                });
            },
        )
    };

    let selected_count = assets.selected_count();
    let rows = assets
        .visible_rows()
        .into_iter()
        .map(|node| render_row(node, assets.is_selected(&node.key), selected_count, &bundle))
        .collect::<Html>();
    let sidebar = catalog
        .values()
        .map(|label| {
            html! {
                <li key={label.id.0.clone()} class="flex items-center gap-2">
                    <span class="h-3 w-3 rounded-full" style={format!("background-color: {};", label.color.to_css())}></span>
                    {label.value.to_string()}
                </li>
            }
        })
        .collect::<Html>();

    let active_modal = match (*modal).clone() {
        Some(ActiveModal::ChangePassword) => html! { <ChangePasswordModal /> },
        Some(ActiveModal::ManageLabels { key, anchor }) => {
            let store = dispatch.get();
            match (
                ensure_labels_supported(store.session.backend, store.session.user.as_ref()),
                assets.get(&key),
            ) {
                (Ok(access), Some(node)) => html! {
                    <ManageLabelsModal
                        {access}
                        asset_key={key.clone()}
                        asset={node.item.clone()}
                        catalog={(*catalog).clone()}
                        {anchor}
                    />
                },
                _ => html! {},
            }
        }
        Some(ActiveModal::NewLabel { anchor }) => {
            let store = dispatch.get();
            match ensure_labels_supported(store.session.backend, store.session.user.as_ref()) {
                Ok(access) => html! {
                    <NewLabelModal {access} {anchor} names={store.labels.names()} />
                },
                Err(_) => html! {},
            }
        }
        None => html! {},
    };

    html! {
        <div class="flex gap-6 px-6">
            <aside class="flex w-56 flex-col gap-3">
                <h2 class="text-sm font-semibold">{bundle.text("labels.sidebar", "Labels")}</h2>
                <ul class="flex flex-col gap-1 text-sm">{sidebar}</ul>
                <button type="button" class="btn btn-sm rounded-full" onclick={on_new_label}>
                    {bundle.text("labels.new", "New label")}
                </button>
                <button type="button" class="btn btn-ghost btn-sm" onclick={on_change_password}>
                    {bundle.text("shell.change_password", "Change password")}
                </button>
            </aside>
            <main class="flex grow flex-col gap-6">
                <section class="flex flex-col gap-1">
                    <div class="flex justify-end">
                        <button type="button" class="btn btn-sm rounded-full" onclick={on_new_folder}>
                            {bundle.text("shell.new_folder", "New folder")}
                        </button>
                    </div>
                    if assets.is_empty() {
                        <p class="opacity-60">{bundle.text("shell.empty", "No projects yet")}</p>
                    } else {
                        <div role="tree">{rows}</div>
                    }
                </section>
                <Samples {on_template_click} />
            </main>
            {active_modal}
        </div>
    }
}

fn render_row(
    node: &AssetNode,
    selected: bool,
    selected_count: usize,
    bundle: &TranslationBundle,
) -> Html {
    let key = node.key.clone();
    let onclick = {
        let key = key.clone();
        Callback::from(move |_: MouseEvent| {
            let key = key.clone();
            Dispatch::<AppStore>::new().reduce_mut(move |store| store.assets.select_only(&key));
        })
    };
    let on_labels = labels_trigger(key.clone());
    let labels = node
        .item
        .label_names()
        .iter()
        .map(|name| html! { <span class="badge badge-sm">{name.to_string()}</span> })
        .collect::<Html>();

    html! {
        <div
            key={key.as_str().to_string()}
            role="treeitem"
            aria-selected={selected.to_string()}
            class={classes!("asset-row", "flex", "items-center", "gap-3", "rounded", selected.then_some("bg-base-200"))}
            {onclick}
        >
            <div class="grow">
                if node.item.is_directory() {
                    <DirectoryNameColumn node={node.clone()} {selected} {selected_count} />
                } else {
                    <span style={format!("padding-left: {}rem;", f64::from(node.depth) * 1.5)}>
                        {node.item.title.clone()}
                    </span>
                }
            </div>
            <div class="flex gap-1">{labels}</div>
            <button type="button" class="btn btn-ghost btn-xs" onclick={on_labels}>
                {bundle.text("assets.labels", "Labels")}
            </button>
        </div>
    }
}

fn labels_trigger(key: AssetKey) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.stop_propagation();
        let dispatch = Dispatch::<AppStore>::new();
        if labels_access(&dispatch.get()).is_none() {
            return;
        }
        let anchor = event.target_dyn_into::<Element>().map(|el| anchor_of(&el));
        let key = key.clone();
        dispatch.reduce_mut(move |store| {
            store.modal = Some(ActiveModal::ManageLabels { key, anchor });
        });
    })
}

/// Mount the dashboard into `#root`, or the document body when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<NimbusApp>::with_root(root).render();
    } else {
        yew::Renderer::<NimbusApp>::new().render();
    }
}
