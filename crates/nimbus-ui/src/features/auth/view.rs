//! Forgot-password page and change-password modal.

use crate::app::api::ApiCtx;
use crate::app::notify::StoreNotifier;
use crate::app::routes::Route;
use crate::components::input::Input;
use crate::components::modal::Modal;
use crate::core::modal::ModalPlacement;
use crate::core::store::AppStore;
use crate::core::validation::{
    CONFIRM_PASSWORD_ERROR, EMAIL_ERROR, PASSWORD_ERROR, PASSWORD_PATTERN,
    confirm_password_pattern, confirmation_matches, is_valid_email, is_valid_password,
};
use crate::features::auth::actions::{submit_change_password, submit_forgot_password};
use crate::features::auth::state::{ChangePasswordForm, ForgotPasswordForm};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(ForgotPasswordPage)]
pub(crate) fn forgot_password_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let form = use_state(ForgotPasswordForm::default);
    let Some(api) = api else {
        return html! {};
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |email: String| form.set(ForgotPasswordForm { email }))
    };
    let onsubmit = {
        let form = form.clone();
        let auth = api.auth.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !form.can_submit() {
                return;
            }
            let email = form.email.clone();
            let auth = auth.clone();
            yew::platform::spawn_local(async move {
                let notifier = StoreNotifier::new();
                submit_forgot_password(auth.as_ref(), &email, &notifier).await;
            });
        })
    };

    html! {
        <main class="flex min-h-screen items-center justify-center">
            <form class="flex w-96 flex-col gap-4 rounded-3xl p-8 shadow" {onsubmit}>
                <h1 class="text-xl font-semibold">
                    {bundle.text("auth.forgot.title", "Forgot Your Password?")}
                </h1>
                <Input
                    label={bundle.text("auth.forgot.email", "Email")}
                    value={form.email.clone()}
                    on_input={on_email}
                    input_type="email"
                    autocomplete={Some(AttrValue::from("email"))}
                    placeholder={bundle.text("auth.forgot.email_placeholder", "Enter your email")}
                    valid={is_valid_email(&form.email)}
                    error={Some(AttrValue::from(EMAIL_ERROR))}
                    autofocus=true
                />
                <button type="submit" class="btn btn-primary rounded-full" disabled={!form.can_submit()}>
                    {bundle.text("auth.forgot.submit", "Send link")}
                </button>
                <Link<Route> to={Route::Dashboard} classes={classes!("link", "text-sm")}>
                    {bundle.text("auth.forgot.back", "Go back to login")}
                </Link<Route>>
            </form>
        </main>
    }
}

fn close_modal() {
    Dispatch::<AppStore>::new().reduce_mut(|store| store.modal = None);
}

#[function_component(ChangePasswordModal)]
pub(crate) fn change_password_modal() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let form = use_state(ChangePasswordForm::default);
    let Some(api) = api else {
        return html! {};
    };

    let field = |update: fn(&mut ChangePasswordForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            update(&mut next, value);
            form.set(next);
        })
    };
    let on_old = field(|form, value| form.old_password = value);
    let on_new = field(|form, value| form.new_password = value);
    let on_confirm = field(|form, value| form.confirm_new_password = value);

    let onsubmit = {
        let form = form.clone();
        let auth = api.auth.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form).clone();
            if !next.is_valid() || !next.begin_submit() {
                return;
            }
            let old_password = next.old_password.clone();
            let new_password = next.new_password.clone();
            let snapshot = next.clone();
            let form = form.clone();
            let auth = auth.clone();
            yew::platform::spawn_local(async move {
                let notifier = StoreNotifier::new();
                let set_submitting = |submitting: bool| {
                    form.set(ChangePasswordForm {
                        is_submitting: submitting,
                        ..snapshot.clone()
                    });
                };
                let changed = submit_change_password(
                    auth.as_ref(),
                    &old_password,
                    &new_password,
                    set_submitting,
                    &notifier,
                )
                .await;
                if changed {
                    close_modal();
                }
            });
        })
    };

    html! {
        <Modal
            placement={ModalPlacement::Centered}
            on_close={Callback::from(|()| close_modal())}
            panel_class={classes!("w-96")}
        >
            <form class="flex flex-col gap-4 p-6" {onsubmit}>
                <h1 class="text-lg font-semibold">
                    {bundle.text("auth.change.title", "Change your password")}
                </h1>
                <Input
                    label={bundle.text("auth.change.old", "Old password")}
                    value={form.old_password.clone()}
                    on_input={on_old}
                    input_type="password"
                    autocomplete={Some(AttrValue::from("current-password"))}
                    placeholder={bundle.text("auth.change.old_placeholder", "Enter your old password")}
                    pattern={Some(AttrValue::from(PASSWORD_PATTERN))}
                    valid={is_valid_password(&form.old_password)}
                    error={Some(AttrValue::from(PASSWORD_ERROR))}
                    autofocus=true
                />
                <Input
                    label={bundle.text("auth.change.new", "New password")}
                    value={form.new_password.clone()}
                    on_input={on_new}
                    input_type="password"
                    autocomplete={Some(AttrValue::from("new-password"))}
                    placeholder={bundle.text("auth.change.new_placeholder", "Enter your new password")}
                    pattern={Some(AttrValue::from(PASSWORD_PATTERN))}
                    valid={is_valid_password(&form.new_password)}
                    error={Some(AttrValue::from(PASSWORD_ERROR))}
                />
                <Input
                    label={bundle.text("auth.change.confirm", "Confirm new password")}
                    value={form.confirm_new_password.clone()}
                    on_input={on_confirm}
                    input_type="password"
                    autocomplete={Some(AttrValue::from("new-password"))}
                    placeholder={bundle.text("auth.change.confirm_placeholder", "Confirm your new password")}
                    pattern={Some(AttrValue::from(confirm_password_pattern(&form.new_password)))}
                    valid={confirmation_matches(&form.new_password, &form.confirm_new_password)}
                    error={Some(AttrValue::from(CONFIRM_PASSWORD_ERROR))}
                />
                <button type="submit" class="btn btn-primary rounded-full" disabled={!form.can_submit()}>
                    if form.is_submitting {
                        <span class="loading loading-spinner loading-sm"></span>
                    }
                    {bundle.text("auth.change.submit", "Reset")}
                </button>
            </form>
        </Modal>
    }
}
