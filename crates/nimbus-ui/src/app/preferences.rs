//! Persistence and environment helpers for the app shell.

use crate::core::auth::UserSession;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use crate::models::BackendType;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlMetaElement, Url};

pub(crate) const LOCALE_KEY: &str = "nimbus.locale";
pub(crate) const BACKEND_KEY: &str = "nimbus.backend";
/// Written by the sign-in flow; read-only here.
pub(crate) const SESSION_KEY: &str = "nimbus.session";
const API_BASE_META: &str = "meta[name=\"nimbus-api-base\"]";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

pub(crate) fn load_backend_type() -> BackendType {
    LocalStorage::get::<String>(BACKEND_KEY)
        .ok()
        .and_then(|value| BackendType::parse(&value))
        .unwrap_or(BackendType::Remote)
}

pub(crate) fn persist_backend_type(backend: BackendType) {
    set_storage(BACKEND_KEY, backend.as_str());
}

pub(crate) fn load_session() -> Option<UserSession> {
    LocalStorage::get::<UserSession>(SESSION_KEY).ok()
}

pub(crate) fn api_base_url() -> String {
    if let Some(base) = meta_api_base() {
        return base;
    }
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let mapped_port = match url.port().as_str() {
            "" => None,
            "8080" => Some("7070".to_string()),
            other => Some(other.to_string()),
        };
        let mut base = format!("{}//{}", url.protocol(), url.hostname());
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(&port);
        }
        return base;
    }

    "http://localhost:7070".to_string()
}

fn meta_api_base() -> Option<String> {
    let element = document().query_selector(API_BASE_META).ok()??;
    let content = element.dyn_into::<HtmlMetaElement>().ok()?.content();
    let trimmed = content.trim();
    (!trimmed.is_empty()).then(|| trimmed.trim_end_matches('/').to_string())
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        console::error!("storage operation failed", "set", key, err.to_string());
    }
}
