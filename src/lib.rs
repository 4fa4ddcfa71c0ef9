//! Progressive enhancements for the Aldanese Archives pages.
//!
//! The server renders every page and handles every form. This library only adds
//! comfort on top of it: confirmation of sensitive actions, checks before posting
//! forms, a roster filter, toasts and a submit shortcut. Any page keeps working
//! without it.

pub mod add_form;
pub mod component;
pub mod config;
pub mod confirmation;
pub mod error;
pub mod login_form;
pub mod roster_filter;
pub mod shortcut;
mod utils;
pub mod validation;

pub use error::Result;

use crate::component::toast::Toaster;
use crate::config::Config;
use crate::utils::get_document;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Document;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());

    let document = match get_document() {
        Ok(document) => document,
        Err(error) => {
            log::error!("Enhancements disabled: {error:?}");
            return;
        }
    };

    if document.ready_state() == "loading" {
        if let Err(error) = init_on_structural_ready(&document) {
            log::error!("Can't wait for the page structure: {error:?}");
        }
    } else {
        init(&document, &Config::load(&document));
    }
}

fn init_on_structural_ready(document: &Document) -> Result<()> {
    let listened_document = document.clone();
    let closure = Closure::once(move || {
        init(&listened_document, &Config::load(&listened_document));
    });
    document.add_event_listener_with_event_listener(
        "DOMContentLoaded",
        closure.as_ref().unchecked_ref(),
    )?;
    closure.forget();

    Ok(())
}

/// Attach every enhancement to `document`.
/// A binder that fails is logged and does not prevent the others from being attached.
pub fn init(document: &Document, config: &Config) {
    let toaster = Toaster::new(*config.toast_lifetime_ms());

    let results = [
        (
            "confirmations",
            confirmation::bind_confirmations(document, config.sensitive_actions(), toaster),
        ),
        (
            "roster filter",
            roster_filter::bind_roster_filter(document, config.filter_placeholder(), toaster),
        ),
        ("add form", add_form::bind_add_form(document, toaster)),
        ("login form", login_form::bind_login_form(document, toaster)),
        (
            "keyboard shortcut",
            shortcut::bind_keyboard_shortcut(document, *config.shortcut_modifier(), toaster),
        ),
    ];

    for (name, result) in results {
        if let Err(error) = result {
            log::error!("Can't attach {name}: {error:?}");
        }
    }

    log::info!("Enhancements ready");
}
