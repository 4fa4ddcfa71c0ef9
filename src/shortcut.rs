use crate::Result;
use crate::component::toast::Toaster;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlFormElement, KeyboardEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutModifier {
    Control,
    Meta,
}

/// Modifier+Enter submits the focused form.
pub fn is_submit_shortcut(
    modifier: ShortcutModifier,
    ctrl_key: bool,
    meta_key: bool,
    key: &str,
) -> bool {
    let modifier_pressed = match modifier {
        ShortcutModifier::Control => ctrl_key,
        ShortcutModifier::Meta => meta_key,
    };
    modifier_pressed && key == "Enter"
}

pub fn bind_keyboard_shortcut(
    document: &Document,
    modifier: ShortcutModifier,
    toaster: Toaster,
) -> Result<()> {
    let listened_document = document.clone();
    let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if is_submit_shortcut(modifier, e.ctrl_key(), e.meta_key(), &e.key()) {
            let result = submit_focused_form(&listened_document);
            toaster.unwrap_or_toast(&listened_document, result);
        }
    }) as Box<dyn Fn(_)>);
    document.add_event_listener_with_event_listener("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();

    log::debug!("Keyboard shortcut bound");
    Ok(())
}

/// Submit the form containing the focused element, if any.
pub fn submit_focused_form(document: &Document) -> Result<()> {
    let Some(active_element) = document.active_element() else {
        return Ok(());
    };
    let Some(form) = active_element.closest("form")? else {
        return Ok(());
    };

    submit_form(&form.dyn_into::<HtmlFormElement>()?)
}

/// `requestSubmit` runs constraint validation and fires `submit`, so the guards above see it.
/// Older hosts lack it, in which case the form is posted directly.
fn submit_form(form: &HtmlFormElement) -> Result<()> {
    if let Err(error) = form.request_submit() {
        log::debug!("requestSubmit unavailable, submitting directly: {error:?}");
        form.submit()?;
    }

    Ok(())
}
