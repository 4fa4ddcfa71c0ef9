use crate::Result;
use crate::component::toast::{ToastLevel, Toaster};
use crate::utils::find_form_by_action;
use crate::validation::ValidationError;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlFormElement};

/// Reads the fields of a form and decides whether it may be posted.
pub type FormValidator = fn(&HtmlFormElement) -> Result<Result<(), ValidationError>>;

/// Cancel the submission of the form posting to `/<action>` while `validator` rejects it.
/// Pages without such a form are left untouched.
pub fn guard_form_submission(
    document: &Document,
    action: &str,
    validator: FormValidator,
    toaster: Toaster,
) -> Result<()> {
    let Some(form) = find_form_by_action(document, action)? else {
        log::debug!("No `{action}` form on this page");
        return Ok(());
    };

    let document = document.clone();
    let listened_form = form.clone();
    let action = action.to_owned();
    let closure = Closure::wrap(Box::new(move |e: Event| {
        let result = on_submit(&document, &listened_form, &action, validator, toaster, &e);
        toaster.unwrap_or_toast(&document, result);
    }) as Box<dyn Fn(_)>);
    form.add_event_listener_with_event_listener("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();

    log::debug!("Validation bound on `{}` form", form.action());
    Ok(())
}

fn on_submit(
    document: &Document,
    form: &HtmlFormElement,
    action: &str,
    validator: FormValidator,
    toaster: Toaster,
    event: &Event,
) -> Result<()> {
    if let Err(rejection) = validator(form)? {
        event.prevent_default();
        log::debug!("`{action}` form blocked: {rejection}");
        toaster.show(document, &rejection.to_string(), ToastLevel::Error)?;
    }

    Ok(())
}
