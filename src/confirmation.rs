use crate::Result;
use crate::component::toast::{ToastLevel, Toaster};
use crate::utils::{find_form_by_action, get_field_value, get_window};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlFormElement};

/// Actions on a member which must be confirmed before being posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitiveAction {
    Promote,
    Demote,
    Medal,
}

impl SensitiveAction {
    pub const ALL: [SensitiveAction; 3] = [
        SensitiveAction::Promote,
        SensitiveAction::Demote,
        SensitiveAction::Medal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensitiveAction::Promote => "promote",
            SensitiveAction::Demote => "demote",
            SensitiveAction::Medal => "medal",
        }
    }
}

impl Display for SensitiveAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What to do with a sensitive form once its fields have been read.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmissionCheck {
    /// Nothing selected: cancel and tell the user.
    MissingSelection(String),
    /// Ask the user before letting the browser post the form.
    AskConfirmation(String),
}

pub fn check_submission(action: SensitiveAction, target_id: &str, value: &str) -> SubmissionCheck {
    if value.is_empty() {
        SubmissionCheck::MissingSelection(format!("Choose a value before {action}."))
    } else {
        SubmissionCheck::AskConfirmation(format!("Confirm {action} {target_id} → {value}?"))
    }
}

/// Require a selection and an explicit confirmation on every sensitive form of the page.
pub fn bind_confirmations(
    document: &Document,
    actions: &[SensitiveAction],
    toaster: Toaster,
) -> Result<()> {
    for &action in actions {
        match find_form_by_action(document, action.as_str())? {
            Some(form) => {
                add_confirmation_listener(document, &form, action, toaster)?;
                log::debug!("Confirmation bound on `{action}` form");
            }
            None => log::debug!("No `{action}` form on this page"),
        }
    }

    Ok(())
}

fn add_confirmation_listener(
    document: &Document,
    form: &HtmlFormElement,
    action: SensitiveAction,
    toaster: Toaster,
) -> Result<()> {
    let document = document.clone();
    let listened_form = form.clone();
    let closure = Closure::wrap(Box::new(move |e: Event| {
        let result = on_sensitive_submit(&document, &listened_form, action, toaster, &e);
        toaster.unwrap_or_toast(&document, result);
    }) as Box<dyn Fn(_)>);
    form.add_event_listener_with_event_listener("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();

    Ok(())
}

fn on_sensitive_submit(
    document: &Document,
    form: &HtmlFormElement,
    action: SensitiveAction,
    toaster: Toaster,
    event: &Event,
) -> Result<()> {
    let target_id = get_field_value(form, r#"input[name="id"]"#)?.unwrap_or_default();
    let value = get_field_value(form, "select")?.unwrap_or_default();

    match check_submission(action, &target_id, &value) {
        SubmissionCheck::MissingSelection(message) => {
            event.prevent_default();
            log::debug!("`{action}` blocked: no selection");
            toaster.show(document, &message, ToastLevel::Error)?;
        }
        SubmissionCheck::AskConfirmation(message) => {
            if !get_window()?.confirm_with_message(&message)? {
                event.prevent_default();
                log::debug!("`{action}` declined for `{target_id}`");
            }
        }
    }

    Ok(())
}
