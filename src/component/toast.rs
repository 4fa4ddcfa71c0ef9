use crate::Result;
use crate::config::{Config, DEFAULT_TOAST_LIFETIME_MS};
use crate::error::Error;
use crate::utils::{append_child, create_element, get_body, get_document, get_window};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element};

const TOAST_CLASS_NAME: &str = "flash";

#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info = 0,
    Error = 1,
}

impl ToastLevel {
    pub fn class_name(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Error => "error",
        }
    }
}

/// Build the `class` attribute of a toast, e.g. `flash error`.
pub fn toast_class_names(level: ToastLevel) -> String {
    format!("{TOAST_CLASS_NAME} {}", level.class_name())
}

/// Shows transient banners at the end of the body.
/// Every banner removes itself once `lifetime_ms` has elapsed.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    lifetime_ms: u32,
}

impl Toaster {
    pub fn new(lifetime_ms: u32) -> Self {
        Self { lifetime_ms }
    }

    pub fn show(&self, document: &Document, text: &str, level: ToastLevel) -> Result<Element> {
        let toast = create_element(document, "div")?;
        toast.set_class_name(&toast_class_names(level));
        toast.set_text_content(Some(text));
        let body = get_body(document)?;
        append_child(&body, &toast)?;

        self.schedule_removal(&toast)?;

        Ok(toast)
    }

    fn schedule_removal(&self, toast: &Element) -> Result<()> {
        let toast = toast.clone();
        let closure = Closure::once(move || toast.remove());
        get_window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            i32::try_from(self.lifetime_ms).unwrap_or(i32::MAX),
        )?;
        closure.forget();

        Ok(())
    }

    /// Log an error with its technical details and show its user message.
    pub fn report_error(&self, document: &Document, error: &Error) {
        log::error!("{error:?}");
        if let Err(toast_error) = self.show(document, error.msg(), ToastLevel::Error) {
            log::error!("Can't show error toast: {toast_error:?}");
        }
    }

    /// Run a handler body, reporting its error if any.
    pub fn unwrap_or_toast(&self, document: &Document, result: Result<()>) {
        if let Err(error) = result {
            self.report_error(document, &error);
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_LIFETIME_MS)
    }
}

/// Show a toast from page scripts. Level defaults to `Info`.
/// The lifetime comes from the page configuration, like the toasts of the enhancements.
#[wasm_bindgen]
pub fn toast(text: &str, level: Option<ToastLevel>) {
    let result = get_document().and_then(|document| {
        let toaster = Toaster::new(*Config::load(&document).toast_lifetime_ms());
        toaster.show(&document, text, level.unwrap_or(ToastLevel::Info))
    });
    if let Err(error) = result {
        log::error!("Can't show toast: {error:?}");
    }
}
