use crate::Result;
use crate::error::Error;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, Window,
};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::new(crate::error::DEFAULT_ERROR_MESSAGE, "No window"))
}

pub fn get_document() -> Result<Document> {
    get_window()?
        .document()
        .ok_or_else(|| Error::new(crate::error::DEFAULT_ERROR_MESSAGE, "No document on window"))
}

pub fn get_body(document: &Document) -> Result<HtmlElement> {
    document
        .body()
        .ok_or_else(|| Error::new(crate::error::DEFAULT_ERROR_MESSAGE, "No body in document"))
}

pub fn create_element(document: &Document, name: &str) -> Result<Element> {
    Ok(document.create_element(name)?)
}

pub fn create_html_element(document: &Document, name: &str) -> Result<HtmlElement> {
    Ok(create_element(document, name)?.dyn_into::<HtmlElement>()?)
}

pub fn append_child(container: &Element, child: &Element) -> Result<()> {
    container.append_child(child)?;
    Ok(())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<()> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// Find the first form whose `action` attribute ends with `/<action>`.
/// Absence is not an error: the same script runs on pages without that form.
pub fn find_form_by_action(document: &Document, action: &str) -> Result<Option<HtmlFormElement>> {
    let selector = format!(r#"form[action$="/{action}"]"#);
    match document.query_selector(&selector)? {
        None => Ok(None),
        Some(form) => Ok(Some(form.dyn_into::<HtmlFormElement>()?)),
    }
}

/// Read the current value of the first field matching `selector` inside `container`.
/// Returns `None` when no such field exists.
pub fn get_field_value(container: &Element, selector: &str) -> Result<Option<String>> {
    let Some(field) = container.query_selector(selector)? else {
        return Ok(None);
    };

    let value = if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        field.get_attribute("value").unwrap_or_default()
    };

    Ok(Some(value))
}
