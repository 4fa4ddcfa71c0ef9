use crate::Result;
use crate::component::toast::Toaster;
use crate::utils::{append_child, create_html_element, set_style};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

const ROSTER_LIST_SELECTOR: &str = "section.section h3 + ul";

/// Trim like the browser does, byte order marks included, then case-fold.
pub fn normalize_query(query: &str) -> String {
    query
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

/// Whether a row stays visible for an already normalized query.
/// The whole text of the row is searched, so rank labels match as well as names.
pub fn row_matches(row_text: &str, normalized_query: &str) -> bool {
    row_text.to_lowercase().contains(normalized_query)
}

/// Insert a text input above the roster list and filter its rows on every keystroke.
pub fn bind_roster_filter(document: &Document, placeholder: &str, toaster: Toaster) -> Result<()> {
    let Some(list) = document.query_selector(ROSTER_LIST_SELECTOR)? else {
        log::debug!("No roster on this page");
        return Ok(());
    };
    let Some(parent) = list.parent_element() else {
        log::debug!("Roster list is detached, not filtering");
        return Ok(());
    };

    let input = create_filter_input(document, &parent, &list, placeholder)?;

    let listened_input = input.clone();
    let document = document.clone();
    let closure = Closure::wrap(Box::new(move |_: Event| {
        let result = apply_filter(&list, &listened_input.value());
        toaster.unwrap_or_toast(&document, result);
    }) as Box<dyn Fn(_)>);
    input.add_event_listener_with_event_listener("input", closure.as_ref().unchecked_ref())?;
    closure.forget();

    log::debug!("Roster filter bound");
    Ok(())
}

fn create_filter_input(
    document: &Document,
    parent: &Element,
    list: &Element,
    placeholder: &str,
) -> Result<HtmlInputElement> {
    let wrapper = create_html_element(document, "div")?;
    set_style(&wrapper, "margin", "0.5rem 0 1rem")?;

    let input = create_html_element(document, "input")?.dyn_into::<HtmlInputElement>()?;
    input.set_type("text");
    input.set_placeholder(placeholder);
    set_style(&input, "padding", "0.5rem")?;
    set_style(&input, "width", "100%")?;

    append_child(&wrapper, &input)?;
    parent.insert_before(&wrapper, Some(list))?;

    Ok(input)
}

/// Show exactly the rows of `list` containing `query`, case-insensitively.
pub fn apply_filter(list: &Element, query: &str) -> Result<()> {
    let query = normalize_query(query);
    let rows = list.query_selector_all("li")?;
    for i in 0..rows.length() {
        let Some(row) = rows.item(i) else {
            continue;
        };
        let row = row.dyn_into::<HtmlElement>()?;
        let text = row.text_content().unwrap_or_default();
        let display = if row_matches(&text, &query) { "" } else { "none" };
        set_style(&row, "display", display)?;
    }

    Ok(())
}
