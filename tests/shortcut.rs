//! Keyboard shortcut tests, run with `wasm-pack test --headless --firefox`.
//! Kept apart from `web.rs` so that only one document listener exists in the page.
#![cfg(target_arch = "wasm32")]

use archives_enhancements::component::toast::Toaster;
use archives_enhancements::shortcut::{ShortcutModifier, bind_keyboard_shortcut};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn select(document: &Document, selector: &str) -> Element {
    document.query_selector(selector).unwrap().unwrap()
}

fn count_submissions(form: &Element) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let counted = count.clone();
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        counted.set(counted.get() + 1);
    }) as Box<dyn Fn(_)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        .unwrap();
    closure.forget();
    count
}

fn focus(document: &Document, selector: &str) {
    select(document, selector)
        .dyn_into::<HtmlElement>()
        .unwrap()
        .focus()
        .unwrap();
}

/// Press Enter on the focused element, with the given modifiers held.
fn press_enter(document: &Document, ctrl_key: bool, meta_key: bool) {
    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    init.set_ctrl_key(ctrl_key);
    init.set_meta_key(meta_key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document
        .active_element()
        .unwrap()
        .dispatch_event(&event)
        .unwrap();
}

// A single test: every binding adds a listener to the document for the rest of the page.
#[wasm_bindgen_test]
fn should_submit_focused_form_on_control_enter_only() {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(
        r#"<input id="outside"><form action="/roster/add"><input name="name"></form>"#,
    );
    let count = count_submissions(&select(&document, "form"));
    bind_keyboard_shortcut(&document, ShortcutModifier::Control, Toaster::default()).unwrap();

    focus(&document, r#"input[name="name"]"#);
    press_enter(&document, true, false);
    assert_eq!(1, count.get());

    press_enter(&document, false, false);
    assert_eq!(1, count.get());

    press_enter(&document, false, true);
    assert_eq!(1, count.get());

    focus(&document, "#outside");
    press_enter(&document, true, false);
    assert_eq!(1, count.get());
}
