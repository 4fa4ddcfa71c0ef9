use std::fmt::{Debug, Display, Formatter};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, Node};

pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please reload the page.";

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub struct Error {
    msg: String,
    technical_msg: String,
    parent: Option<Box<Error>>,
}

impl Error {
    pub fn new(msg: &str, technical_msg: &str) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: technical_msg.to_owned(),
            parent: None,
        }
    }

    pub fn from_parent(msg: &str, parent: Error) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: msg.to_owned(),
            parent: Some(Box::new(parent)),
        }
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl Default for Error {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_MESSAGE)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.parent {
            None => {
                write!(f, "{}", self.technical_msg)
            }
            Some(parent) => {
                write!(f, "{}: caused by:\n{:?}", self.technical_msg, parent)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let technical_msg = value
            .as_string()
            .unwrap_or_else(|| format!("Unknown JS error: {value:?}"));
        Self::new(DEFAULT_ERROR_MESSAGE, &technical_msg)
    }
}

impl From<Element> for Error {
    fn from(element: Element) -> Self {
        let text = format!("A cast has failed for element: {element:?}");
        Self::new(DEFAULT_ERROR_MESSAGE, &text)
    }
}

impl From<HtmlElement> for Error {
    fn from(element: HtmlElement) -> Self {
        let text = format!("A cast has failed for HTML element: {element:?}");
        Self::new(DEFAULT_ERROR_MESSAGE, &text)
    }
}

impl From<Node> for Error {
    fn from(node: Node) -> Self {
        let text = format!("A cast has failed for node: {node:?}");
        Self::new(DEFAULT_ERROR_MESSAGE, &text)
    }
}

impl From<serde_json_wasm::de::Error> for Error {
    fn from(error: serde_json_wasm::de::Error) -> Self {
        Self::new(
            "The page configuration is invalid.",
            &format!("Can't deserialize configuration: {error}"),
        )
    }
}
