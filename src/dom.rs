use web_sys::{Document, HtmlElement, Window};

use crate::error::{UiError, UiResult};

pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> UiResult<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body() -> UiResult<HtmlElement> {
    document()?.body().ok_or(UiError::NoBody)
}
