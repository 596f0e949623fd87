use crate::constants::{LOADING_BAR_ID, LOADING_OVERLAY_ID};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

/// Update the loading bar with a 0..=1 fraction.
pub fn set_progress(document: &web::Document, fraction: f64) {
    if let Some(el) = document.get_element_by_id(LOADING_BAR_ID) {
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            let pct = (fraction * 100.0).clamp(0.0, 100.0);
            _ = el.style().set_property("width", &format!("{pct:.0}%"));
            el.set_text_content(Some(&format!("{pct:.0}%")));
        }
    }
}
