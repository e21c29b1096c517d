use crate::constants::{
    BACK_TO_TOP_ID, FADING_CLASS, HIDDEN_CLASS, OVERLAY_FADE_MS, START_OVERLAY_ID, VISIBLE_CLASS,
};
use scrollfield_core::Theme;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.remove_1(HIDDEN_CLASS);
        _ = cl.remove_1(FADING_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Start the CSS fade and remove the overlay once it has finished.
pub fn fade_out(document: &web::Document) {
    let Some(el) = document.get_element_by_id(START_OVERLAY_ID) else {
        return;
    };
    _ = el.class_list().add_1(FADING_CLASS);
    let doc = document.clone();
    let done = Closure::once_into_js(move || hide(&doc));
    if let Some(w) = web::window() {
        if w
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                done.unchecked_ref(),
                OVERLAY_FADE_MS,
            )
            .is_err()
        {
            hide(document);
        }
    }
}

/// Reflect the theme on `<body>` so page CSS can follow it.
pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        _ = body.set_attribute(crate::constants::THEME_ATTR, theme.as_str());
        let cl = body.class_list();
        _ = cl.remove_1(theme.toggled().as_str());
        _ = cl.add_1(theme.as_str());
    }
}

pub fn set_back_to_top_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(BACK_TO_TOP_ID) {
        _ = el.class_list().toggle_with_force(VISIBLE_CLASS, visible);
    }
}
