use super::InputWiring;
use crate::input::{action_for_key, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::ToggleTheme => super::toggle_theme(w),
        KeyAction::ScrollToTop => {
            ev.prevent_default();
            w.scroll.borrow().scroll_to(0.0, true);
        }
        KeyAction::ToggleMute => {
            w.audio.borrow_mut().toggle_muted();
        }
    }
}

pub fn wire_global_keydown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &w);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
