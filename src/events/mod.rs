pub mod keyboard;
pub mod pointer;

use crate::audio::AudioManager;
use crate::input::PointerState;
use crate::overlay;
use crate::scroll::ScrollHost;
use scrollfield_core::Theme;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Handles shared between DOM listeners and the frame loop.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub theme: Rc<Cell<Theme>>,
    pub pointer: Rc<Cell<PointerState>>,
    pub scroll: Rc<RefCell<ScrollHost>>,
    pub audio: Rc<RefCell<AudioManager>>,
}

pub fn wire_input_handlers(w: &InputWiring) {
    pointer::wire_pointermove(w);
    keyboard::wire_global_keydown(w);
    wire_theme_toggle(w);
}

pub(crate) fn toggle_theme(w: &InputWiring) {
    let next = w.theme.get().toggled();
    w.theme.set(next);
    if let Some(doc) = crate::dom::window_document() {
        overlay::apply_theme(&doc, next);
    }
    log::info!("[theme] switched to {}", next.as_str());
}

fn wire_theme_toggle(w: &InputWiring) {
    let Some(doc) = crate::dom::window_document() else {
        return;
    };
    let w = w.clone();
    crate::dom::add_click_listener(&doc, crate::constants::THEME_TOGGLE_ID, move || {
        w.audio.borrow().play_click();
        toggle_theme(&w);
    });
}
