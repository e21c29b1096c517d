use super::InputWiring;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window, normalized against the canvas rect.
pub fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = w.canvas.get_bounding_client_rect();
        let p = input::client_to_ndc(
            ev.client_x() as f32,
            ev.client_y() as f32,
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
        w.pointer.set(p);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
